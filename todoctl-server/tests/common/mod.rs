//! In-memory store fake shared by the integration tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use todoctl_server::db::DbError;
use todoctl_server::todo::{Todo, TodoStore, STATUS_COMPLETE, STATUS_OPEN};

/// Store backed by a `Vec`, counting every call so tests can assert the
/// service never touches persistence on a rejected request.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Todo>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many store methods have been invoked so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn track(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Option<Vec<Todo>>, DbError> {
        self.track();
        let rows = self.rows.lock().unwrap();
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.clone()))
        }
    }

    async fn add(&self, name: &str) -> Result<Option<i64>, DbError> {
        self.track();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Todo {
            id,
            name: name.to_string(),
            status: STATUS_OPEN,
        });
        Ok(Some(id))
    }

    async fn fetch(&self, id: i64) -> Result<Option<Todo>, DbError> {
        self.track();
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|todo| todo.id == id).cloned())
    }

    async fn remove(&self, id: i64) -> Result<bool, DbError> {
        self.track();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|todo| todo.id != id);
        Ok(rows.len() < before)
    }

    async fn mark_complete(&self, id: i64) -> Result<bool, DbError> {
        self.track();
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.status = STATUS_COMPLETE;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
