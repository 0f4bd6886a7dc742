//! Store seam between the todo service and the database.
//!
//! The service only sees this trait, so tests can swap in an in-memory
//! implementation and assert on call behavior.

use async_trait::async_trait;

use crate::db::{DbError, QueryExecutor, SqlParam};

use super::model::{Todo, STATUS_COMPLETE};

/// Persistence operations the todo service needs.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos. `None` when the table is empty.
    async fn list(&self) -> Result<Option<Vec<Todo>>, DbError>;

    /// Insert a todo by name, returning the generated id.
    async fn add(&self, name: &str) -> Result<Option<i64>, DbError>;

    /// Fetch one todo by id.
    async fn fetch(&self, id: i64) -> Result<Option<Todo>, DbError>;

    /// Delete by id. `false` when no row matched.
    async fn remove(&self, id: i64) -> Result<bool, DbError>;

    /// Set status to complete. `false` when no row matched.
    async fn mark_complete(&self, id: i64) -> Result<bool, DbError>;
}

/// Postgres-backed store over the per-statement executor.
#[derive(Clone)]
pub struct PgTodoStore {
    exec: QueryExecutor,
}

impl PgTodoStore {
    pub fn new(exec: QueryExecutor) -> Self {
        Self { exec }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Option<Vec<Todo>>, DbError> {
        self.exec
            .select_many("SELECT id, name, status FROM todos", &[])
            .await
    }

    async fn add(&self, name: &str) -> Result<Option<i64>, DbError> {
        self.exec
            .insert("todos", &[("name", SqlParam::Text(name.to_string()))])
            .await
    }

    async fn fetch(&self, id: i64) -> Result<Option<Todo>, DbError> {
        self.exec
            .select_one(
                "SELECT id, name, status FROM todos WHERE id = $1",
                &[SqlParam::BigInt(id)],
            )
            .await
    }

    async fn remove(&self, id: i64) -> Result<bool, DbError> {
        self.exec
            .delete("DELETE FROM todos WHERE id = $1", &[SqlParam::BigInt(id)])
            .await
    }

    async fn mark_complete(&self, id: i64) -> Result<bool, DbError> {
        self.exec
            .update(
                "UPDATE todos SET status = $1 WHERE id = $2",
                &[SqlParam::Int(STATUS_COMPLETE), SqlParam::BigInt(id)],
            )
            .await
    }
}
