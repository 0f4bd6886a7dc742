//! Request validation and dispatch for the todo API.
//!
//! Every request names an operation (`GET`, `ADD`, `DEL`, `SUP`) plus the
//! fields that operation needs. Validation runs before any store call, so a
//! malformed request never touches the database.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::DbError;

use super::model::Todo;
use super::store::TodoStore;

/// Outcome message for a successful insert.
pub const MSG_ADDED: &str = "ADDED";
/// Outcome message for a failed insert.
pub const MSG_NOT_ADDED: &str = "NOT_ADDED";
/// Outcome message for a successful delete.
pub const MSG_DELETED: &str = "DELETED";
/// Outcome message for a delete that matched nothing.
pub const MSG_NOT_DELETED: &str = "NOT_DELETED";
/// Outcome message for a successful status update.
pub const MSG_UPDATED: &str = "UPDATED";
/// Outcome message for an update that matched nothing.
pub const MSG_NOT_UPDATED: &str = "NOT_UPDATED";

/// Incoming todo request body. All fields optional; validation decides
/// which are required for the named operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// A validated operation, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoOp {
    Get,
    Add { name: String },
    Del { id: i64 },
    Sup { id: i64 },
}

/// Why a request failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingOp,
    UnknownOp { value: String },
    Empty { field: &'static str },
    NotPositive { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingOp => write!(f, "missing op"),
            ValidationError::UnknownOp { value } => write!(f, "unknown op: {value}"),
            ValidationError::Empty { field } => write!(f, "{field} must not be empty"),
            ValidationError::NotPositive { field } => {
                write!(f, "{field} must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a request against the operation table.
pub fn validate(request: &TodoRequest) -> Result<TodoOp, ValidationError> {
    let op = request.op.as_deref().ok_or(ValidationError::MissingOp)?;

    match op {
        "GET" => Ok(TodoOp::Get),
        "ADD" => {
            let name = request
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(ValidationError::Empty { field: "name" })?;
            Ok(TodoOp::Add {
                name: name.to_string(),
            })
        }
        "DEL" => Ok(TodoOp::Del {
            id: positive_id(request)?,
        }),
        "SUP" => Ok(TodoOp::Sup {
            id: positive_id(request)?,
        }),
        other => Err(ValidationError::UnknownOp {
            value: other.to_string(),
        }),
    }
}

fn positive_id(request: &TodoRequest) -> Result<i64, ValidationError> {
    let id = request.id.ok_or(ValidationError::Empty { field: "id" })?;
    if id <= 0 {
        return Err(ValidationError::NotPositive { field: "id" });
    }
    Ok(id)
}

/// Response body for a todo request.
///
/// `GET` answers with either the row list or the literal `false` when the
/// table is empty; mutations answer with an outcome message and, where one
/// exists, the affected row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TodoResponse {
    Rows(Vec<Todo>),
    NoRows(bool),
    Outcome {
        msg: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        todo: Option<Todo>,
    },
}

impl TodoResponse {
    /// The empty-table answer, serialized as the JSON literal `false`.
    pub fn empty() -> Self {
        TodoResponse::NoRows(false)
    }

    fn outcome(msg: &'static str, todo: Option<Todo>) -> Self {
        TodoResponse::Outcome { msg, todo }
    }
}

/// Failures surfaced by [`TodoService::handle`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Validates requests and dispatches them to the store.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Validate and run one request.
    pub async fn handle(&self, request: &TodoRequest) -> Result<TodoResponse, ServiceError> {
        let op = validate(request)?;

        match op {
            TodoOp::Get => match self.store.list().await? {
                Some(todos) => Ok(TodoResponse::Rows(todos)),
                None => Ok(TodoResponse::empty()),
            },
            TodoOp::Add { name } => match self.store.add(&name).await? {
                Some(id) => {
                    // Re-select by generated id so the caller sees the row
                    // exactly as stored, defaults included.
                    let todo = self.store.fetch(id).await?;
                    match todo {
                        Some(todo) => Ok(TodoResponse::outcome(MSG_ADDED, Some(todo))),
                        None => Ok(TodoResponse::outcome(MSG_NOT_ADDED, None)),
                    }
                }
                None => Ok(TodoResponse::outcome(MSG_NOT_ADDED, None)),
            },
            TodoOp::Del { id } => {
                if self.store.remove(id).await? {
                    Ok(TodoResponse::outcome(MSG_DELETED, None))
                } else {
                    Ok(TodoResponse::outcome(MSG_NOT_DELETED, None))
                }
            }
            TodoOp::Sup { id } => {
                let updated = self.store.mark_complete(id).await?;
                // Re-select by the request id regardless of the update
                // outcome; a vanished row downgrades to NOT_UPDATED.
                let todo = self.store.fetch(id).await?;
                if updated && todo.is_some() {
                    Ok(TodoResponse::outcome(MSG_UPDATED, todo))
                } else {
                    Ok(TodoResponse::outcome(MSG_NOT_UPDATED, None))
                }
            }
        }
    }
}
