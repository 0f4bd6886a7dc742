//! Todo domain: row model, store seam, and the request-dispatch service.

pub mod model;
pub mod service;
pub mod store;

pub use model::{Todo, STATUS_COMPLETE, STATUS_OPEN};
pub use service::{ServiceError, TodoRequest, TodoResponse, TodoService, ValidationError};
pub use store::{PgTodoStore, TodoStore};
