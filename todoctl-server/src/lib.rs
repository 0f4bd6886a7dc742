//! todoctl-server: todo-list CRUD API over a pooled PostgreSQL store.
//!
//! Three layers:
//! - `db` - pool lifecycle, per-statement query execution, explicit
//!   transactions
//! - `todo` - row model, store seam, request validation and dispatch
//! - `http` - axum router, error mapping, demo endpoints

pub mod db;
pub mod http;
pub mod todo;
