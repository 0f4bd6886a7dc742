//! Todo row model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status value for an open todo.
pub const STATUS_OPEN: i32 = 0;

/// Status value for a completed todo.
pub const STATUS_COMPLETE: i32 = 1;

/// One row of the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub status: i32,
}

impl Todo {
    pub fn is_complete(&self) -> bool {
        self.status == STATUS_COMPLETE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_constants_drive_is_complete() {
        let open = Todo {
            id: 1,
            name: "buy milk".into(),
            status: STATUS_OPEN,
        };
        let done = Todo {
            status: STATUS_COMPLETE,
            ..open.clone()
        };
        assert!(!open.is_complete());
        assert!(done.is_complete());
    }

    #[test]
    fn todo_serializes_with_field_names() {
        let todo = Todo {
            id: 7,
            name: "water plants".into(),
            status: STATUS_OPEN,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "water plants", "status": 0})
        );
    }
}
