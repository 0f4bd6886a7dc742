//! Service-level behavior over the in-memory store.

mod common;

use std::sync::Arc;

use common::MemoryStore;
use serde_json::json;
use todoctl_server::todo::{ServiceError, TodoRequest, TodoResponse, TodoService};

fn request(op: &str) -> TodoRequest {
    TodoRequest {
        op: Some(op.to_string()),
        name: None,
        id: None,
    }
}

fn service() -> (Arc<MemoryStore>, TodoService) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), TodoService::new(store))
}

#[tokio::test]
async fn get_on_empty_store_answers_false() {
    let (_, service) = service();

    let response = service.handle(&request("GET")).await.unwrap();
    assert_eq!(serde_json::to_value(&response).unwrap(), json!(false));
}

#[tokio::test]
async fn add_returns_added_with_the_stored_row() {
    let (_, service) = service();

    let response = service
        .handle(&TodoRequest {
            name: Some("Buy milk".to_string()),
            ..request("ADD")
        })
        .await
        .unwrap();

    match response {
        TodoResponse::Outcome { msg, todo } => {
            assert_eq!(msg, "ADDED");
            let todo = todo.expect("row included");
            assert_eq!(todo.name, "Buy milk");
            assert_eq!(todo.status, 0);
            assert!(todo.id > 0);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn sup_marks_existing_todo_complete() {
    let (_, service) = service();

    let added = service
        .handle(&TodoRequest {
            name: Some("water plants".to_string()),
            ..request("ADD")
        })
        .await
        .unwrap();
    let id = match added {
        TodoResponse::Outcome { todo: Some(t), .. } => t.id,
        other => panic!("unexpected response: {other:?}"),
    };

    let response = service
        .handle(&TodoRequest {
            id: Some(id),
            ..request("SUP")
        })
        .await
        .unwrap();

    match response {
        TodoResponse::Outcome { msg, todo } => {
            assert_eq!(msg, "UPDATED");
            assert_eq!(todo.expect("row included").status, 1);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn sup_on_missing_id_is_not_updated() {
    let (_, service) = service();

    let response = service
        .handle(&TodoRequest {
            id: Some(999),
            ..request("SUP")
        })
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"msg": "NOT_UPDATED"})
    );
}

#[tokio::test]
async fn del_removes_the_row() {
    let (_, service) = service();

    let added = service
        .handle(&TodoRequest {
            name: Some("call dentist".to_string()),
            ..request("ADD")
        })
        .await
        .unwrap();
    let id = match added {
        TodoResponse::Outcome { todo: Some(t), .. } => t.id,
        other => panic!("unexpected response: {other:?}"),
    };

    let response = service
        .handle(&TodoRequest {
            id: Some(id),
            ..request("DEL")
        })
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"msg": "DELETED"})
    );

    // The table is empty again.
    let listed = service.handle(&request("GET")).await.unwrap();
    assert_eq!(serde_json::to_value(&listed).unwrap(), json!(false));
}

#[tokio::test]
async fn del_on_missing_id_is_not_deleted() {
    let (_, service) = service();

    let response = service
        .handle(&TodoRequest {
            id: Some(42),
            ..request("DEL")
        })
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"msg": "NOT_DELETED"})
    );
}

#[tokio::test]
async fn rejected_requests_never_reach_the_store() {
    let (store, service) = service();

    let cases = [
        TodoRequest::default(),
        request("FROB"),
        request("ADD"),
        TodoRequest {
            name: Some("  ".to_string()),
            ..request("ADD")
        },
        request("DEL"),
        TodoRequest {
            id: Some(0),
            ..request("SUP")
        },
        TodoRequest {
            id: Some(-1),
            ..request("DEL")
        },
    ];

    for case in &cases {
        let err = service.handle(case).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn full_lifecycle_add_sup_del() {
    let (_, service) = service();

    let added = service
        .handle(&TodoRequest {
            name: Some("Buy milk".to_string()),
            ..request("ADD")
        })
        .await
        .unwrap();
    let id = match added {
        TodoResponse::Outcome { todo: Some(t), .. } => t.id,
        other => panic!("unexpected response: {other:?}"),
    };

    let listed = service.handle(&request("GET")).await.unwrap();
    assert_eq!(
        serde_json::to_value(&listed).unwrap(),
        json!([{"id": id, "name": "Buy milk", "status": 0}])
    );

    let updated = service
        .handle(&TodoRequest {
            id: Some(id),
            ..request("SUP")
        })
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&updated).unwrap(),
        json!({"msg": "UPDATED", "todo": {"id": id, "name": "Buy milk", "status": 1}})
    );

    let deleted = service
        .handle(&TodoRequest {
            id: Some(id),
            ..request("DEL")
        })
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&deleted).unwrap(),
        json!({"msg": "DELETED"})
    );
}
