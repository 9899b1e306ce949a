use axum::http::StatusCode;
use serde_json::json;

use crate::common::{send, setup_test_app};

#[tokio::test]
async fn crud_round_trip_against_postgres() {
    let (app, _container) = setup_test_app().await;

    let (status, created) = send(&app, "POST", "/items", Some(json!({"text": "buy milk"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["is_done"], false);
    let uri = format!("/items/{}", created["id"]);

    let (status, listed) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, updated) = send(&app, "PUT", &uri, Some(json!({"text": "buy oat milk"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["text"], "buy oat milk");
    assert_eq!(updated["is_done"], false);

    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"text": "buy oat milk", "is_done": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_done"], true);

    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], format!("Item {} not found.", created["id"]));
}

#[tokio::test]
async fn list_limit_against_postgres() {
    let (app, _container) = setup_test_app().await;
    for i in 0..6 {
        send(&app, "POST", "/items", Some(json!({"text": format!("item {i}")}))).await;
    }

    let (_, json) = send(&app, "GET", "/items?limit=6", None).await;
    assert_eq!(json.as_array().unwrap().len(), 6);

    let (_, json) = send(&app, "GET", "/items?limit=2", None).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_reports_database_ok() {
    let (app, _container) = setup_test_app().await;

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["database"], "ok");
}
