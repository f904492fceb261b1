mod common;

use axum::http::StatusCode;
use storefront_admin::handlers::billboards::STILL_REFERENCED;

use common::{TestApp, OWNER, STRANGER};

const HERO: &str = r#"{"label":"Summer Sale","imageUrl":"https://cdn.example.com/summer.png"}"#;

#[tokio::test]
async fn create_without_identity_is_401_and_writes_nothing() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    let res = app.post(&format!("/api/{}/billboards", store.id), None, HERO).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, "Unauthenticated");

    let list = app.get(&format!("/api/{}/billboards", store.id), None).await;
    assert_eq!(list.json(), serde_json::json!([]));
}

#[tokio::test]
async fn create_in_someone_elses_store_is_403_and_writes_nothing() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    let res = app.post(&format!("/api/{}/billboards", store.id), Some(STRANGER), HERO).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body, "Unauthorized");

    let list = app.get(&format!("/api/{}/billboards", store.id), None).await;
    assert_eq!(list.json().as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn missing_or_malformed_store_is_403() {
    let app = TestApp::new();
    app.seed_store(OWNER, "Shop").await;

    let missing = format!("/api/{}/billboards", uuid::Uuid::new_v4());
    assert_eq!(app.post(&missing, Some(OWNER), HERO).await.status, StatusCode::FORBIDDEN);
    assert_eq!(
        app.post("/api/not-a-uuid/billboards", Some(OWNER), HERO).await.status,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn missing_fields_are_reported_in_order() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let path = format!("/api/{}/billboards", store.id);

    let res = app.post(&path, Some(OWNER), r#"{"label":"","imageUrl":"x"}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Label is required");

    let res = app.post(&path, Some(OWNER), r#"{"label":"Hero"}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Image URL is required");

    let res = app.post(&path, Some(OWNER), "").await;
    assert_eq!(res.body, "Label is required");

    let res = app.post(&path, Some(OWNER), r#"{"label":"   ","imageUrl":"x"}"#).await;
    assert_eq!(res.body, "Label is required");
}

#[tokio::test]
async fn validation_runs_before_ownership() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    let res = app
        .post(&format!("/api/{}/billboards", store.id), Some(STRANGER), r#"{"imageUrl":"x"}"#)
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Label is required");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    let res = app.post(&format!("/api/{}/billboards", store.id), Some(OWNER), "{not json").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.starts_with("Invalid request body"), "{}", res.body);
}

#[tokio::test]
async fn owner_creates_and_anyone_reads() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    let res = app.post(&format!("/api/{}/billboards", store.id), Some(OWNER), HERO).await;
    assert_eq!(res.status, StatusCode::OK);

    let created = res.json();
    assert_eq!(created["label"], "Summer Sale");
    assert_eq!(created["imageUrl"], "https://cdn.example.com/summer.png");
    assert_eq!(created["storeId"], store.id.to_string());
    let id = created["id"].as_str().unwrap().to_string();

    let fetched = app.get(&format!("/api/{}/billboards/{}", store.id, id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["label"], "Summer Sale");
}

#[tokio::test]
async fn list_is_newest_first_and_scoped_to_store() {
    let app = TestApp::new();
    let shop = app.seed_store(OWNER, "Shop").await;
    let other = app.seed_store(OWNER, "Other").await;
    app.seed_billboard(shop.id, "first").await;
    app.seed_billboard(shop.id, "second").await;
    app.seed_billboard(other.id, "elsewhere").await;

    let res = app.get(&format!("/api/{}/billboards", shop.id), None).await;
    let labels: Vec<String> = res
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["second", "first"]);
}

#[tokio::test]
async fn reads_with_unknown_ids_return_empty() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    assert_eq!(app.get("/api/not-a-uuid/billboards", None).await.json(), serde_json::json!([]));

    let res = app.get(&format!("/api/{}/billboards/{}", store.id, uuid::Uuid::new_v4()), None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.json().is_null());

    let res = app.get(&format!("/api/{}/billboards/garbage", store.id), None).await;
    assert!(res.json().is_null());
}

#[tokio::test]
async fn owner_updates_billboard() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "old").await;
    let path = format!("/api/{}/billboards/{}", store.id, billboard.id);

    let res = app
        .patch(&path, Some(OWNER), r#"{"label":"new","imageUrl":"https://cdn.example.com/new.png"}"#)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["label"], "new");
    assert_eq!(res.json()["id"], billboard.id.to_string());

    assert_eq!(app.get(&path, None).await.json()["label"], "new");
}

#[tokio::test]
async fn update_cannot_reach_across_stores() {
    let app = TestApp::new();
    let shop = app.seed_store(OWNER, "Shop").await;
    let mine_too = app.seed_store(OWNER, "Second").await;
    let billboard = app.seed_billboard(shop.id, "hero").await;

    // Owner of both stores, but the billboard is not in the addressed one
    let res = app
        .patch(
            &format!("/api/{}/billboards/{}", mine_too.id, billboard.id),
            Some(OWNER),
            HERO,
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .patch(&format!("/api/{}/billboards/{}", shop.id, billboard.id), Some(STRANGER), HERO)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let current = app.get(&format!("/api/{}/billboards/{}", shop.id, billboard.id), None).await;
    assert_eq!(current.json()["label"], "hero");
}

#[tokio::test]
async fn delete_then_get_returns_null() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/billboards/{}", store.id, billboard.id);

    let res = app.delete(&path, Some(OWNER)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["id"], billboard.id.to_string());

    assert!(app.get(&path, None).await.json().is_null());
    assert_eq!(app.delete(&path, Some(OWNER)).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_requires_identity_and_ownership() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/billboards/{}", store.id, billboard.id);

    assert_eq!(app.delete(&path, None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.delete(&path, Some(STRANGER)).await.status, StatusCode::FORBIDDEN);
    assert!(!app.get(&path, None).await.json().is_null());
}

#[tokio::test]
async fn referenced_billboard_delete_is_409() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;

    let body = format!(r#"{{"name":"Shoes","billboardId":"{}"}}"#, billboard.id);
    let res = app.post(&format!("/api/{}/categories", store.id), Some(OWNER), &body).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .delete(&format!("/api/{}/billboards/{}", store.id, billboard.id), Some(OWNER))
        .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, STILL_REFERENCED);
}

#[tokio::test]
async fn update_validation_runs_before_ownership() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;

    let res = app
        .patch(
            &format!("/api/{}/billboards/{}", store.id, billboard.id),
            Some(STRANGER),
            r#"{"label":"Hero"}"#,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Image URL is required");
}

#[tokio::test]
async fn update_without_identity_is_401_and_writes_nothing() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/billboards/{}", store.id, billboard.id);

    let res = app.patch(&path, None, HERO).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, "Unauthenticated");
    assert_eq!(app.get(&path, None).await.json()["label"], "hero");
}
