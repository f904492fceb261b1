mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, OWNER, STRANGER};

fn body(name: &str, billboard_id: impl std::fmt::Display) -> String {
    json!({ "name": name, "billboardId": billboard_id.to_string() }).to_string()
}

#[tokio::test]
async fn create_requires_identity() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;

    let res = app
        .post(&format!("/api/{}/categories", store.id), None, &body("Shoes", billboard.id))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_fields_are_reported_in_order() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let path = format!("/api/{}/categories", store.id);

    let res = app.post(&path, Some(OWNER), r#"{"billboardId":"abc"}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name is required");

    let res = app.post(&path, Some(OWNER), r#"{"name":"Shoes","billboardId":""}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Billboard id is required");
}

#[tokio::test]
async fn store_id_comes_from_the_path() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let other = app.seed_store(OWNER, "Other").await;
    let billboard = app.seed_billboard(store.id, "hero").await;

    let payload = json!({
        "name": "Shoes",
        "billboardId": billboard.id.to_string(),
        "storeId": other.id.to_string(),
    })
    .to_string();

    let res = app.post(&format!("/api/{}/categories", store.id), Some(OWNER), &payload).await;
    assert_eq!(res.status, StatusCode::OK);

    let created = res.json();
    assert_eq!(created["storeId"], store.id.to_string());
    assert_eq!(created["billboardId"], billboard.id.to_string());
    assert_eq!(created["name"], "Shoes");
}

#[tokio::test]
async fn billboard_must_belong_to_the_store() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let other = app.seed_store(OWNER, "Other").await;
    let foreign = app.seed_billboard(other.id, "elsewhere").await;
    let path = format!("/api/{}/categories", store.id);

    let res = app.post(&path, Some(OWNER), &body("Shoes", foreign.id)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Billboard not found in this store");

    let res = app.post(&path, Some(OWNER), &body("Shoes", "not-a-uuid")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.get(&path, None).await.json(), json!([]));
}

#[tokio::test]
async fn stranger_cannot_create_or_modify() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/categories", store.id);

    let res = app.post(&path, Some(STRANGER), &body("Shoes", billboard.id)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body, "Unauthorized");

    let created = app.post(&path, Some(OWNER), &body("Shoes", billboard.id)).await.json();
    let item = format!("{}/{}", path, created["id"].as_str().unwrap());

    assert_eq!(
        app.patch(&item, Some(STRANGER), &body("Boots", billboard.id)).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(app.delete(&item, Some(STRANGER)).await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.get(&item, None).await.json()["name"], "Shoes");
}

#[tokio::test]
async fn owner_updates_name_and_billboard() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let hero = app.seed_billboard(store.id, "hero").await;
    let winter = app.seed_billboard(store.id, "winter").await;
    let path = format!("/api/{}/categories", store.id);

    let created = app.post(&path, Some(OWNER), &body("Shoes", hero.id)).await.json();
    let item = format!("{}/{}", path, created["id"].as_str().unwrap());

    let res = app.patch(&item, Some(OWNER), &body("Boots", winter.id)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["name"], "Boots");
    assert_eq!(res.json()["billboardId"], winter.id.to_string());

    // The old billboard is free again
    let res = app
        .delete(&format!("/api/{}/billboards/{}", store.id, hero.id), Some(OWNER))
        .await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn update_of_unknown_category_is_404() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;

    let res = app
        .patch(
            &format!("/api/{}/categories/{}", store.id, uuid::Uuid::new_v4()),
            Some(OWNER),
            &body("Boots", billboard.id),
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Category not found");
}

#[tokio::test]
async fn list_newest_first_then_delete() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/categories", store.id);

    assert_eq!(app.get(&path, None).await.json(), json!([]));

    app.post(&path, Some(OWNER), &body("Shoes", billboard.id)).await;
    let hats = app.post(&path, Some(OWNER), &body("Hats", billboard.id)).await.json();

    let names: Vec<String> = app
        .get(&path, None)
        .await
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Hats", "Shoes"]);

    let item = format!("{}/{}", path, hats["id"].as_str().unwrap());
    assert_eq!(app.delete(&item, Some(OWNER)).await.status, StatusCode::OK);
    assert!(app.get(&item, None).await.json().is_null());
    assert_eq!(app.get(&path, None).await.json().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn update_validation_runs_before_ownership() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/categories", store.id);

    let created = app.post(&path, Some(OWNER), &body("Shoes", billboard.id)).await.json();
    let item = format!("{}/{}", path, created["id"].as_str().unwrap());

    let res = app.patch(&item, Some(STRANGER), r#"{"name":"Boots"}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Billboard id is required");
}

#[tokio::test]
async fn update_and_delete_require_identity() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/{}/categories", store.id);

    let created = app.post(&path, Some(OWNER), &body("Shoes", billboard.id)).await.json();
    let item = format!("{}/{}", path, created["id"].as_str().unwrap());

    let res = app.patch(&item, None, &body("Boots", billboard.id)).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, "Unauthenticated");

    let res = app.delete(&item, None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, "Unauthenticated");

    assert_eq!(app.get(&item, None).await.json()["name"], "Shoes");
}

#[tokio::test]
async fn foreign_billboard_wins_over_missing_category() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let other = app.seed_store(OWNER, "Other").await;
    let foreign = app.seed_billboard(other.id, "elsewhere").await;

    let res = app
        .patch(
            &format!("/api/{}/categories/{}", store.id, uuid::Uuid::new_v4()),
            Some(OWNER),
            &body("Boots", foreign.id),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Billboard not found in this store");
}
