mod common;

use axum::http::StatusCode;
use storefront_admin::handlers::stores::STORE_NOT_EMPTY;

use common::{TestApp, OWNER, STRANGER};

#[tokio::test]
async fn store_routes_require_identity() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;

    assert_eq!(app.get("/api/stores", None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.post("/api/stores", None, r#"{"name":"Mine"}"#).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.get(&format!("/api/stores/{}", store.id), None).await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn create_requires_a_name() {
    let app = TestApp::new();

    let res = app.post("/api/stores", Some(OWNER), r#"{"name":"  "}"#).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Name is required");
}

#[tokio::test]
async fn stores_are_private_to_their_owner() {
    let app = TestApp::new();

    let res = app.post("/api/stores", Some(OWNER), r#"{"name":"Mine"}"#).await;
    assert_eq!(res.status, StatusCode::OK);
    let created = res.json();
    assert_eq!(created["name"], "Mine");
    assert_eq!(created["userId"], OWNER);

    app.post("/api/stores", Some(STRANGER), r#"{"name":"Theirs"}"#).await;

    let mine = app.get("/api/stores", Some(OWNER)).await.json();
    assert_eq!(mine.as_array().map(Vec::len), Some(1));
    assert_eq!(mine[0]["name"], "Mine");

    let path = format!("/api/stores/{}", created["id"].as_str().unwrap());
    assert_eq!(app.get(&path, Some(OWNER)).await.json()["name"], "Mine");

    let res = app.get(&path, Some(STRANGER)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body, "Unauthorized");
}

#[tokio::test]
async fn owner_renames_store() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let path = format!("/api/stores/{}", store.id);

    assert_eq!(
        app.patch(&path, Some(STRANGER), r#"{"name":"Hijacked"}"#).await.status,
        StatusCode::FORBIDDEN
    );

    let res = app.patch(&path, Some(OWNER), r#"{"name":"Renamed"}"#).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["name"], "Renamed");
}

#[tokio::test]
async fn non_empty_store_cannot_be_deleted() {
    let app = TestApp::new();
    let store = app.seed_store(OWNER, "Shop").await;
    let billboard = app.seed_billboard(store.id, "hero").await;
    let path = format!("/api/stores/{}", store.id);

    let res = app.delete(&path, Some(OWNER)).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, STORE_NOT_EMPTY);

    app.delete(&format!("/api/{}/billboards/{}", store.id, billboard.id), Some(OWNER))
        .await;

    assert_eq!(app.delete(&path, Some(OWNER)).await.status, StatusCode::OK);
    assert_eq!(app.get("/api/stores", Some(OWNER)).await.json(), serde_json::json!([]));
}
