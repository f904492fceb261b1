// /api/stores[/:storeId] - private to the owner, including reads

use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};

use crate::database::models::Store;
use crate::error::{ApiError, ApiResult};
use crate::middleware::Identity;
use crate::state::AppState;
use crate::validation::{parse_body, required_path, validate_store, StorePayload, ValidationError};

use super::ownership::owned_store;

pub const STORE_NOT_EMPTY: &str = "Make sure you removed all billboards and categories first.";

/// GET /api/stores - the caller's stores, oldest first
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<Vec<Store>>> {
    const TAG: &str = "STORES_GET";

    let user_id = identity.require()?;
    let stores = state
        .datastore
        .list_stores_for_user(user_id)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    Ok(Json(stores))
}

/// POST /api/stores
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    body: Bytes,
) -> ApiResult<Json<Store>> {
    const TAG: &str = "STORES_POST";

    let user_id = identity.require()?;
    let input = validate_store(parse_body::<StorePayload>(&body)?)?;

    let store = state
        .datastore
        .create_store(user_id, &input)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    tracing::info!(operation = TAG, "user {} created store {}", user_id, store.id);
    Ok(Json(store))
}

/// GET /api/stores/:storeId
pub async fn show(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Store>> {
    const TAG: &str = "STORE_GET";

    let user_id = identity.require()?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;

    owned_store(&state, user_id, store_id, TAG).await.map(Json)
}

/// PATCH /api/stores/:storeId
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(store_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Store>> {
    const TAG: &str = "STORE_PATCH";

    let user_id = identity.require()?;
    let input = validate_store(parse_body::<StorePayload>(&body)?)?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    state
        .datastore
        .update_store(store.id, user_id, &input)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Store not found"))
}

/// DELETE /api/stores/:storeId
pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Store>> {
    const TAG: &str = "STORE_DELETE";

    let user_id = identity.require()?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    let deleted = state
        .datastore
        .delete_store(store.id, user_id)
        .await
        .map_err(|e| ApiError::from_database(TAG, e, STORE_NOT_EMPTY))?
        .ok_or_else(|| ApiError::not_found("Store not found"))?;

    tracing::info!(operation = TAG, "user {} deleted store {}", user_id, deleted.id);
    Ok(Json(deleted))
}
