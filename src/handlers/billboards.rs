// /api/:storeId/billboards[/:billboardId]

use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};

use crate::database::models::Billboard;
use crate::error::{ApiError, ApiResult};
use crate::middleware::Identity;
use crate::state::AppState;
use crate::validation::{parse_body, required_path, validate_billboard, BillboardPayload, ValidationError};

use super::ownership::{owned_store, parse_id};

pub const STILL_REFERENCED: &str = "Make sure you removed all categories using this billboard first.";

/// GET /api/:storeId/billboards - public listing, newest first
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Vec<Billboard>>> {
    const TAG: &str = "BILLBOARDS_GET";

    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let Some(store_id) = parse_id(store_id) else {
        return Ok(Json(Vec::new()));
    };

    let billboards = state
        .datastore
        .list_billboards(store_id)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    Ok(Json(billboards))
}

/// POST /api/:storeId/billboards
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(store_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Billboard>> {
    const TAG: &str = "BILLBOARDS_POST";

    let user_id = identity.require()?;
    let input = validate_billboard(parse_body::<BillboardPayload>(&body)?)?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    let billboard = state
        .datastore
        .create_billboard(store.id, &input)
        .await
        .map_err(|e| ApiError::from_database(TAG, e, "Store no longer exists"))?;

    tracing::info!(operation = TAG, "created billboard {} in store {}", billboard.id, store.id);
    Ok(Json(billboard))
}

/// GET /api/:storeId/billboards/:billboardId - public, `null` when absent
pub async fn show(
    State(state): State<AppState>,
    Path((store_id, billboard_id)): Path<(String, String)>,
) -> ApiResult<Json<Option<Billboard>>> {
    const TAG: &str = "BILLBOARD_GET";

    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let billboard_id = required_path(&billboard_id, ValidationError::MissingBillboardId)?;

    let (Some(store_id), Some(billboard_id)) = (parse_id(store_id), parse_id(billboard_id)) else {
        return Ok(Json(None));
    };

    let billboard = state
        .datastore
        .get_billboard(store_id, billboard_id)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    Ok(Json(billboard))
}

/// PATCH /api/:storeId/billboards/:billboardId
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((store_id, billboard_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<Json<Billboard>> {
    const TAG: &str = "BILLBOARD_PATCH";

    let user_id = identity.require()?;
    let input = validate_billboard(parse_body::<BillboardPayload>(&body)?)?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let billboard_id = required_path(&billboard_id, ValidationError::MissingBillboardId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    let billboard = match parse_id(billboard_id) {
        Some(id) => state
            .datastore
            .update_billboard(store.id, id, &input)
            .await
            .map_err(|e| ApiError::from_database(TAG, e, "Billboard could not be updated"))?,
        None => None,
    };

    billboard
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Billboard not found"))
}

/// DELETE /api/:storeId/billboards/:billboardId
pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((store_id, billboard_id)): Path<(String, String)>,
) -> ApiResult<Json<Billboard>> {
    const TAG: &str = "BILLBOARD_DELETE";

    let user_id = identity.require()?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let billboard_id = required_path(&billboard_id, ValidationError::MissingBillboardId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    let billboard = match parse_id(billboard_id) {
        Some(id) => state
            .datastore
            .delete_billboard(store.id, id)
            .await
            .map_err(|e| ApiError::from_database(TAG, e, STILL_REFERENCED))?,
        None => None,
    };

    let billboard = billboard.ok_or_else(|| ApiError::not_found("Billboard not found"))?;
    tracing::info!(operation = TAG, "deleted billboard {} from store {}", billboard.id, store.id);
    Ok(Json(billboard))
}
