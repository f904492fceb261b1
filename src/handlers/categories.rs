// /api/:storeId/categories[/:categoryId]

use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::database::models::Category;
use crate::error::{ApiError, ApiResult};
use crate::middleware::Identity;
use crate::state::AppState;
use crate::validation::{parse_body, required_path, validate_category, CategoryPayload, ValidationError};

use super::ownership::{owned_store, parse_id};

/// The referenced billboard has to live in the same store as the category.
async fn resolve_billboard(
    state: &AppState,
    store_id: Uuid,
    raw_billboard_id: &str,
    tag: &'static str,
) -> ApiResult<Uuid> {
    let Some(billboard_id) = parse_id(raw_billboard_id.trim()) else {
        return Err(ValidationError::UnknownBillboard.into());
    };

    let billboard = state
        .datastore
        .get_billboard(store_id, billboard_id)
        .await
        .map_err(|e| ApiError::internal(tag, e))?;

    match billboard {
        Some(b) => Ok(b.id),
        None => Err(ValidationError::UnknownBillboard.into()),
    }
}

/// GET /api/:storeId/categories - public listing, newest first
pub async fn list(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Vec<Category>>> {
    const TAG: &str = "CATEGORIES_GET";

    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let Some(store_id) = parse_id(store_id) else {
        return Ok(Json(Vec::new()));
    };

    let categories = state
        .datastore
        .list_categories(store_id)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    Ok(Json(categories))
}

/// POST /api/:storeId/categories
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(store_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Category>> {
    const TAG: &str = "CATEGORIES_POST";

    let user_id = identity.require()?;
    let input = validate_category(parse_body::<CategoryPayload>(&body)?)?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;
    let billboard_id = resolve_billboard(&state, store.id, &input.billboard_id, TAG).await?;

    let category = state
        .datastore
        .create_category(store.id, billboard_id, &input.name)
        .await
        .map_err(|e| ApiError::from_database(TAG, e, "Billboard no longer exists"))?;

    tracing::info!(operation = TAG, "created category {} in store {}", category.id, store.id);
    Ok(Json(category))
}

/// GET /api/:storeId/categories/:categoryId - public, `null` when absent
pub async fn show(
    State(state): State<AppState>,
    Path((store_id, category_id)): Path<(String, String)>,
) -> ApiResult<Json<Option<Category>>> {
    const TAG: &str = "CATEGORY_GET";

    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let category_id = required_path(&category_id, ValidationError::MissingCategoryId)?;

    let (Some(store_id), Some(category_id)) = (parse_id(store_id), parse_id(category_id)) else {
        return Ok(Json(None));
    };

    let category = state
        .datastore
        .get_category(store_id, category_id)
        .await
        .map_err(|e| ApiError::internal(TAG, e))?;

    Ok(Json(category))
}

/// PATCH /api/:storeId/categories/:categoryId
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((store_id, category_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<Json<Category>> {
    const TAG: &str = "CATEGORY_PATCH";

    let user_id = identity.require()?;
    let input = validate_category(parse_body::<CategoryPayload>(&body)?)?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let category_id = required_path(&category_id, ValidationError::MissingCategoryId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;
    let billboard_id = resolve_billboard(&state, store.id, &input.billboard_id, TAG).await?;

    let category = match parse_id(category_id) {
        Some(id) => state
            .datastore
            .update_category(store.id, id, billboard_id, &input.name)
            .await
            .map_err(|e| ApiError::from_database(TAG, e, "Billboard no longer exists"))?,
        None => None,
    };

    category
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Category not found"))
}

/// DELETE /api/:storeId/categories/:categoryId
pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path((store_id, category_id)): Path<(String, String)>,
) -> ApiResult<Json<Category>> {
    const TAG: &str = "CATEGORY_DELETE";

    let user_id = identity.require()?;
    let store_id = required_path(&store_id, ValidationError::MissingStoreId)?;
    let category_id = required_path(&category_id, ValidationError::MissingCategoryId)?;

    let store = owned_store(&state, user_id, store_id, TAG).await?;

    let category = match parse_id(category_id) {
        Some(id) => state
            .datastore
            .delete_category(store.id, id)
            .await
            .map_err(|e| ApiError::from_database(TAG, e, "Category is still in use"))?,
        None => None,
    };

    let category = category.ok_or_else(|| ApiError::not_found("Category not found"))?;
    tracing::info!(operation = TAG, "deleted category {} from store {}", category.id, store.id);
    Ok(Json(category))
}
