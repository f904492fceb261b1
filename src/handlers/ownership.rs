// Ownership gate shared by every mutating handler.

use uuid::Uuid;

use crate::database::models::Store;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Path ids are free-form strings. Anything that is not a UUID cannot name a row.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Load the store only if `user_id` owns it.
///
/// A store that does not exist and a store owned by someone else both come back as
/// `Unauthorized`.
pub async fn owned_store(
    state: &AppState,
    user_id: &str,
    store_id: &str,
    tag: &'static str,
) -> ApiResult<Store> {
    let Some(id) = parse_id(store_id) else {
        tracing::warn!(operation = tag, "user {} addressed malformed store id {:?}", user_id, store_id);
        return Err(ApiError::Unauthorized);
    };

    let store = state
        .datastore
        .find_store_for_user(id, user_id)
        .await
        .map_err(|e| ApiError::internal(tag, e))?;

    store.ok_or_else(|| {
        tracing::warn!(operation = tag, "user {} does not own store {}", user_id, id);
        ApiError::Unauthorized
    })
}
