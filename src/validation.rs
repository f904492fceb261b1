//! Typed request validation.
//!
//! Request bodies are decoded into payload structs whose fields are all optional, then
//! checked field by field in a fixed order. The first missing field wins, so clients see
//! the same message for the same body every time.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Label is required")]
    MissingLabel,

    #[error("Image URL is required")]
    MissingImageUrl,

    #[error("Name is required")]
    MissingName,

    #[error("Billboard id is required")]
    MissingBillboardId,

    #[error("Category id is required")]
    MissingCategoryId,

    #[error("Store id is required")]
    MissingStoreId,

    #[error("Billboard not found in this store")]
    UnknownBillboard,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    pub label: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillboardInput {
    pub label: String,
    pub image_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: Option<String>,
    pub billboard_id: Option<String>,
}

/// Category fields after presence checks. `billboard_id` is still the raw string; it is
/// resolved against the store only after ownership has been proven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub billboard_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorePayload {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInput {
    pub name: String,
}

/// Decodes a JSON body. An empty body decodes to the payload default so that the
/// field checks, not the decoder, report what is missing.
pub fn parse_body<T>(body: &[u8]) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| ValidationError::InvalidBody(e.to_string()))
}

fn required(value: Option<String>, missing: ValidationError) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing),
    }
}

/// Path segments arrive as strings; blank ones count as absent.
pub fn required_path<'a>(value: &'a str, missing: ValidationError) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(missing)
    } else {
        Ok(trimmed)
    }
}

pub fn validate_billboard(payload: BillboardPayload) -> Result<BillboardInput, ValidationError> {
    let label = required(payload.label, ValidationError::MissingLabel)?;
    let image_url = required(payload.image_url, ValidationError::MissingImageUrl)?;
    Ok(BillboardInput { label, image_url })
}

pub fn validate_category(payload: CategoryPayload) -> Result<CategoryInput, ValidationError> {
    let name = required(payload.name, ValidationError::MissingName)?;
    let billboard_id = required(payload.billboard_id, ValidationError::MissingBillboardId)?;
    Ok(CategoryInput { name, billboard_id })
}

pub fn validate_store(payload: StorePayload) -> Result<StoreInput, ValidationError> {
    let name = required(payload.name, ValidationError::MissingName)?;
    Ok(StoreInput { name })
}
