use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Acting identity resolved from the bearer token. `None` means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity(pub Option<String>);

impl Identity {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user(user_id: impl Into<String>) -> Self {
        Self(Some(user_id.into()))
    }

    pub fn user_id(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The user id, or `Unauthenticated` for anonymous requests
    pub fn require(&self) -> Result<&str, ApiError> {
        self.user_id().ok_or(ApiError::Unauthenticated)
    }
}

/// Resolves the bearer token into an [`Identity`] extension.
///
/// Never rejects: a missing, malformed or expired token yields an anonymous identity and
/// each handler decides whether it needs one.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = match extract_bearer(request.headers()) {
        Ok(token) => match state.tokens.verify(&token) {
            Ok(user_id) => Identity::user(user_id),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {}", e);
                Identity::anonymous()
            }
        },
        Err(reason) => {
            tracing::trace!("No identity on request: {}", reason);
            Identity::anonymous()
        }
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Extract JWT token from Authorization header
fn extract_bearer(headers: &HeaderMap) -> Result<String, &'static str> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err("Empty JWT token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_other_schemes_and_blank_tokens() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(extract_bearer(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Bearer   "));
        assert!(extract_bearer(&headers).is_err());

        assert!(extract_bearer(&HeaderMap::new()).is_err());
    }

    #[test]
    fn anonymous_identity_is_unauthenticated() {
        assert!(matches!(Identity::anonymous().require(), Err(ApiError::Unauthenticated)));
        assert_eq!(Identity::user("user_1").require().unwrap(), "user_1");
    }
}
