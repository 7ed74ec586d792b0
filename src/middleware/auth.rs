use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::session::{self, Identity};

/// Strict authentication for the JSON API: a valid bearer token is
/// required, and the decoded identity is injected into the request.
pub async fn require_identity(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = session::verify_token(&token)?;
    request.extensions_mut().insert(Identity::from(claims));

    Ok(next.run(request).await)
}

/// Lenient identity resolution for the portal areas: a missing or invalid
/// token leaves the request anonymous so the route guard can decide where
/// to send it. Never rejects.
pub async fn resolve_identity(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    if let Ok(token) = extract_bearer_token(&headers) {
        match session::verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(Identity::from(claims));
            }
            Err(e) => {
                // Expired or tampered token: treat as anonymous, the guard
                // redirects to login
                tracing::debug!("ignoring unusable session token: {}", e);
            }
        }
    }

    next.run(request).await
}

/// Extract a bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer_token(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");

        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert!(extract_bearer_token(&headers).is_err());

        headers.insert("authorization", HeaderValue::from_static("Bearer  "));
        assert!(extract_bearer_token(&headers).is_err());
    }
}
