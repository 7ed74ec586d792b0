//! Session tokens and the per-request identity record.
//!
//! The identity is the single shared record every authorization component
//! reads. It is materialized whole from a verified token and never
//! mutated afterwards; a new login replaces it entirely.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authz::{PermissionSet, Role, RoleFlags};
use crate::config;
use crate::directory::UserRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub user: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn for_user(user: &UserRecord) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: user.id,
            user: user.username.clone(),
            role: user.role.clone(),
            permissions: user.permissions.clone(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation error: {0}")]
    Generation(String),
    #[error("Invalid session token: {0}")]
    Invalid(String),
    #[error("JWT secret not configured")]
    MissingSecret,
}

pub fn issue_token(claims: &Claims) -> Result<String, TokenError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| TokenError::Generation(e.to_string()))
}

pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}

/// Authenticated identity for the current request.
///
/// Role flags are derived on demand rather than stored, so they cannot
/// diverge from the raw tag the session carries.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
    pub permissions: PermissionSet,
}

impl Identity {
    pub fn flags(&self) -> RoleFlags {
        RoleFlags::resolve(Some(&self.role))
    }

    pub fn active_role(&self) -> Option<Role> {
        self.flags().active_role()
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.user,
            role: claims.role,
            permissions: PermissionSet::new(claims.permissions),
        }
    }
}
