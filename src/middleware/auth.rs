use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::app::AppState;
use crate::auth::Claims;
use crate::error::ApiError;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "jwt";

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub username: String,
    pub subject: String,
    pub token_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            subject: claims.sub,
            token_id: claims.jti,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt(request.headers(), &jar).map_err(ApiError::unauthorized)?;
    let claims = state.verifier.verify(&token)?;

    tracing::debug!(username = %claims.username, jti = %claims.jti, "Token accepted");

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Bearer header first, then the `jwt` cookie.
fn extract_jwt(headers: &HeaderMap, jar: &CookieJar) -> Result<String, &'static str> {
    if let Some(auth_header) = headers.get(AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| "Invalid Authorization header format")?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or("Authorization header must use Bearer token format")?
            .trim();

        if token.is_empty() {
            return Err("Empty JWT token");
        }
        return Ok(token.to_string());
    }

    match jar.get(TOKEN_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => Ok(cookie.value().to_string()),
        _ => Err("Missing Authorization header"),
    }
}
