// handlers/auth/login.rs - POST /api/Auth/Login handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::TOKEN_COOKIE;

/// Missing fields are treated as empty strings and simply fail the credential check.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/Auth/Login - Authenticate and receive a JWT
///
/// Expected Input:
/// ```json
/// { "username": "test", "password": "test" }
/// ```
///
/// Depending on `AUTH_TOKEN_DELIVERY` the token comes back as `{ "token": "..." }`,
/// as an HttpOnly `jwt` cookie, or both. Bad credentials answer
/// `401 { "message": "Invalid credentials" }`.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    if !state.credentials.verify(&request.username, &request.password).await {
        tracing::warn!(username = %request.username, "Login rejected: invalid credentials");
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response());
    }

    let token = state.issuer.issue(&request.username)?;
    tracing::info!(username = %request.username, "Login succeeded");

    let security = &state.config.security;
    let jar = if security.token_delivery.in_cookie() {
        jar.add(session_cookie(token.clone(), security.cookie_secure))
    } else {
        jar
    };

    let body = if security.token_delivery.in_body() {
        json!({ "token": token })
    } else {
        json!({ "message": "Login successful" })
    };

    Ok((jar, Json(body)).into_response())
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build()
}
