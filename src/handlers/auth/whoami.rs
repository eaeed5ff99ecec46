// handlers/auth/whoami.rs - GET /api/Auth/WhoAmI handler

use axum::{extract::Extension, response::Json};

use crate::middleware::AuthUser;

/// GET /api/Auth/WhoAmI - Claims of the token presented with the request
///
/// Expected Output:
/// ```json
/// {
///   "username": "test",
///   "subject": "inventory-api-access",
///   "tokenId": "7d0c1c3e-...",
///   "issuedAt": 1717000000,
///   "expiresAt": 1717000900
/// }
/// ```
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<AuthUser> {
    Json(user)
}
