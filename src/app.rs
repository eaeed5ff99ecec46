use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{CredentialVerifier, StaticCredentials, TokenIssuer, TokenVerifier};
use crate::config::AppConfig;
use crate::database::Database;
use crate::error::StartupError;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;

/// Everything a request needs, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub database: Database,
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        Self::with_credentials(config, Arc::new(StaticCredentials::default()))
    }

    pub fn with_credentials(
        config: AppConfig,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Result<Self, StartupError> {
        let database = Database::new(&config.database)?;
        let issuer = TokenIssuer::new(&config.jwt)?;
        let verifier = TokenVerifier::new(&config.jwt)?;

        Ok(Self {
            config: Arc::new(config),
            database,
            issuer: Arc::new(issuer),
            verifier: Arc::new(verifier),
            credentials,
        })
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security.cors_origins);

    let protected = Router::new()
        .route("/api/Auth/WhoAmI", get(handlers::auth::whoami))
        .merge(handlers::resources::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/Auth/Login", post(handlers::auth::login))
        // Protected
        .merge(protected)
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// No configured origins means any origin, matching the API's historical policy.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
