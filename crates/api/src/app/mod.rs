//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and service construction
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use chrono::Duration;
use tower::ServiceBuilder;

use wishkeep_auth::{PasswordHasher, TokenService, token::DEFAULT_VALIDITY_HOURS};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Process configuration, resolved by `main` (or a test harness) before the
/// router is built. The signing secret and validity window are injected here
/// once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_validity: Duration,
    /// Postgres when set; in-memory stores otherwise.
    pub database_url: Option<String>,
    pub password_hasher: PasswordHasher,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let validity_hours = std::env::var("TOKEN_VALIDITY_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_VALIDITY_HOURS);

        Self {
            jwt_secret,
            token_validity: Duration::hours(validity_hours),
            database_url: std::env::var("DATABASE_URL").ok(),
            password_hasher: PasswordHasher::new(),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: AppConfig) -> Router {
    let tokens = Arc::new(TokenService::new(
        config.jwt_secret.as_bytes(),
        config.token_validity,
    ));

    let services = Arc::new(services::build_services(&config, tokens.clone()).await);

    let auth_state = middleware::AuthState {
        tokens,
        users: services.users.clone(),
    };

    // Identity-aware routes: everything under /api sees the interceptor.
    let api = routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(
                auth_state,
                middleware::authenticate,
            ))
            .layer(Extension(services)),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
}
