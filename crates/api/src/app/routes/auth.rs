use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::post};

use wishkeep_wishlist::{Credentials, Registration};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/authenticate", post(authenticate))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    let request = Registration {
        name: body.name,
        gender: body.gender,
        email: body.email,
        password: body.password,
    };

    match services.auth.register(request).await {
        Ok(token) => Json(dto::TokenResponse { token }).into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}

pub async fn authenticate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AuthenticateRequest>,
) -> axum::response::Response {
    let request = Credentials {
        email: body.email,
        password: body.password,
    };

    match services.auth.login(request).await {
        Ok(token) => Json(dto::TokenResponse { token }).into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}
