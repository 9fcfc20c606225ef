use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{dto, errors};
use crate::context::CurrentUser;

pub async fn health() -> axum::response::Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

/// Reflects the established identity back to the caller, or answers
/// `missing_token` when the interceptor established none.
pub async fn whoami(current: Option<Extension<CurrentUser>>) -> axum::response::Response {
    match current {
        Some(Extension(user)) => Json(dto::WhoamiResponse {
            subject: user.subject().to_string(),
            authorities: user.principal().authorities().to_vec(),
        })
        .into_response(),
        None => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "missing_token",
            "no token provided for authentication",
        ),
    }
}
