use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use wishkeep_wishlist::{AuthError, WishlistError};

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::DuplicateEmail(email) => json_error(
            StatusCode::CONFLICT,
            "duplicate_email",
            format!("an account already exists for {email}"),
        ),
        AuthError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid email or password",
        ),
        AuthError::Validation(e) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        AuthError::Token(e) => internal(e.to_string()),
        AuthError::Password(e) => internal(e.to_string()),
        AuthError::Store(e) => internal(e.to_string()),
    }
}

pub fn wishlist_error_to_response(err: WishlistError) -> axum::response::Response {
    match err {
        WishlistError::MissingToken => json_error(
            StatusCode::UNAUTHORIZED,
            "missing_token",
            "no token provided for authentication",
        ),
        WishlistError::EmptyWishlist => json_error(
            StatusCode::NOT_FOUND,
            "empty_wishlist",
            "user does not have any wishlist item",
        ),
        WishlistError::ItemNotFound(id) => json_error(
            StatusCode::NOT_FOUND,
            "item_not_found",
            format!("no wishlist item with id {id}"),
        ),
        WishlistError::UnauthorizedDelete => json_error(
            StatusCode::FORBIDDEN,
            "unauthorized_delete",
            "user is not allowed to perform this operation",
        ),
        WishlistError::Validation(e) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        WishlistError::Store(e) => internal(e.to_string()),
    }
}

fn internal(message: String) -> axum::response::Response {
    // Requests fail individually; nothing here is fatal to the process.
    tracing::error!(%message, "internal error while handling request");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
