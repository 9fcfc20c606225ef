use axum::{Router, routing::get};

pub mod auth;
pub mod system;
pub mod wishlist;

/// Router for the `/api` tree. The wishlist routes are identity-scoped at
/// the business layer; the auth routes are public.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/auth", auth::router())
        .nest("/wishlist", wishlist::router())
}
