//! Per-request bearer token interception.
//!
//! This filter never rejects a request. It either establishes a
//! [`CurrentUser`] in the request extensions or passes the request through
//! unauthenticated; whether anonymous access is acceptable is decided by the
//! business layer, not here. Token parse and signature failures are
//! swallowed into "unauthenticated" and never become a client-visible error
//! of their own.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, middleware::Next, response::Response};

use wishkeep_auth::{CredentialHolder, Principal, TokenService};
use wishkeep_wishlist::UserStore;

use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserStore>,
}

pub async fn authenticate(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    // An identity established earlier in the chain wins.
    if req.extensions().get::<CurrentUser>().is_none() {
        if let Some(token) = extract_bearer(req.headers()) {
            if let Some(principal) = resolve_principal(&state, token).await {
                req.extensions_mut().insert(CurrentUser::new(principal));
            }
        }
    }

    next.run(req).await
}

/// Missing header, non-Bearer scheme, or an empty token all mean "no token".
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Token → subject → stored user → full validation. Any failure along the
/// way yields `None` and the request continues unauthenticated.
async fn resolve_principal(state: &AuthState, token: &str) -> Option<Principal> {
    let subject = state.tokens.subject(token).ok()?;

    let user = state.users.find_by_email(&subject).await.ok()??;

    if !user.is_usable() || !state.tokens.validate(token, user.principal_id()) {
        tracing::debug!("bearer token failed validation; continuing unauthenticated");
        return None;
    }

    Some(Principal::from_holder(&user))
}
