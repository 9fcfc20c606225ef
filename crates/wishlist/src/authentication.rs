//! Registration and login orchestration.

use std::sync::Arc;

use thiserror::Error;

use wishkeep_auth::{PasswordHashError, PasswordHasher, TokenError, TokenService};
use wishkeep_core::DomainError;

use crate::store::{StoreError, UserStore};
use crate::user::{Gender, User};

/// Registration input.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub gender: Gender,
    pub email: String,
    pub password: String,
}

/// Login input.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("an account already exists for {0}")]
    DuplicateEmail(String),

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordHashError),

    #[error(transparent)]
    Store(StoreError),
}

/// Stateless orchestration over the credential store, password hasher and
/// token service. No intermediate state is persisted between calls.
pub struct AuthenticationService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AuthenticationService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account and return a session token for it.
    ///
    /// The early duplicate check gives a friendly error on the common path;
    /// the store's unique constraint backstops the race, so a concurrent
    /// duplicate insert still surfaces as [`AuthError::DuplicateEmail`].
    pub async fn register(&self, request: Registration) -> Result<String, AuthError> {
        let email = request.email.trim().to_lowercase();

        if self
            .users
            .find_by_email(&email)
            .await
            .map_err(AuthError::Store)?
            .is_some()
        {
            tracing::warn!(%email, "registration attempted with duplicate email");
            return Err(AuthError::DuplicateEmail(email));
        }

        let user = User::register(
            &request.name,
            request.gender,
            &email,
            self.hasher.hash(&request.password)?,
        )?;

        self.users.insert(&user).await.map_err(|e| match e {
            StoreError::DuplicateEmail => AuthError::DuplicateEmail(user.email.clone()),
            other => AuthError::Store(other),
        })?;

        tracing::info!(user_id = %user.id, "new user registered");

        Ok(self.tokens.issue(&user.email)?)
    }

    /// Verify credentials and return a fresh session token.
    ///
    /// No side effects beyond token issuance.
    pub async fn login(&self, request: Credentials) -> Result<String, AuthError> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(AuthError::Store)?
            .ok_or_else(|| {
                tracing::warn!("login attempted with unknown email");
                AuthError::InvalidCredentials
            })?;

        if !self.hasher.verify(&request.password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "login attempted with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "user login successful");

        Ok(self.tokens.issue(&user.email)?)
    }
}
