//! `wishkeep-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to mint/verify bearer tokens and password hashes, and how to describe an
//! authenticated principal, but never touches a request or a database.

pub mod claims;
pub mod password;
pub mod principal;
pub mod roles;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use password::{PasswordHashError, PasswordHasher};
pub use principal::{CredentialHolder, Principal};
pub use roles::Role;
pub use token::{TokenError, TokenService};
