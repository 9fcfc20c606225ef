//! One-way password hashing (bcrypt: salted, slow by design).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hashes and verifies plaintext passwords.
///
/// The cost is injected at construction so tests can use the bcrypt minimum
/// while production keeps the default work factor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordHashError(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Fails closed: a malformed stored hash verifies as false rather than
    /// surfacing an error to the login path.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
