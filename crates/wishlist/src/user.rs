//! Registered account model.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use wishkeep_core::{DomainError, Entity, UserId};
use wishkeep_auth::{CredentialHolder, Role};

/// Self-declared gender of an account holder.
///
/// Carried for profile purposes only; never consulted by authentication or
/// authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl core::fmt::Display for Gender {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        };
        f.write_str(s)
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            other => Err(DomainError::validation(format!("unknown gender: {other}"))),
        }
    }
}

/// A registered user.
///
/// # Invariants
/// - `email` is unique across all users (enforced at the storage boundary).
/// - Created at registration only; never deleted in normal flow.
/// - The wishlist is a derived query over items owned by `id`, not a field.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub gender: Gender,
    pub role: Role,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Build a new user for registration, normalizing and validating input.
    ///
    /// Emails are trimmed and lowercased so the uniqueness constraint cannot
    /// be dodged with case variants.
    pub fn register(
        name: &str,
        gender: Gender,
        email: &str,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(Self {
            id: UserId::new(),
            name: name.to_string(),
            gender,
            role: Role::User,
            email,
            password_hash,
        })
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl CredentialHolder for User {
    fn principal_id(&self) -> &str {
        &self.email
    }

    fn authorities(&self) -> Vec<String> {
        vec![self.role.authority().to_string()]
    }

    fn is_usable(&self) -> bool {
        // No account expiry or lockout in this domain.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_normalizes_email() {
        let user = User::register("Alice", Gender::Female, "  Alice@X.COM ", "h".into()).unwrap();
        assert_eq!(user.email, "alice@x.com");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn register_rejects_bad_input() {
        assert!(User::register("", Gender::Other, "a@x.com", "h".into()).is_err());
        assert!(User::register("Alice", Gender::Other, "not-an-email", "h".into()).is_err());
    }

    #[test]
    fn user_exposes_credential_holder_view() {
        let user = User::register("Alice", Gender::Female, "a@x.com", "h".into()).unwrap();
        assert_eq!(user.principal_id(), "a@x.com");
        assert_eq!(user.authorities(), vec!["USER".to_string()]);
        assert!(user.is_usable());
    }
}
