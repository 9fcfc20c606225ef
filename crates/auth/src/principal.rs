use serde::Serialize;

/// Capability interface for account types that can authenticate.
///
/// Implemented by the storage-backed user model; lets the transport and
/// service layers reason about "something with credentials" without
/// depending on the concrete entity.
pub trait CredentialHolder {
    /// Stable login handle (the token subject).
    fn principal_id(&self) -> &str;

    /// Role-derived authority strings.
    fn authorities(&self) -> Vec<String>;

    /// Whether the account may authenticate at all (not expired/locked).
    fn is_usable(&self) -> bool;
}

/// Request-scoped authenticated identity.
///
/// Established by the transport interceptor after token validation,
/// discarded at request end. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    subject: String,
    authorities: Vec<String>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    pub fn from_holder(holder: &dyn CredentialHolder) -> Self {
        Self::new(holder.principal_id(), holder.authorities())
    }

    /// The login handle this principal authenticated as.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_lookup() {
        let p = Principal::new("a@x.com", vec!["USER".to_string()]);
        assert!(p.has_authority("USER"));
        assert!(!p.has_authority("ADMIN"));
        assert_eq!(p.subject(), "a@x.com");
    }
}
