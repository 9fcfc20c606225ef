use wishkeep_auth::Principal;

/// Request-scoped authenticated identity context.
///
/// Inserted into request extensions by the interceptor when (and only when)
/// a bearer token fully validated; its absence is what the business layer
/// turns into `MissingToken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    principal: Principal,
}

impl CurrentUser {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn subject(&self) -> &str {
        self.principal.subject()
    }
}
