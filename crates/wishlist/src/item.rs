//! Wishlist item model.

use serde::Serialize;

use wishkeep_core::{DomainError, Entity, UserId, WishlistItemId};

/// An item on a user's wishlist.
///
/// # Invariants
/// - Every item has exactly one owner at all times; an ownerless item must
///   never exist in storage (the owner column is NOT NULL).
/// - The back-reference is an owner id, never an embedded user object, so
///   per-request loads stay acyclic and ownership checks compare ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub item_name: String,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub owner_id: UserId,
}

impl WishlistItem {
    pub fn new(
        item_name: &str,
        description: Option<String>,
        owner_id: UserId,
    ) -> Result<Self, DomainError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }

        Ok(Self {
            id: WishlistItemId::new(),
            item_name: item_name.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            owner_id,
        })
    }

    /// Ownership check by identity equality (ids), never object identity:
    /// items are loaded as independent values per request.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

impl Entity for WishlistItem {
    type Id = WishlistItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_compares_ids_not_instances() {
        let owner = UserId::new();
        let item = WishlistItem::new("Book", None, owner).unwrap();
        // A fresh copy (as a store would return) still matches by id.
        let reloaded = item.clone();
        assert!(reloaded.is_owned_by(owner));
        assert!(!reloaded.is_owned_by(UserId::new()));
    }

    #[test]
    fn blank_description_is_dropped() {
        let item = WishlistItem::new("Book", Some("   ".to_string()), UserId::new()).unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(WishlistItem::new("  ", None, UserId::new()).is_err());
    }
}
