//! In-memory stores for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use wishkeep_core::{UserId, WishlistItemId};
use wishkeep_wishlist::{ItemStore, StoreError, User, UserStore, WishlistItem};

/// Mutex-guarded user map keyed by email.
///
/// The duplicate check and insert happen under one lock acquisition, which
/// is this backend's equivalent of the database unique constraint.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: Mutex<HashMap<WishlistItemId, WishlistItem>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn find_by_id(&self, id: WishlistItemId) -> Result<Option<WishlistItem>, StoreError> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn items_for_owner(&self, owner: UserId) -> Result<Vec<WishlistItem>, StoreError> {
        let items = self.items.lock().unwrap();
        let mut owned: Vec<WishlistItem> = items
            .values()
            .filter(|item| item.is_owned_by(owner))
            .cloned()
            .collect();
        // UUIDv7 ids are time-ordered; sorting gives insertion order.
        owned.sort_by_key(|item| *item.id.as_uuid());
        Ok(owned)
    }

    async fn insert(&self, item: &WishlistItem) -> Result<(), StoreError> {
        self.items.lock().unwrap().insert(item.id, item.clone());
        Ok(())
    }

    async fn delete(&self, id: WishlistItemId) -> Result<(), StoreError> {
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }
}
