//! Consumed storage interfaces.
//!
//! The domain owns these traits; `wishkeep-infra` provides the Postgres and
//! in-memory backends. All correctness-relevant concurrency (the unique
//! email constraint, atomic item mutation) lives behind these seams, never
//! in cross-request in-process locks.

use async_trait::async_trait;
use thiserror::Error;

use wishkeep_core::{UserId, WishlistItemId};

use crate::item::WishlistItem;
use crate::user::User;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The unique constraint on email rejected an insert.
    #[error("email is already registered")]
    DuplicateEmail,

    /// Backend failure (connection, query, mapping).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistence boundary for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user.
    ///
    /// Uniqueness of `email` is enforced here, not by the caller's
    /// check-then-act: concurrent duplicate registrations must yield exactly
    /// one success, the rest [`StoreError::DuplicateEmail`].
    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}

/// Persistence boundary for wishlist items.
///
/// A user's wishlist is the derived query [`ItemStore::items_for_owner`];
/// deleting an item is therefore a single logical operation with no cached
/// collection to fall out of sync.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn find_by_id(&self, id: WishlistItemId) -> Result<Option<WishlistItem>, StoreError>;

    async fn items_for_owner(&self, owner: UserId) -> Result<Vec<WishlistItem>, StoreError>;

    async fn insert(&self, item: &WishlistItem) -> Result<(), StoreError>;

    async fn delete(&self, id: WishlistItemId) -> Result<(), StoreError>;
}
