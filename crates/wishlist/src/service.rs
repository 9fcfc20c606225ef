//! Wishlist operations with the resource ownership guard.
//!
//! Every operation here is identity-scoped. The transport interceptor only
//! *establishes* a principal; rejecting the request when none was
//! established happens here, so a missing or bad token becomes a business
//! error rather than a transport short-circuit.

use std::sync::Arc;

use thiserror::Error;

use wishkeep_auth::Principal;
use wishkeep_core::{DomainError, WishlistItemId};

use crate::item::WishlistItem;
use crate::store::{ItemStore, StoreError, UserStore};
use crate::user::User;

/// Input for adding a wishlist item.
#[derive(Debug, Clone)]
pub struct AddItem {
    pub item_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Error)]
pub enum WishlistError {
    /// No authenticated identity was established for the request.
    #[error("no token provided for authentication")]
    MissingToken,

    /// The caller owns zero items. Deliberately an error signal, matching
    /// the upstream product decision (see DESIGN.md), not an empty list.
    #[error("user does not have any wishlist item")]
    EmptyWishlist,

    #[error("no wishlist item with id {0}")]
    ItemNotFound(WishlistItemId),

    #[error("user is not allowed to delete this wishlist item")]
    UnauthorizedDelete,

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Identity-scoped wishlist operations.
pub struct WishlistService {
    users: Arc<dyn UserStore>,
    items: Arc<dyn ItemStore>,
}

impl WishlistService {
    pub fn new(users: Arc<dyn UserStore>, items: Arc<dyn ItemStore>) -> Self {
        Self { users, items }
    }

    /// Presence + resolution guard: every operation starts here.
    ///
    /// A subject that no longer resolves is treated the same as no token;
    /// reads the full user fresh per request rather than trusting anything
    /// cached in the principal beyond the subject.
    async fn current_user(&self, auth: Option<&Principal>) -> Result<User, WishlistError> {
        let principal = auth.ok_or_else(|| {
            tracing::warn!("wishlist operation attempted without authentication");
            WishlistError::MissingToken
        })?;

        self.users
            .find_by_email(principal.subject())
            .await?
            .ok_or(WishlistError::MissingToken)
    }

    /// List the caller's wishlist.
    pub async fn list(&self, auth: Option<&Principal>) -> Result<Vec<WishlistItem>, WishlistError> {
        let user = self.current_user(auth).await?;

        let items = self.items.items_for_owner(user.id).await?;
        if items.is_empty() {
            return Err(WishlistError::EmptyWishlist);
        }

        Ok(items)
    }

    /// Add an item owned by the caller.
    pub async fn add(
        &self,
        auth: Option<&Principal>,
        request: AddItem,
    ) -> Result<WishlistItem, WishlistError> {
        let user = self.current_user(auth).await?;

        let item = WishlistItem::new(&request.item_name, request.description, user.id)?;
        self.items.insert(&item).await?;

        tracing::info!(item_id = %item.id, owner_id = %user.id, "wishlist item created");

        Ok(item)
    }

    /// Delete an item after the existence and ownership checks.
    ///
    /// Check order is fixed: existence before ownership, so deleting an
    /// unknown id reports not-found even to a caller who owns nothing.
    pub async fn delete(
        &self,
        auth: Option<&Principal>,
        id: WishlistItemId,
    ) -> Result<(), WishlistError> {
        let user = self.current_user(auth).await?;

        let item = self
            .items
            .find_by_id(id)
            .await?
            .ok_or(WishlistError::ItemNotFound(id))?;

        if !item.is_owned_by(user.id) {
            tracing::warn!(
                item_id = %id,
                user_id = %user.id,
                "attempted delete of a wishlist item owned by another user"
            );
            return Err(WishlistError::UnauthorizedDelete);
        }

        self.items.delete(id).await?;

        tracing::info!(item_id = %id, owner_id = %user.id, "wishlist item deleted");

        Ok(())
    }
}
