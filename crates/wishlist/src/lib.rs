//! `wishkeep-wishlist` — wishlist domain: accounts, items, and the services
//! that guard them.
//!
//! Storage is a consumed interface here ([`store::UserStore`] /
//! [`store::ItemStore`]); concrete backends live in `wishkeep-infra`.

pub mod authentication;
pub mod item;
pub mod service;
pub mod store;
pub mod user;

pub use authentication::{AuthError, AuthenticationService, Credentials, Registration};
pub use item::WishlistItem;
pub use service::{AddItem, WishlistError, WishlistService};
pub use store::{ItemStore, StoreError, UserStore};
pub use user::{Gender, User};
