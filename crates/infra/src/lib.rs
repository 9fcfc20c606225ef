//! `wishkeep-infra` — storage backends for the domain's consumed interfaces.
//!
//! Two implementations of `UserStore`/`ItemStore`:
//! - [`memory`]: mutex-guarded maps for tests and local development.
//! - [`postgres`]: sqlx-backed, where the unique email constraint and
//!   single-statement item mutation give the cross-process guarantees the
//!   domain relies on.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryItemStore, InMemoryUserStore};
pub use postgres::{PgItemStore, PgUserStore, ensure_schema};
