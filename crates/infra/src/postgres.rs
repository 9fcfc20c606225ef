//! Postgres-backed stores.
//!
//! The unique index on `app_users.email` and single-statement item DML are
//! what make registration and wishlist mutation safe across processes; the
//! application layer never takes in-process locks for these.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use wishkeep_auth::Role;
use wishkeep_core::{UserId, WishlistItemId};
use wishkeep_wishlist::{Gender, ItemStore, StoreError, User, UserStore, WishlistItem};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS app_users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        gender TEXT NOT NULL,
        role TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS wishlist_items (
        id UUID PRIMARY KEY,
        item_name TEXT NOT NULL,
        description TEXT,
        owner_id UUID NOT NULL REFERENCES app_users(id)
    )",
    "CREATE INDEX IF NOT EXISTS wishlist_items_owner_idx ON wishlist_items (owner_id)",
];

/// Create tables and indexes if they do not exist. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

fn map_sqlx(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Backend(e.to_string())
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, StoreError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| StoreError::Backend(format!("bad column {name}: {e}")))
}

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    let id: Uuid = column(row, "id")?;
    let gender: String = column(row, "gender")?;
    let role: String = column(row, "role")?;

    let gender: Gender = gender
        .parse()
        .map_err(|e| StoreError::Backend(format!("bad gender column: {e}")))?;
    let role: Role = role
        .parse()
        .map_err(|e| StoreError::Backend(format!("bad role column: {e}")))?;

    Ok(User {
        id: UserId::from_uuid(id),
        name: column(row, "name")?,
        gender,
        role,
        email: column(row, "email")?,
        password_hash: column(row, "password_hash")?,
    })
}

fn item_from_row(row: &PgRow) -> Result<WishlistItem, StoreError> {
    let id: Uuid = column(row, "id")?;
    let owner_id: Uuid = column(row, "owner_id")?;

    Ok(WishlistItem {
        id: WishlistItemId::from_uuid(id),
        item_name: column(row, "item_name")?,
        description: column(row, "description")?,
        owner_id: UserId::from_uuid(owner_id),
    })
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, gender, role, email, password_hash
             FROM app_users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO app_users (id, name, gender, role, email, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(user.gender.to_string())
        .bind(user.role.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}

pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn find_by_id(&self, id: WishlistItemId) -> Result<Option<WishlistItem>, StoreError> {
        let row = sqlx::query(
            "SELECT id, item_name, description, owner_id
             FROM wishlist_items WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.as_ref().map(item_from_row).transpose()
    }

    async fn items_for_owner(&self, owner: UserId) -> Result<Vec<WishlistItem>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, item_name, description, owner_id
             FROM wishlist_items WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.iter().map(item_from_row).collect()
    }

    async fn insert(&self, item: &WishlistItem) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO wishlist_items (id, item_name, description, owner_id)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(item.id.as_uuid())
        .bind(&item.item_name)
        .bind(&item.description)
        .bind(item.owner_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn delete(&self, id: WishlistItemId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}
