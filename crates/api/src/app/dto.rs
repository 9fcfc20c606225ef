use serde::{Deserialize, Serialize};

use wishkeep_wishlist::{Gender, WishlistItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub gender: Gender,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item_name: String,
    pub description: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub item_name: String,
    pub description: Option<String>,
}

impl From<&WishlistItem> for ItemResponse {
    fn from(item: &WishlistItem) -> Self {
        Self {
            id: item.id.to_string(),
            item_name: item.item_name.clone(),
            description: item.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub subject: String,
    pub authorities: Vec<String>,
}
