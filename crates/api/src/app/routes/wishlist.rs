use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use wishkeep_core::WishlistItemId;
use wishkeep_wishlist::AddItem;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/add", post(add))
        .route("/delete/:id", delete(remove))
}

pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
) -> axum::response::Response {
    let principal = current.as_ref().map(|Extension(user)| user.principal());

    match services.wishlist.list(principal).await {
        Ok(items) => {
            let body: Vec<dto::ItemResponse> = items.iter().map(dto::ItemResponse::from).collect();
            Json(body).into_response()
        }
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

pub async fn add(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let principal = current.as_ref().map(|Extension(user)| user.principal());

    let request = AddItem {
        item_name: body.item_name,
        description: body.description,
    };

    match services.wishlist.add(principal, request).await {
        Ok(item) => (StatusCode::CREATED, Json(dto::ItemResponse::from(&item))).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}

pub async fn remove(
    Extension(services): Extension<Arc<AppServices>>,
    current: Option<Extension<CurrentUser>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WishlistItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_id",
                "invalid wishlist item id",
            );
        }
    };

    let principal = current.as_ref().map(|Extension(user)| user.principal());

    match services.wishlist.delete(principal, id).await {
        Ok(()) => Json(serde_json::json!({ "deleted": id.to_string() })).into_response(),
        Err(e) => errors::wishlist_error_to_response(e),
    }
}
