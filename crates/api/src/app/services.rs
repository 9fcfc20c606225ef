//! Store selection and service construction.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use wishkeep_auth::TokenService;
use wishkeep_infra::{InMemoryItemStore, InMemoryUserStore, PgItemStore, PgUserStore, ensure_schema};
use wishkeep_wishlist::{AuthenticationService, ItemStore, UserStore, WishlistService};

use crate::app::AppConfig;

/// Everything the handlers need, built once at startup.
pub struct AppServices {
    pub auth: AuthenticationService,
    pub wishlist: WishlistService,
    pub users: Arc<dyn UserStore>,
}

pub async fn build_services(config: &AppConfig, tokens: Arc<TokenService>) -> AppServices {
    let (users, items): (Arc<dyn UserStore>, Arc<dyn ItemStore>) = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(8)
                .connect(url)
                .await
                .expect("failed to connect to postgres");
            ensure_schema(&pool).await.expect("failed to apply schema");

            tracing::info!("using postgres stores");
            (
                Arc::new(PgUserStore::new(pool.clone())),
                Arc::new(PgItemStore::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory stores");
            (
                Arc::new(InMemoryUserStore::new()),
                Arc::new(InMemoryItemStore::new()),
            )
        }
    };

    let auth = AuthenticationService::new(users.clone(), config.password_hasher.clone(), tokens);
    let wishlist = WishlistService::new(users.clone(), items);

    AppServices {
        auth,
        wishlist,
        users,
    }
}
