use axum::extract::FromRef;
use shared_types::FeatureFlags;
use std::sync::{Arc, OnceLock};

use crate::store::MarketplaceStore;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<MarketplaceStore>>`
/// or `State<FeatureFlags>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<MarketplaceStore>,
    pub flags: FeatureFlags,
}

impl AppState {
    /// State for the running app: the process-wide store and the flags
    /// loaded from `config.toml`.
    pub fn from_config(store: Arc<MarketplaceStore>) -> Self {
        Self {
            store,
            flags: *crate::config::feature_flags(),
        }
    }
}

static STORE: OnceLock<Arc<MarketplaceStore>> = OnceLock::new();

/// Password given to the seeded demo accounts.
pub fn demo_password() -> String {
    std::env::var("DEMO_PASSWORD")
        .ok()
        .filter(|p| p.len() >= 8)
        .unwrap_or_else(|| "password123".to_string())
}

/// Build a store for the running app. Seeds demo data when the `demo_data`
/// feature is on.
pub fn create_store() -> Arc<MarketplaceStore> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    if crate::config::feature_flags().demo_data {
        match MarketplaceStore::seeded(&demo_password()) {
            Ok(store) => {
                tracing::info!("Seeded demo marketplace data");
                return Arc::new(store);
            }
            Err(e) => tracing::error!(error = %e, "Failed to seed demo data, starting empty"),
        }
    }
    Arc::new(MarketplaceStore::new())
}

/// Get or initialize the process-wide store.
///
/// Used by Dioxus server functions. REST handlers use `State` from
/// `AppState` instead, which the app wires to this same store.
pub fn get_store() -> &'static Arc<MarketplaceStore> {
    STORE.get_or_init(create_store)
}
