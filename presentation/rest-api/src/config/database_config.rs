use std::env;
use std::sync::Arc;

use anyhow::Context;
use persistence::store::{JsonStore, StoreConfig};

const DEFAULT_DATABASE_PATH: &str = "db.json";

/// Store location from environment variables
///
/// Environment variables:
/// - DATABASE_PATH: JSON document backing the store (default: "db.json")
pub fn from_env() -> StoreConfig {
    let path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
    StoreConfig::new(path)
}

/// Loads the JSON store once at startup
///
/// # Errors
/// Returns error if the file exists but cannot be read or is not a JSON object.
/// A missing file is not an error: the store starts empty and rejects writes.
pub async fn init_store(config: &StoreConfig) -> anyhow::Result<Arc<JsonStore>> {
    let store = JsonStore::connect(config)
        .await
        .with_context(|| format!("failed to load store from {}", config.path.display()))?;
    Ok(Arc::new(store))
}
