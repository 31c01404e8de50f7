use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.not_connected")]
    NotConnected,
    #[error("store.read_failed: {0}")]
    ReadFailed(#[source] std::io::Error),
    #[error("store.malformed: {0}")]
    Malformed(String),
    #[error("store.invalid_record: {0}")]
    InvalidRecord(String),
    #[error("store.serialization: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store.write_failed: {0}")]
    WriteFailed(#[source] std::io::Error),
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotConnected => {
                warn!("Write attempted while the store is not connected");
                RepositoryError::unavailable()
            }
            StoreError::InvalidRecord(reason) => {
                error!("Stored record rejected: {}", reason);
                RepositoryError::invalid_record(reason)
            }
            other => {
                error!("Store failure: {}", other);
                RepositoryError::persistence()
            }
        }
    }
}

/// Configuration for the JSON document store
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Top-level arrays of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Categories,
    Products,
    Favorites,
    Users,
}

impl Collection {
    pub fn key(self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Products => "products",
            Collection::Favorites => "favorites",
            Collection::Users => "users",
        }
    }
}

type Document = Map<String, Value>;

/// The whole dataset, loaded once and rewritten in full on every change.
///
/// `None` means the backing file did not exist at startup: reads see empty
/// collections and every write fails with [`StoreError::NotConnected`].
pub struct JsonStore {
    path: PathBuf,
    document: Mutex<Option<Document>>,
}

impl JsonStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let document = match tokio::fs::read_to_string(&config.path).await {
            Ok(content) => Some(parse_document(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Store file {} not found, running without data",
                    config.path.display()
                );
                None
            }
            Err(e) => return Err(StoreError::ReadFailed(e)),
        };

        if document.is_some() {
            info!("Store loaded from {}", config.path.display());
        }

        Ok(Self {
            path: config.path.clone(),
            document: Mutex::new(document),
        })
    }

    /// Exclusive access to the document until the session is dropped.
    pub async fn session(&self) -> StoreSession<'_> {
        StoreSession {
            path: &self.path,
            document: self.document.lock().await,
        }
    }
}

fn parse_document(content: &str) -> Result<Document, StoreError> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(StoreError::Malformed(
            "top level is not an object".to_string(),
        )),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}

pub struct StoreSession<'a> {
    path: &'a Path,
    document: MutexGuard<'a, Option<Document>>,
}

impl StoreSession<'_> {
    pub fn records<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let Some(document) = self.document.as_ref() else {
            return Ok(Vec::new());
        };

        let key = collection.key();
        let raw = match document.get(key) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(raw)) => raw,
            Some(_) => {
                return Err(StoreError::InvalidRecord(format!("{} is not an array", key)));
            }
        };

        raw.iter()
            .map(|value| {
                T::deserialize(value)
                    .map_err(|e| StoreError::InvalidRecord(format!("{}: {}", key, e)))
            })
            .collect()
    }

    /// Swaps one collection and rewrites the whole document. Memory is only
    /// updated once the file write succeeded.
    pub async fn replace<T: Serialize>(
        &mut self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let current = self.document.as_ref().ok_or(StoreError::NotConnected)?;

        let mut next = current.clone();
        next.insert(collection.key().to_string(), serde_json::to_value(records)?);

        let content = serde_json::to_string_pretty(&next)?;
        tokio::fs::write(self.path, content)
            .await
            .map_err(StoreError::WriteFailed)?;

        debug!(
            "Persisted {} {} to {}",
            records.len(),
            collection.key(),
            self.path.display()
        );
        *self.document = Some(next);
        Ok(())
    }
}

/// Next id for a collection: one past the highest stored id.
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> Result<u64, StoreError> {
    let highest = ids.into_iter().max().unwrap_or(0);
    highest
        .checked_add(1)
        .ok_or_else(|| StoreError::InvalidRecord(format!("no id left after {}", highest)))
}
