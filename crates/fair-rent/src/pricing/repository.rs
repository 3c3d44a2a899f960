use serde::{Deserialize, Serialize};

use super::market::{MarketKey, MarketSnapshot};

/// Repository record pairing a snapshot with its normalized lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub key: MarketKey,
    pub snapshot: MarketSnapshot,
}

impl MarketRecord {
    pub fn from_snapshot(snapshot: MarketSnapshot) -> Self {
        Self {
            key: MarketKey::new(&snapshot.location),
            snapshot,
        }
    }
}

/// Storage abstraction so the pricing service can be exercised in isolation.
pub trait MarketDataRepository: Send + Sync {
    fn upsert(&self, record: MarketRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, key: &MarketKey) -> Result<Option<MarketRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<MarketRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
