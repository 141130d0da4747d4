use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot file name inside the data directory.
pub const MARKET_SHARE_FILE: &str = "market-share.json";

/// One slice of the market-share pie (percent, 2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistItem {
    pub name: String,
    pub value: f64,
}

impl DistItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Persisted market-share snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistPayload {
    pub distribution: Vec<DistItem>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DistPayload {
    /// "No data yet" payload returned when nothing is persisted.
    pub fn empty() -> Self {
        Self {
            distribution: Vec::new(),
            updated_at: None,
        }
    }
}
