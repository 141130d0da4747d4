use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const RETINAL_STATS_FILE: &str = "retinal-stats.json";

/// Revenue, offering count and patent count for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRow {
    pub name: String,
    #[serde(rename = "revenueUSD")]
    pub revenue_usd: u64,
    pub products: u64,
    pub patents: u64,
}

impl CompanyRow {
    pub fn new(name: impl Into<String>, revenue_usd: u64, products: u64, patents: u64) -> Self {
        Self {
            name: name.into(),
            revenue_usd,
            products,
            patents,
        }
    }

    pub fn zeroed(name: impl Into<String>) -> Self {
        Self::new(name, 0, 0, 0)
    }

    /// Per field: keep our value when non-zero, otherwise take `other`'s.
    pub fn fill_zeros_from(&mut self, other: &CompanyRow) {
        fn prefer(current: &mut u64, incoming: u64) {
            if *current == 0 {
                *current = incoming;
            }
        }
        prefer(&mut self.revenue_usd, other.revenue_usd);
        prefer(&mut self.products, other.products);
        prefer(&mut self.patents, other.patents);
    }
}

/// Persisted company-stats snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub companies: Vec<CompanyRow>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StatsPayload {
    pub fn empty() -> Self {
        Self {
            companies: Vec::new(),
            updated_at: None,
        }
    }
}
