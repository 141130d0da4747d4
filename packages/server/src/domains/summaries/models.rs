use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::DashboardError;

pub const SUMMARIES_FILE: &str = "summaries.json";

/// A saved summary for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Company name -> saved summary (`null` when cleared).
pub type SummaryMap = BTreeMap<String, Option<SummaryEntry>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummariesPayload {
    pub summaries: SummaryMap,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SummariesPayload {
    pub fn empty() -> Self {
        Self {
            summaries: SummaryMap::new(),
            updated_at: None,
        }
    }
}

/// Body of `POST /api/summarize`. Unknown or missing fields are tolerated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub urls: Option<Vec<String>>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl SummarizeRequest {
    /// Lenient parse: an unreadable body is treated as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Response of `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub summary: String,
    pub model: String,
}

const INVALID_SUMMARIES: &str =
    "Invalid payload. Expect { summaries: Record<string, {text, model?}|null> }";

/// Validate the body of `POST /api/summaries`.
pub fn parse_summaries_body(body: &[u8]) -> Result<SummaryMap, DashboardError> {
    let invalid = || DashboardError::InvalidRequest(INVALID_SUMMARIES.to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
    let summaries = value
        .get("summaries")
        .filter(|s| s.is_object())
        .cloned()
        .ok_or_else(invalid)?;

    serde_json::from_value(summaries).map_err(|_| invalid())
}
