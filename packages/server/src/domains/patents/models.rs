use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::companies::{CANON, NIDEK, OPTOVUE, TOPCON, ZEISS};

/// Per-company patent files written by the scraper.
pub const PATENT_FILES: [(&str, &str); 5] = [
    (ZEISS, "zeiss_patents.json"),
    (CANON, "canon_patents.json"),
    (TOPCON, "topcon_patents.json"),
    (OPTOVUE, "optovue_patents.json"),
    (NIDEK, "nidek_patents.json"),
];

/// One patent as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patent {
    pub title: String,
    pub date: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl Patent {
    /// Project a raw scraper entry; entries missing any field are dropped.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let field = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            title: field("Title")?,
            date: field("Date")?,
            url: field("URL")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentsResponse {
    pub patents_by_company: BTreeMap<String, Vec<Patent>>,
}
