use futures::future::join_all;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::kernel::ServerDeps;

use super::models::{Patent, PatentsResponse, PATENT_FILES};

/// Read one company's patent file. Any failure yields an empty list.
async fn read_patent_file(path: &Path) -> Vec<Patent> {
    let document = match tokio::fs::read_to_string(path).await {
        Ok(raw) => serde_json::from_str::<Value>(&raw).ok(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Patent file unavailable");
            None
        }
    };

    document
        .as_ref()
        .and_then(|doc| doc.get("patents"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Patent::from_entry).collect())
        .unwrap_or_default()
}

/// Patents for every tracked company, read concurrently.
pub async fn load_patents(deps: &ServerDeps) -> PatentsResponse {
    let reads = PATENT_FILES.iter().map(|(company, file)| async move {
        let patents = read_patent_file(&deps.data_dir().join(file)).await;
        (company.to_string(), patents)
    });

    PatentsResponse {
        patents_by_company: join_all(reads).await.into_iter().collect(),
    }
}
