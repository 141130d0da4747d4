//! Company-stats actions - entry points called from the HTTP routes.

use chrono::Utc;
use tracing::{info, warn};

use crate::common::{DashboardError, SnapshotStore, STATS_ROSTER};
use crate::kernel::{complete_first_available, ServerDeps};

use super::coalesce::coalesce_stats;
use super::models::{StatsPayload, RETINAL_STATS_FILE};
use super::parser::extract_company_rows;

pub const RETINAL_STATS_PROMPT: &str = "Please provide an approximate breakdown for the retinal imaging market across the following companies: Zeiss, Canon, Optovue, Topcon, and Nidek. For each company, include:

Estimated revenue from retinal imaging (USD, approximate, using medical/vision-care division revenue where necessary).

Approximate number of retinal imaging products they currently offer.

Approximate number of active or granted patents related to retinal imaging.

Important: I need a single best estimate number for each category (not a range). Present the answer in a clear tabular format with one row per company. If exact numbers are not available, provide the most reasonable single-point estimate based on available market information.";

fn store(deps: &ServerDeps) -> SnapshotStore {
    SnapshotStore::in_dir(deps.data_dir(), RETINAL_STATS_FILE)
}

pub async fn load_retinal_stats(deps: &ServerDeps) -> StatsPayload {
    store(deps)
        .load::<StatsPayload>()
        .await
        .unwrap_or_else(StatsPayload::empty)
}

pub async fn generate_retinal_stats(deps: &ServerDeps) -> Result<StatsPayload, DashboardError> {
    let ai = deps.ai.as_deref().ok_or(DashboardError::MissingApiKey)?;

    let models = deps.candidate_models();
    let completion =
        complete_first_available(ai, &models, &[RETINAL_STATS_PROMPT.to_string()]).await?;

    let Some(rows) = extract_company_rows(&completion.text) else {
        warn!(model = %completion.model, "No company rows found in reply");
        return Err(DashboardError::Unparseable);
    };

    let payload = StatsPayload {
        companies: coalesce_stats(&rows, &STATS_ROSTER),
        updated_at: Some(Utc::now()),
    };

    store(deps)
        .save(&payload)
        .await
        .map_err(DashboardError::Persistence)?;

    info!(model = %completion.model, rows = rows.len(), "Retinal stats snapshot updated");
    Ok(payload)
}
