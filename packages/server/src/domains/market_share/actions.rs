//! Market-share actions - entry points called from the HTTP routes.

use chrono::Utc;
use tracing::{info, warn};

use crate::common::{DashboardError, SnapshotStore, MARKET_SHARE_ROSTER};
use crate::kernel::{complete_first_available, ServerDeps};

use super::coalesce::coalesce_distribution;
use super::models::{DistPayload, MARKET_SHARE_FILE};
use super::parser::extract_shares;

pub const MARKET_SHARE_PROMPT: &str = "Please provide an approximate global market share breakdown (in percentages) for the retinal imaging market among the following companies: Zeiss, Canon, Optovue, Heidelberg, Topcon, Optos, Nidek, and Others. I need the output as a list with each company's estimated percentage value, making sure the total adds up to 100%. The response should only include numbers with company names, suitable for creating a pie chart";

fn store(deps: &ServerDeps) -> SnapshotStore {
    SnapshotStore::in_dir(deps.data_dir(), MARKET_SHARE_FILE)
}

/// Last persisted distribution, or the empty payload.
pub async fn load_market_share(deps: &ServerDeps) -> DistPayload {
    store(deps)
        .load::<DistPayload>()
        .await
        .unwrap_or_else(DistPayload::empty)
}

/// Ask the model for a fresh estimate, normalize it and persist it.
pub async fn generate_market_share(deps: &ServerDeps) -> Result<DistPayload, DashboardError> {
    let ai = deps.ai.as_deref().ok_or(DashboardError::MissingApiKey)?;

    let models = deps.candidate_models();
    let completion =
        complete_first_available(ai, &models, &[MARKET_SHARE_PROMPT.to_string()]).await?;

    let Some(shares) = extract_shares(&completion.text) else {
        warn!(model = %completion.model, "No market share figures found in reply");
        return Err(DashboardError::Unparseable);
    };

    let payload = DistPayload {
        distribution: coalesce_distribution(&shares, &MARKET_SHARE_ROSTER),
        updated_at: Some(Utc::now()),
    };

    store(deps)
        .save(&payload)
        .await
        .map_err(DashboardError::Persistence)?;

    info!(
        model = %completion.model,
        mentions = shares.len(),
        "Market share snapshot updated"
    );
    Ok(payload)
}
