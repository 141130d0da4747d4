//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::kernel::{BaseAI, GeminiClient, HttpArticleFetcher, ScraperRunner, ServerDeps};
use crate::server::routes::{
    competitors_handler, generate_market_share_handler, generate_retinal_stats_handler,
    get_market_share_handler, get_retinal_stats_handler, get_summaries_handler, health_handler,
    patents_handler, save_summaries_handler, scraper_handler, summarize_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Wire the production collaborators from configuration.
///
/// The Gemini client is only created when an API key is configured; the
/// generating routes report the missing key per request.
pub fn build_deps(config: &Config) -> Result<ServerDeps> {
    let ai: Option<Arc<dyn BaseAI>> = match &config.gemini_api_key {
        Some(key) => {
            let client: Arc<dyn BaseAI> = Arc::new(
                GeminiClient::new(key.clone()).with_base_url(config.gemini_base_url.clone()),
            );
            Some(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set; generation routes will fail until it is configured");
            None
        }
    };

    let fetcher = HttpArticleFetcher::new().context("Failed to create article fetcher")?;
    let scraper_runner = ScraperRunner::new(config.data_dir.clone(), config.scraper_timeout);

    Ok(ServerDeps::new(
        config.data_dir.clone(),
        ai,
        config.gemini_model.clone(),
        Arc::new(fetcher),
        scraper_runner,
    ))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, allowed_origins: &[String]) -> Router {
    info!(
        data_dir = %deps.data_dir().display(),
        ai_configured = deps.ai.is_some(),
        "Building router"
    );

    let app_state = AppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/market-share",
            get(get_market_share_handler).post(generate_market_share_handler),
        )
        .route(
            "/api/retinal-stats",
            get(get_retinal_stats_handler).post(generate_retinal_stats_handler),
        )
        .route("/api/summarize", post(summarize_handler))
        .route(
            "/api/summaries",
            get(get_summaries_handler).post(save_summaries_handler),
        )
        .route("/api/competitors", get(competitors_handler))
        .route("/api/patents", get(patents_handler))
        .route("/api/scraper", post(scraper_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
