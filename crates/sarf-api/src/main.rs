//! sarf-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sarf::render::RenderEnv;
use sarf_api::ApiError;
use sarf_api::api::{AppState, run_server};
use sarf_api::config::Config;
use sarf_api::service::{AnalysisServiceFull, HttpFetcher};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  let config = Config::from_env()?;
  tracing::info!(service = %config.service_name, "configuration loaded");

  let analysis = Arc::new(AnalysisServiceFull::new(&config));
  let fetcher = Arc::new(HttpFetcher::new());
  let render_env = RenderEnv::new(config.service_name.clone());
  tracing::info!("analysis service initialized");

  let state = AppState::new(config, analysis, fetcher, render_env);

  run_server(state).await
}
