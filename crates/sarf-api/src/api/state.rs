//! API state definition

use std::sync::Arc;

use sarf::render::RenderEnv;

use crate::config::Config;
use crate::service::{AnalysisService, DocumentFetcher};

/// Application state
///
/// Shared read-only across the entire server; every request gets its
/// own analysis and envelope, nothing here mutates per request.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Analysis pipeline
  ///
  /// - Production: `Arc::new(AnalysisServiceFull::new(&config))`
  /// - Test: `Arc::new(StubAnalysisService)`
  pub analysis: Arc<dyn AnalysisService>,
  /// Remote document fetcher
  pub fetcher: Arc<dyn DocumentFetcher>,
  /// Clock, id source and service name for the encoders
  pub render_env: RenderEnv,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(
    config: Config,
    analysis: Arc<dyn AnalysisService>,
    fetcher: Arc<dyn DocumentFetcher>,
    render_env: RenderEnv,
  ) -> Self {
    Self {
      config,
      analysis,
      fetcher,
      render_env,
    }
  }
}
