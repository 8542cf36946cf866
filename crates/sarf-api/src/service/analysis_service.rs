//! Morphological analysis service
//!
//! Gate-keeps the language, resolves the engine and shapes the model.
//! Handlers depend on the trait so tests can swap in stubs without any
//! engine wiring.

use std::sync::Arc;

use sarf::engine::EngineRegistry;
use sarf::errors::{SarfError, SarfResult};
use sarf::models::Analysis;

use crate::config::{Config, SUPPORTED_LANGUAGE};
use crate::service::HazmProcessEngine;

/// Common interface for the analysis pipeline
///
/// Allows swapping the production implementation (`AnalysisServiceFull`)
/// with test stubs/mocks.
pub trait AnalysisService: Send + Sync {
  /// Runs one analysis request end to end
  ///
  /// # Errors
  /// - `UnsupportedLanguage` for any language other than "per"
  /// - `UnknownEngine` / `EngineNotImplemented` from the registry
  /// - `EngineFailure` when the adapter raises
  fn analyze(
    &self,
    engine: &str,
    lang: &str,
    text: &str,
    target_uri: Option<&str>,
  ) -> SarfResult<Analysis>;

  /// Validates the language and engine name without running the engine
  ///
  /// Used by endpoints that must reject bad requests even when they
  /// perform no analysis of their own.
  ///
  /// # Errors
  /// Same taxonomy as `analyze` for the language and engine checks.
  fn validate(&self, engine: &str, lang: &str) -> SarfResult<()>;

  /// Names of all engines the registry knows, active or recognized
  fn engine_names(&self) -> Vec<String>;
}

/// Production analysis service backed by the engine registry
#[derive(Clone)]
pub struct AnalysisServiceFull {
  registry: EngineRegistry,
}

impl AnalysisServiceFull {
  /// Builds the registry from configuration
  ///
  /// Registers the hazm sidecar adapter and the recognized-but-
  /// unimplemented "casl" name.
  #[must_use]
  pub fn new(config: &Config) -> Self {
    let mut registry = EngineRegistry::new();
    registry.register(Arc::new(HazmProcessEngine::new(config.hazm_cmd.clone())));
    registry.register_recognized("casl");
    Self { registry }
  }

  /// Wraps an existing registry, for callers that assemble their own
  #[must_use]
  pub fn with_registry(registry: EngineRegistry) -> Self {
    Self { registry }
  }
}

impl AnalysisService for AnalysisServiceFull {
  fn analyze(
    &self,
    engine: &str,
    lang: &str,
    text: &str,
    target_uri: Option<&str>,
  ) -> SarfResult<Analysis> {
    self.validate(engine, lang)?;

    let engine = self.registry.resolve(engine)?;
    let tokens = engine.analyze(text)?;

    Ok(Analysis::from_tokens(engine.name(), lang, tokens, target_uri))
  }

  fn validate(&self, engine: &str, lang: &str) -> SarfResult<()> {
    if lang != SUPPORTED_LANGUAGE {
      return Err(SarfError::UnsupportedLanguage {
        language: lang.to_string(),
      });
    }
    self.registry.resolve(engine).map(|_| ())
  }

  fn engine_names(&self) -> Vec<String> {
    self.registry.names()
  }
}
