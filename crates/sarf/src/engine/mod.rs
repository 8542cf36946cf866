//! Engine adapter contract
//!
//! The linguistic engine (tokenizer + stemmer + lemmatizer + tagger) is
//! an opaque collaborator; the core only depends on this capability
//! contract. Engines are looked up by name in an open registry, so new
//! engines register without touching the encoders or the negotiator.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{SarfError, SarfResult};

/// Per-token output of an engine run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAnalysis {
  /// Surface form as segmented from the input
  pub surface: String,
  /// Stem of the surface form
  pub stem: String,
  /// Lemma (dictionary headword) of the surface form
  pub lemma: String,
  /// Engine-specific part-of-speech tag, canonicalized later
  pub tag: String,
}

/// Capability contract a linguistic engine must satisfy
///
/// Implementations must be safely callable from concurrent requests:
/// internally synchronized or stateless per call.
pub trait MorphologyEngine: Send + Sync {
  /// Engine name as used in request parameters
  fn name(&self) -> &str;

  /// Runs the full analysis pipeline on normalized input text
  ///
  /// # Errors
  /// `SarfError::EngineFailure` when the underlying engine raises.
  fn analyze(&self, text: &str) -> SarfResult<Vec<TokenAnalysis>>;
}

/// Registration state of an engine name
#[derive(Clone)]
enum Registration {
  /// Working adapter
  Active(Arc<dyn MorphologyEngine>),
  /// Name is part of the service vocabulary but has no implementation.
  /// Resolving it must be reported distinctly from an unknown name.
  Recognized,
}

/// Name-keyed engine registry
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone, Default)]
pub struct EngineRegistry {
  engines: HashMap<String, Registration>,
}

impl EngineRegistry {
  /// Creates an empty registry
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a working engine under its own name
  pub fn register(&mut self, engine: Arc<dyn MorphologyEngine>) {
    self.engines.insert(engine.name().to_string(), Registration::Active(engine));
  }

  /// Registers a name as recognized but unimplemented
  pub fn register_recognized(&mut self, name: impl Into<String>) {
    self.engines.insert(name.into(), Registration::Recognized);
  }

  /// Resolves an engine by name
  ///
  /// # Errors
  /// - `SarfError::UnknownEngine` for names never registered
  /// - `SarfError::EngineNotImplemented` for recognized-only names
  pub fn resolve(&self, name: &str) -> SarfResult<Arc<dyn MorphologyEngine>> {
    match self.engines.get(name) {
      Some(Registration::Active(engine)) => Ok(Arc::clone(engine)),
      Some(Registration::Recognized) => Err(SarfError::EngineNotImplemented {
        name: name.to_string(),
      }),
      None => Err(SarfError::UnknownEngine {
        name: name.to_string(),
      }),
    }
  }

  /// Names of all registered engines, active or recognized
  #[must_use]
  pub fn names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.engines.keys().cloned().collect();
    names.sort();
    names
  }

  /// Whether the name is registered at all
  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.engines.contains_key(name)
  }
}
