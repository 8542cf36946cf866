//! Error definitions

use thiserror::Error;

/// Encoder rendering errors
///
/// The encoders are pure over the model; the only failure mode left is
/// the XML writer itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
  /// quick-xml failed to write an event
  #[error("XML write error: {0}")]
  Xml(#[from] quick_xml::Error),

  /// The XML writer's underlying sink failed
  #[error("XML write error: {0}")]
  Io(#[from] std::io::Error),

  /// serde_json failed to serialize the value tree
  #[error("JSON write error: {0}")]
  Json(#[from] serde_json::Error),

  /// Rendered bytes were not valid UTF-8
  #[error("rendered output is not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Unified error for the sarf core
///
/// Every rejected request maps to exactly one variant; the API layer
/// derives the HTTP status from it. Use `SarfResult<T>` at public
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SarfError {
  /// Requested language is not served (only "per" is)
  #[error("unsupported language: {language}")]
  UnsupportedLanguage {
    /// Language code the caller asked for
    language: String,
  },

  /// Engine name is not in the registered set
  #[error("unknown engine: {name}")]
  UnknownEngine {
    /// Engine name the caller asked for
    name: String,
  },

  /// Engine name is recognized but has no working implementation
  #[error("engine is recognized but not implemented: {name}")]
  EngineNotImplemented {
    /// Engine name the caller asked for
    name: String,
  },

  /// Text endpoint only accepts plain text
  #[error("unsupported mime type: {mime}")]
  UnsupportedMimeType {
    /// Mime type the caller supplied
    mime: String,
  },

  /// Caller supplied both or neither of a literal text and a text URI
  #[error("exactly one of a literal text or a text URI must be supplied")]
  AmbiguousOrMissingInput,

  /// The engine adapter raised; propagated, never swallowed
  #[error("engine failure: {0}")]
  EngineFailure(String),

  /// Encoder failure
  #[error(transparent)]
  Render(#[from] RenderError),
}

impl SarfError {
  /// Stable machine-readable code for the error body
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::UnsupportedLanguage { .. } => "unsupported_language",
      Self::UnknownEngine { .. } => "unknown_engine",
      Self::EngineNotImplemented { .. } => "engine_not_implemented",
      Self::UnsupportedMimeType { .. } => "unsupported_mime_type",
      Self::AmbiguousOrMissingInput => "ambiguous_or_missing_input",
      Self::EngineFailure(_) => "engine_failure",
      Self::Render(_) => "render_error",
    }
  }
}

/// sarf crate standard Result alias
pub type SarfResult<T> = Result<T, SarfError>;
