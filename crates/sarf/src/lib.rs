//! sarf morphology annotation library
//!
//! Engine-agnostic in-memory model for Persian morphological analysis
//! results, plus the encoders that render one analysis in the legacy
//! Alpheios schema or the Open Annotation schema (XML and JSON).

/// Error module - SarfError, SarfResult and the render error types
pub mod errors;

/// Engine module - MorphologyEngine capability contract and registry
pub mod engine;

/// Data model module - Analysis, Word, Entry, Inflection, ResponseEnvelope
pub mod models;

/// Part-of-speech module - canonical tag catalog for engine tags
pub mod pos;

/// Render module - annotation encoders and the content negotiator
pub mod render;

/// Re-exports
pub use engine::{EngineRegistry, MorphologyEngine, TokenAnalysis};
pub use errors::{SarfError, SarfResult};
pub use models::{Analysis, FormatFamily, ResponseEnvelope};
pub use pos::PosTag;
pub use render::{ContentType, RenderEnv, Rendered, render};
