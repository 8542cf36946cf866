//! Data model module
pub mod model_definition;

/// Re-export major model types
pub use model_definition::{
  Analysis, Entry, FormatFamily, Inflection, LangText, Payload, ResponseEnvelope, Word,
};
