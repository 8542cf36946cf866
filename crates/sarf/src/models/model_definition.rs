//! Analysis model definition
//!
//! In-memory representation of one morphological query's result set.
//! Built fresh per request from engine-adapter output, immutable once
//! handed to an encoder, discarded after the response is sent.

use serde::Serialize;

use crate::engine::TokenAnalysis;
use crate::pos::PosTag;

/// A piece of text with its language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangText {
  /// Text content
  pub text: String,
  /// Language code (e.g. "per")
  pub lang: String,
}

impl LangText {
  /// Creates a language-tagged text
  #[must_use]
  pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      lang: lang.into(),
    }
  }
}

/// One inflectional analysis of a word form
///
/// Ambiguous analyses produce multiple inflections under one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inflection {
  /// Stem with its language (independent of the headword language)
  pub stem: LangText,
  /// Canonical part of speech; `None` when the engine tag has no
  /// canonical form, in which case no `pofs` element is rendered
  pub pos: Option<PosTag>,
}

/// One lemma candidate with its inflections
///
/// A word form may carry multiple entries when the engine returns
/// multiple lemma candidates. Every entry has at least one inflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
  /// Headword (lemma) with its language
  pub headword: LangText,
  /// Ordered inflections, never empty
  pub inflections: Vec<Inflection>,
}

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
  /// Name of the engine that produced the analysis
  pub engine: String,
  /// URI of the annotated resource; caller-supplied or synthesized
  pub target_uri: String,
  /// Surface form as it appeared in the input
  pub form: LangText,
  /// Ordered entries, never empty
  pub entries: Vec<Entry>,
}

impl Word {
  /// Synthesizes a deterministic target URI from a literal word
  ///
  /// Used when the caller supplies no URI of its own.
  #[must_use]
  pub fn synthesize_uri(word: &str) -> String {
    format!("urn:word:{word}")
  }
}

/// One request's full result: one Word per token produced by segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
  /// Ordered word sequence
  pub words: Vec<Word>,
}

impl Analysis {
  /// Builds an analysis from engine-adapter output
  ///
  /// Each token tuple becomes one Word with exactly one Entry holding
  /// one Inflection. The model itself supports many of either; current
  /// engines simply never produce ambiguity.
  ///
  /// `target_uri` applies to every word when supplied; otherwise each
  /// word gets `urn:word:<surface>`.
  #[must_use]
  pub fn from_tokens(
    engine: &str,
    lang: &str,
    tokens: Vec<TokenAnalysis>,
    target_uri: Option<&str>,
  ) -> Self {
    let words = tokens
      .into_iter()
      .map(|token| {
        let uri = target_uri.map_or_else(|| Word::synthesize_uri(&token.surface), String::from);
        let pos = PosTag::canonicalize(&token.tag);
        Word {
          engine: engine.to_string(),
          target_uri: uri,
          form: LangText::new(token.surface, lang),
          entries: vec![Entry {
            headword: LangText::new(token.lemma, lang),
            inflections: vec![Inflection {
              stem: LangText::new(token.stem, lang),
              pos,
            }],
          }],
        }
      })
      .collect();

    Self { words }
  }
}

/// Which encoder set applies to an envelope
///
/// Chosen by the endpoint, never by the client; the client only picks
/// the content type within the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
  /// Flat Alpheios schema, XML only
  Legacy,
  /// Open Annotation schema, XML or JSON
  Standard,
  /// Failure body, XML or JSON
  Error,
}

/// Envelope payload: a successful analysis or a structured failure
#[derive(Debug, Clone)]
pub enum Payload {
  /// Successful analysis result
  Analysis(Analysis),
  /// Failure description
  Error {
    /// Stable machine-readable code
    code: &'static str,
    /// Human-readable message
    message: String,
  },
}

/// The single value every encoder consumes
///
/// Decouples business handlers from rendering: handlers produce an
/// envelope, the negotiator picks the encoder.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
  /// What to render
  pub payload: Payload,
  /// Which encoder set to render it with
  pub family: FormatFamily,
}

impl ResponseEnvelope {
  /// Wraps an analysis in the standard format family
  #[must_use]
  pub fn standard(analysis: Analysis) -> Self {
    Self {
      payload: Payload::Analysis(analysis),
      family: FormatFamily::Standard,
    }
  }

  /// Wraps an analysis in the legacy format family
  #[must_use]
  pub fn legacy(analysis: Analysis) -> Self {
    Self {
      payload: Payload::Analysis(analysis),
      family: FormatFamily::Legacy,
    }
  }

  /// Wraps a failure in the error format family
  #[must_use]
  pub fn error(code: &'static str, message: impl Into<String>) -> Self {
    Self {
      payload: Payload::Error {
        code,
        message: message.into(),
      },
      family: FormatFamily::Error,
    }
  }
}
