//! Part-of-speech catalog
//!
//! Maps engine-specific tag strings to a canonical (label, order) pair.
//! The order is fixed and drives the `order` attribute on `pofs`
//! elements, so it must never change between renders of the same tag.

use serde::Serialize;

/// Canonical part-of-speech tag
///
/// The 13 tags of the hazm tag set. Engine tags outside this set have
/// no canonical form and are rendered without a `pofs` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
  /// N
  Noun,
  /// INT
  Interjection,
  /// DET
  Determiner,
  /// AJ
  Adjective,
  /// P
  Preposition,
  /// PRO
  Pronoun,
  /// CONJ
  Conjunction,
  /// V
  Verb,
  /// ADV
  Adverb,
  /// POSTP
  Postposition,
  /// Num
  Number,
  /// CL
  Classifier,
  /// e
  Ezafe,
}

impl PosTag {
  /// Maps an engine tag to its canonical form
  ///
  /// Total over any input: unmapped tags yield `None`, never an error.
  #[must_use]
  pub fn canonicalize(engine_tag: &str) -> Option<Self> {
    match engine_tag {
      "N" => Some(Self::Noun),
      "INT" => Some(Self::Interjection),
      "DET" => Some(Self::Determiner),
      "AJ" => Some(Self::Adjective),
      "P" => Some(Self::Preposition),
      "PRO" => Some(Self::Pronoun),
      "CONJ" => Some(Self::Conjunction),
      "V" => Some(Self::Verb),
      "ADV" => Some(Self::Adverb),
      "POSTP" => Some(Self::Postposition),
      "Num" => Some(Self::Number),
      "CL" => Some(Self::Classifier),
      "e" => Some(Self::Ezafe),
      _ => None,
    }
  }

  /// Canonical presentation label
  #[must_use]
  pub fn label(&self) -> &'static str {
    match self {
      Self::Noun => "noun",
      Self::Interjection => "Interjection",
      Self::Determiner => "Determiner",
      Self::Adjective => "Adjective",
      Self::Preposition => "Preposition",
      Self::Pronoun => "Pronoun",
      Self::Conjunction => "Conjunction",
      Self::Verb => "Verb",
      Self::Adverb => "Adverb",
      Self::Postposition => "Postposition",
      Self::Number => "Number",
      Self::Classifier => "Classifier",
      Self::Ezafe => "ezafe",
    }
  }

  /// Fixed sort order (1-13) used for the RDF `order` attribute
  #[must_use]
  pub fn order(&self) -> u8 {
    match self {
      Self::Noun => 1,
      Self::Interjection => 2,
      Self::Determiner => 3,
      Self::Adjective => 4,
      Self::Preposition => 5,
      Self::Pronoun => 6,
      Self::Conjunction => 7,
      Self::Verb => 8,
      Self::Adverb => 9,
      Self::Postposition => 10,
      Self::Number => 11,
      Self::Classifier => 12,
      Self::Ezafe => 13,
    }
  }
}

impl std::fmt::Display for PosTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}
