//! Request parameter definitions
//!
//! All analysis endpoints take their parameters from the query string
//! on both GET and POST; axum's `Query` extractor is the validating
//! collaborator that yields these structs.

use serde::Deserialize;

/// Parameters of the word analysis endpoint
#[derive(Debug, Deserialize)]
pub struct WordParams {
  /// Language code; only "per" is served
  pub lang: String,
  /// Engine name
  pub engine: String,
  /// Word to analyze
  pub word: String,
  /// Target URI of the annotated resource; synthesized when absent
  pub word_uri: Option<String>,
}

/// Parameters of the document analysis endpoint
#[derive(Debug, Deserialize)]
pub struct DocumentParams {
  /// URI of the document to fetch and analyze
  pub document_id: String,
  /// Engine name
  pub engine: String,
  /// Language code; only "per" is served
  pub lang: String,
  /// Whether to run the analysis synchronously
  pub wait: Option<String>,
}

/// Parameters of the text analysis endpoint
#[derive(Debug, Deserialize)]
pub struct TextParams {
  /// Mime type of the input; only "text/plain" is accepted
  pub mime_type: String,
  /// Language code; only "per" is served
  pub lang: String,
  /// Engine name; the configured default when absent
  pub engine: Option<String>,
  /// Literal text to analyze (exclusive with `text_uri`)
  pub text: Option<String>,
  /// URI of the text to fetch (exclusive with `text`)
  pub text_uri: Option<String>,
}

/// Parameters of the legacy Alpheios endpoint
#[derive(Debug, Deserialize)]
pub struct LegacyParams {
  /// Word to analyze
  pub word: String,
}

/// Documented convention for the `wait` parameter
///
/// Truthy is the case-insensitive string "true" or "1"; anything else,
/// including absence, means no analysis is performed.
#[must_use]
pub fn wait_requested(wait: Option<&str>) -> bool {
  match wait {
    Some(value) => value.eq_ignore_ascii_case("true") || value == "1",
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wait_truthy_values() {
    assert!(wait_requested(Some("true")));
    assert!(wait_requested(Some("TRUE")));
    assert!(wait_requested(Some("True")));
    assert!(wait_requested(Some("1")));
  }

  #[test]
  fn wait_falsy_values() {
    assert!(!wait_requested(None));
    assert!(!wait_requested(Some("false")));
    assert!(!wait_requested(Some("0")));
    assert!(!wait_requested(Some("yes")));
    assert!(!wait_requested(Some("")));
  }

  #[test]
  fn word_params_deserialize() {
    let params: WordParams =
      serde_urlencoded_like("lang=per&engine=hazm&word=X&word_uri=urn:cts:1");
    assert_eq!(params.lang, "per");
    assert_eq!(params.word_uri.as_deref(), Some("urn:cts:1"));
  }

  #[test]
  fn text_params_optional_fields_default_to_none() {
    let params: TextParams = serde_urlencoded_like("mime_type=text/plain&lang=per");
    assert!(params.engine.is_none());
    assert!(params.text.is_none());
    assert!(params.text_uri.is_none());
  }

  /// Parses a query string the way axum's Query extractor does
  fn serde_urlencoded_like<T: serde::de::DeserializeOwned>(query: &str) -> T {
    serde_json::from_value(
      query
        .split('&')
        .map(|pair| {
          let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
          (key.to_string(), serde_json::Value::String(value.to_string()))
        })
        .collect::<serde_json::Map<String, serde_json::Value>>()
        .into(),
    )
    .expect("params deserialize")
  }
}
