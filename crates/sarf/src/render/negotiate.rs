//! Content negotiation
//!
//! The endpoint picks the format family, the client picks the content
//! type; `select_encoder` is the one strategy table joining them. Error
//! envelopes run through the same table, so a failure body always has
//! the shape the client asked for.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::json;
use tracing::debug;

use crate::errors::{RenderError, SarfResult};
use crate::models::{FormatFamily, Payload, ResponseEnvelope};

use super::{RenderEnv, legacy, oa_json, oa_xml};

/// Content types the service can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
  /// application/json
  Json,
  /// application/xml (the default)
  Xml,
}

impl ContentType {
  /// Negotiates from an Accept-style header value
  ///
  /// Unrecognized or absent values fall back to XML.
  #[must_use]
  pub fn from_accept(accept: Option<&str>) -> Self {
    match accept {
      Some(value) if value.contains("application/json") => Self::Json,
      _ => Self::Xml,
    }
  }

  /// Mime type for the Content-Type response header
  #[must_use]
  pub fn mime(&self) -> &'static str {
    match self {
      Self::Json => "application/json",
      Self::Xml => "application/xml",
    }
  }
}

/// Encoder selected for one response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
  /// Flat Alpheios XML
  Legacy,
  /// Open Annotation XML
  OaXml,
  /// Open Annotation JSON
  OaJson,
  /// Failure body, XML
  ErrorXml,
  /// Failure body, JSON
  ErrorJson,
}

/// The strategy table
///
/// Total over both inputs; no endpoint is special-cased. The legacy
/// family supports XML only and ignores the content type.
#[must_use]
pub fn select_encoder(family: FormatFamily, content_type: ContentType) -> Encoder {
  match (family, content_type) {
    (FormatFamily::Legacy, _) => Encoder::Legacy,
    (FormatFamily::Standard, ContentType::Xml) => Encoder::OaXml,
    (FormatFamily::Standard, ContentType::Json) => Encoder::OaJson,
    (FormatFamily::Error, ContentType::Xml) => Encoder::ErrorXml,
    (FormatFamily::Error, ContentType::Json) => Encoder::ErrorJson,
  }
}

/// Rendered response body with its mime type
#[derive(Debug, Clone)]
pub struct Rendered {
  /// Encoded bytes
  pub body: Vec<u8>,
  /// Mime type the body was encoded in
  pub content_type: &'static str,
}

/// Renders an envelope in the negotiated content type
///
/// An error payload always routes through the error encoders no matter
/// which family the envelope claims, so a failure can never leak out in
/// a success shape.
///
/// # Errors
/// `SarfError::Render` when the underlying writer fails.
pub fn render(
  envelope: &ResponseEnvelope,
  content_type: ContentType,
  env: &RenderEnv,
) -> SarfResult<Rendered> {
  let (body, mime) = match &envelope.payload {
    Payload::Error { code, message } => {
      match select_encoder(FormatFamily::Error, content_type) {
        Encoder::ErrorJson => (error_json(code, message)?, ContentType::Json.mime()),
        _ => (error_xml(code, message)?, ContentType::Xml.mime()),
      }
    }
    Payload::Analysis(analysis) => {
      let encoder = select_encoder(envelope.family, content_type);
      debug!(?encoder, word_count = analysis.words.len(), "rendering analysis");
      match encoder {
        Encoder::Legacy => (legacy::encode(analysis)?, ContentType::Xml.mime()),
        Encoder::OaJson | Encoder::ErrorJson => {
          (oa_json::encode(analysis, env)?, ContentType::Json.mime())
        }
        Encoder::OaXml | Encoder::ErrorXml => {
          (oa_xml::encode(analysis, env)?, ContentType::Xml.mime())
        }
      }
    }
  };

  Ok(Rendered {
    body,
    content_type: mime,
  })
}

/// `<error code="…">message</error>`
fn error_xml(code: &str, message: &str) -> Result<Vec<u8>, RenderError> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
  writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
  let mut error = BytesStart::new("error");
  error.push_attribute(("code", code));
  writer.write_event(Event::Start(error))?;
  writer.write_event(Event::Text(BytesText::new(message)))?;
  writer.write_event(Event::End(BytesEnd::new("error")))?;
  Ok(writer.into_inner())
}

/// `{"error":{"code":…,"message":…}}`
fn error_json(code: &str, message: &str) -> Result<Vec<u8>, RenderError> {
  serde_json::to_vec(&json!({ "error": { "code": code, "message": message } }))
    .map_err(RenderError::from)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::engine::TokenAnalysis;
  use crate::models::Analysis;
  use chrono::{TimeZone, Utc};

  fn env() -> RenderEnv {
    RenderEnv::fixed("sarf", Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap())
  }

  fn sample() -> Analysis {
    Analysis::from_tokens(
      "hazm",
      "per",
      vec![TokenAnalysis {
        surface: "X".to_string(),
        stem: "X".to_string(),
        lemma: "X".to_string(),
        tag: "N".to_string(),
      }],
      None,
    )
  }

  #[test]
  fn from_accept_json() {
    assert_eq!(ContentType::from_accept(Some("application/json")), ContentType::Json);
    assert_eq!(
      ContentType::from_accept(Some("application/json; charset=utf-8")),
      ContentType::Json
    );
  }

  #[test]
  fn from_accept_defaults_to_xml() {
    assert_eq!(ContentType::from_accept(None), ContentType::Xml);
    assert_eq!(ContentType::from_accept(Some("application/xml")), ContentType::Xml);
    assert_eq!(ContentType::from_accept(Some("text/html")), ContentType::Xml);
    assert_eq!(ContentType::from_accept(Some("gibberish")), ContentType::Xml);
  }

  #[test]
  fn strategy_table_is_total() {
    assert_eq!(select_encoder(FormatFamily::Legacy, ContentType::Json), Encoder::Legacy);
    assert_eq!(select_encoder(FormatFamily::Legacy, ContentType::Xml), Encoder::Legacy);
    assert_eq!(select_encoder(FormatFamily::Standard, ContentType::Xml), Encoder::OaXml);
    assert_eq!(select_encoder(FormatFamily::Standard, ContentType::Json), Encoder::OaJson);
    assert_eq!(select_encoder(FormatFamily::Error, ContentType::Xml), Encoder::ErrorXml);
    assert_eq!(select_encoder(FormatFamily::Error, ContentType::Json), Encoder::ErrorJson);
  }

  #[test]
  fn json_selection_never_yields_xml_bytes() {
    let envelope = ResponseEnvelope::standard(sample());
    let rendered = render(&envelope, ContentType::Json, &env()).unwrap();

    assert_eq!(rendered.content_type, "application/json");
    let value: serde_json::Value = serde_json::from_slice(&rendered.body).unwrap();
    assert!(value.get("RDF").is_some());
  }

  #[test]
  fn xml_selection_never_yields_json_bytes() {
    let envelope = ResponseEnvelope::standard(sample());
    let rendered = render(&envelope, ContentType::Xml, &env()).unwrap();

    assert_eq!(rendered.content_type, "application/xml");
    let body = String::from_utf8(rendered.body).unwrap();
    assert!(body.starts_with("<?xml"));
  }

  #[test]
  fn legacy_family_ignores_requested_json() {
    let envelope = ResponseEnvelope::legacy(sample());
    let rendered = render(&envelope, ContentType::Json, &env()).unwrap();

    assert_eq!(rendered.content_type, "application/xml");
    let body = String::from_utf8(rendered.body).unwrap();
    assert!(body.contains("<words>"));
  }

  #[test]
  fn error_renders_in_requested_content_type() {
    let envelope = ResponseEnvelope::error("unsupported_language", "unsupported language: fr");

    let rendered = render(&envelope, ContentType::Json, &env()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&rendered.body).unwrap();
    assert_eq!(value["error"]["code"], "unsupported_language");

    let rendered = render(&envelope, ContentType::Xml, &env()).unwrap();
    let body = String::from_utf8(rendered.body).unwrap();
    assert!(body.contains(r#"<error code="unsupported_language">"#));
    assert!(body.contains("unsupported language: fr"));
  }

  #[test]
  fn error_payload_never_renders_as_success_shape() {
    // Envelope claims the standard family but carries an error payload
    let envelope = ResponseEnvelope {
      payload: Payload::Error {
        code: "engine_failure",
        message: "boom".to_string(),
      },
      family: FormatFamily::Standard,
    };

    let rendered = render(&envelope, ContentType::Json, &env()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&rendered.body).unwrap();
    assert!(value.get("RDF").is_none());
    assert_eq!(value["error"]["code"], "engine_failure");
  }
}
