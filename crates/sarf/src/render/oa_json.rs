//! Open Annotation JSON encoder
//!
//! Structural mirror of the XML encoder: same fields, same identifier
//! rules, same render-time timestamp. XML attributes become plain keys;
//! element text shares an object with attributes under the `"$"` key.
//! Elements with no attributes collapse to plain strings.

use chrono::SecondsFormat;
use serde_json::{Value, json};

use crate::errors::RenderError;
use crate::models::{Analysis, Entry, Word};

use super::RenderEnv;
use super::oa_xml::{annotation_id, creator_id};

/// Renders an analysis in the Open Annotation JSON schema
pub fn encode(analysis: &Analysis, env: &RenderEnv) -> Result<Vec<u8>, RenderError> {
  serde_json::to_vec(&encode_value(analysis, env)).map_err(RenderError::from)
}

/// Renders an analysis as a JSON value tree
#[must_use]
pub fn encode_value(analysis: &Analysis, env: &RenderEnv) -> Value {
  let annotations: Vec<Value> =
    analysis.words.iter().map(|word| annotation_value(word, env)).collect();

  json!({ "RDF": { "Annotation": one_or_many(annotations) } })
}

/// Collapses a one-element list to the element itself
///
/// The wire contract both standard encoders share: exactly one member
/// renders as a single object, more than one as an explicit sequence.
fn one_or_many(mut items: Vec<Value>) -> Value {
  if items.len() == 1 { items.remove(0) } else { Value::Array(items) }
}

fn annotation_value(word: &Word, env: &RenderEnv) -> Value {
  let mut body_refs = Vec::with_capacity(word.entries.len());
  let mut bodies = Vec::with_capacity(word.entries.len());
  for entry in &word.entries {
    let body_urn = env.ids.next_urn();
    body_refs.push(json!({ "resource": body_urn }));
    bodies.push(body_value(entry, &body_urn));
  }

  json!({
    "about": annotation_id(env, word),
    "creator": { "Agent": { "about": creator_id(env, word) } },
    "created": env.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true),
    "hasTarget": { "Description": { "about": word.target_uri } },
    "title": format!("Morphology of {}", word.form.text),
    "hasBody": one_or_many(body_refs),
    "Body": one_or_many(bodies),
  })
}

fn body_value(entry: &Entry, body_urn: &str) -> Value {
  let inflections: Vec<Value> = entry
    .inflections
    .iter()
    .map(|inflection| {
      let mut infl = json!({
        "term": {
          "lang": inflection.stem.lang,
          "stem": inflection.stem.text,
        },
      });
      if let Some(pos) = inflection.pos {
        infl["pofs"] = json!({ "order": pos.order(), "$": pos.label() });
      }
      infl
    })
    .collect();

  json!({
    "about": body_urn,
    "rest": {
      "entry": {
        "dict": {
          "hdwd": { "lang": entry.headword.lang, "$": entry.headword.text },
        },
        "infl": one_or_many(inflections),
      },
    },
  })
}
