//! Cross-encoder contract tests
//!
//! The two standard encoders must expose exactly the same analysis
//! facts: every (headword, headword language, stem, stem language,
//! pofs-or-absent) tuple recoverable from the JSON encoding must also
//! be recoverable from the XML encoding, and vice versa.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;

use sarf::engine::TokenAnalysis;
use sarf::models::Analysis;
use sarf::render::RenderEnv;

type Fact = (String, String, String, String, Option<String>);

fn env() -> RenderEnv {
  RenderEnv::fixed("sarf", Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap())
}

fn token(surface: &str, stem: &str, lemma: &str, tag: &str) -> TokenAnalysis {
  TokenAnalysis {
    surface: surface.to_string(),
    stem: stem.to_string(),
    lemma: lemma.to_string(),
    tag: tag.to_string(),
  }
}

/// Pulls the entry facts back out of the Open Annotation XML bytes
fn facts_from_xml(bytes: &[u8]) -> HashSet<Fact> {
  let mut reader = Reader::from_reader(bytes);
  reader.config_mut().trim_text(true);

  let mut facts = HashSet::new();
  let mut stack: Vec<String> = Vec::new();

  let mut hdwd = (String::new(), String::new());
  let mut term_lang = String::new();
  let mut stem_text = String::new();
  let mut pofs: Option<String> = None;

  loop {
    match reader.read_event().expect("well-formed XML") {
      Event::Start(start) => {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let lang = start
          .try_get_attribute("lang")
          .expect("readable attributes")
          .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
        match name.as_str() {
          "hdwd" => hdwd.1 = lang.unwrap_or_default(),
          "term" => term_lang = lang.unwrap_or_default(),
          "infl" => {
            stem_text.clear();
            pofs = None;
          }
          _ => {}
        }
        stack.push(name);
      }
      Event::Text(text) => {
        let value = text.unescape().expect("decodable text").to_string();
        match stack.last().map(String::as_str) {
          Some("hdwd") => hdwd.0 = value,
          Some("stem") => stem_text = value,
          Some("pofs") => pofs = Some(value),
          _ => {}
        }
      }
      Event::End(end) => {
        if end.name().as_ref() == b"infl" {
          facts.insert((
            hdwd.0.clone(),
            hdwd.1.clone(),
            stem_text.clone(),
            term_lang.clone(),
            pofs.clone(),
          ));
        }
        stack.pop();
      }
      Event::Eof => break,
      _ => {}
    }
  }

  facts
}

/// Pulls the entry facts back out of the Open Annotation JSON value
fn facts_from_json(value: &serde_json::Value) -> HashSet<Fact> {
  let mut facts = HashSet::new();

  for annotation in as_list(&value["RDF"]["Annotation"]) {
    for body in as_list(&annotation["Body"]) {
      let entry = &body["rest"]["entry"];
      let hdwd_text = entry["dict"]["hdwd"]["$"].as_str().unwrap_or_default();
      let hdwd_lang = entry["dict"]["hdwd"]["lang"].as_str().unwrap_or_default();
      for infl in as_list(&entry["infl"]) {
        let stem_text = infl["term"]["stem"].as_str().unwrap_or_default();
        let stem_lang = infl["term"]["lang"].as_str().unwrap_or_default();
        let pofs = infl.get("pofs").and_then(|p| p["$"].as_str()).map(String::from);
        facts.insert((
          hdwd_text.to_string(),
          hdwd_lang.to_string(),
          stem_text.to_string(),
          stem_lang.to_string(),
          pofs,
        ));
      }
    }
  }

  facts
}

/// Undoes the singular/plural collapse for traversal
fn as_list(value: &serde_json::Value) -> Vec<&serde_json::Value> {
  match value {
    serde_json::Value::Array(items) => items.iter().collect(),
    serde_json::Value::Null => Vec::new(),
    other => vec![other],
  }
}

fn assert_parity(analysis: &Analysis) {
  let xml = sarf::render::render(
    &sarf::ResponseEnvelope::standard(analysis.clone()),
    sarf::ContentType::Xml,
    &env(),
  )
  .expect("XML render succeeds");
  let json = sarf::render::render(
    &sarf::ResponseEnvelope::standard(analysis.clone()),
    sarf::ContentType::Json,
    &env(),
  )
  .expect("JSON render succeeds");

  let xml_facts = facts_from_xml(&xml.body);
  let json_facts =
    facts_from_json(&serde_json::from_slice(&json.body).expect("JSON body parses"));

  assert!(!xml_facts.is_empty(), "expected at least one fact");
  assert_eq!(xml_facts, json_facts);
}

#[test]
fn parity_single_word() {
  let analysis =
    Analysis::from_tokens("hazm", "per", vec![token("کتابها", "کتاب", "کتاب", "N")], None);
  assert_parity(&analysis);
}

#[test]
fn parity_multiple_words_mixed_tags() {
  let analysis = Analysis::from_tokens(
    "hazm",
    "per",
    vec![
      token("رفتم", "رفت", "رفتن", "V"),
      token("به", "به", "به", "P"),
      token("خانه", "خانه", "خانه", "N"),
      token("weird", "weird", "weird", "???"),
    ],
    None,
  );
  assert_parity(&analysis);
}

#[test]
fn parity_with_unknown_tag_only() {
  let analysis = Analysis::from_tokens("hazm", "per", vec![token("x", "y", "z", "UNK")], None);
  assert_parity(&analysis);

  // The absent pofs shows up as None on both sides
  let json = sarf::render::render(
    &sarf::ResponseEnvelope::standard(analysis),
    sarf::ContentType::Json,
    &env(),
  )
  .unwrap();
  let facts = facts_from_json(&serde_json::from_slice(&json.body).unwrap());
  assert!(facts.iter().all(|fact| fact.4.is_none()));
}

#[test]
fn parity_with_multiple_entries_per_word() {
  // The current engine emits one entry per word; the model allows more
  // and the encoders must agree on how they render.
  let mut analysis =
    Analysis::from_tokens("hazm", "per", vec![token("شیر", "شیر", "شیر", "N")], None);
  let mut second = analysis.words[0].entries[0].clone();
  second.headword.text = "شیر دوم".to_string();
  analysis.words[0].entries.push(second);

  assert_parity(&analysis);
}

#[test]
fn singular_collapse_matches_between_encoders() {
  let one = Analysis::from_tokens("hazm", "per", vec![token("a", "a", "a", "N")], None);
  let two = Analysis::from_tokens(
    "hazm",
    "per",
    vec![token("a", "a", "a", "N"), token("b", "b", "b", "N")],
    None,
  );

  let one_json = sarf::render::render(
    &sarf::ResponseEnvelope::standard(one.clone()),
    sarf::ContentType::Json,
    &env(),
  )
  .unwrap();
  let value: serde_json::Value = serde_json::from_slice(&one_json.body).unwrap();
  assert!(value["RDF"]["Annotation"].is_object(), "one word renders as a single object");

  let two_json = sarf::render::render(
    &sarf::ResponseEnvelope::standard(two.clone()),
    sarf::ContentType::Json,
    &env(),
  )
  .unwrap();
  let value: serde_json::Value = serde_json::from_slice(&two_json.body).unwrap();
  assert!(value["RDF"]["Annotation"].is_array(), "two words render as an explicit sequence");

  // XML side: one vs two Annotation sibling elements
  let one_xml = sarf::render::render(
    &sarf::ResponseEnvelope::standard(one),
    sarf::ContentType::Xml,
    &env(),
  )
  .unwrap();
  let body = String::from_utf8(one_xml.body).unwrap();
  assert_eq!(body.matches("<Annotation").count(), 1);

  let two_xml = sarf::render::render(
    &sarf::ResponseEnvelope::standard(two),
    sarf::ContentType::Xml,
    &env(),
  )
  .unwrap();
  let body = String::from_utf8(two_xml.body).unwrap();
  assert_eq!(body.matches("<Annotation").count(), 2);
}
