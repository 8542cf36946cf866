//! Open Annotation XML encoder
//!
//! One `Annotation` element per word under an `RDF` root. Identifier
//! rules:
//! - annotation id: `urn:<service>:<surface>:<engine>` (deterministic)
//! - creator agent: `org.<service>:tools.<engine>.v1` (deterministic)
//! - per-entry body id: fresh URN from the injected `IdSource`
//!
//! The `created` timestamp is taken from the injected clock at render
//! time, so rendering twice is not byte-identical by design of the wire
//! format.

use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::RenderError;
use crate::models::{Analysis, Entry, Word};

use super::RenderEnv;

/// Renders an analysis in the Open Annotation XML schema
pub fn encode(analysis: &Analysis, env: &RenderEnv) -> Result<Vec<u8>, RenderError> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
  writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

  writer.write_event(Event::Start(BytesStart::new("RDF")))?;
  for word in &analysis.words {
    write_annotation(&mut writer, word, env)?;
  }
  writer.write_event(Event::End(BytesEnd::new("RDF")))?;

  Ok(writer.into_inner())
}

/// Deterministic annotation identifier for a word
#[must_use]
pub fn annotation_id(env: &RenderEnv, word: &Word) -> String {
  format!("urn:{}:{}:{}", env.service, word.form.text, word.engine)
}

/// Deterministic creator reference for a word's engine
#[must_use]
pub fn creator_id(env: &RenderEnv, word: &Word) -> String {
  format!("org.{}:tools.{}.v1", env.service, word.engine)
}

fn write_annotation(
  writer: &mut Writer<Vec<u8>>,
  word: &Word,
  env: &RenderEnv,
) -> Result<(), RenderError> {
  let mut annotation = BytesStart::new("Annotation");
  annotation.push_attribute(("about", annotation_id(env, word).as_str()));
  writer.write_event(Event::Start(annotation))?;

  writer.write_event(Event::Start(BytesStart::new("creator")))?;
  let mut agent = BytesStart::new("Agent");
  agent.push_attribute(("about", creator_id(env, word).as_str()));
  writer.write_event(Event::Empty(agent))?;
  writer.write_event(Event::End(BytesEnd::new("creator")))?;

  let created = env.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true);
  text_element(writer, "created", &[], &created)?;

  writer.write_event(Event::Start(BytesStart::new("hasTarget")))?;
  let mut target = BytesStart::new("Description");
  target.push_attribute(("about", word.target_uri.as_str()));
  writer.write_event(Event::Empty(target))?;
  writer.write_event(Event::End(BytesEnd::new("hasTarget")))?;

  text_element(writer, "title", &[], &format!("Morphology of {}", word.form.text))?;

  for entry in &word.entries {
    let body_urn = env.ids.next_urn();

    let mut has_body = BytesStart::new("hasBody");
    has_body.push_attribute(("resource", body_urn.as_str()));
    writer.write_event(Event::Empty(has_body))?;

    write_body(writer, entry, &body_urn)?;
  }

  writer.write_event(Event::End(BytesEnd::new("Annotation")))?;
  Ok(())
}

/// Writes one `Body` element reproducing the entry as an XML fragment
fn write_body(
  writer: &mut Writer<Vec<u8>>,
  entry: &Entry,
  body_urn: &str,
) -> Result<(), RenderError> {
  let mut body = BytesStart::new("Body");
  body.push_attribute(("about", body_urn));
  writer.write_event(Event::Start(body))?;
  writer.write_event(Event::Start(BytesStart::new("rest")))?;
  writer.write_event(Event::Start(BytesStart::new("entry")))?;

  writer.write_event(Event::Start(BytesStart::new("dict")))?;
  text_element(writer, "hdwd", &[("lang", &entry.headword.lang)], &entry.headword.text)?;
  writer.write_event(Event::End(BytesEnd::new("dict")))?;

  for inflection in &entry.inflections {
    writer.write_event(Event::Start(BytesStart::new("infl")))?;

    let mut term = BytesStart::new("term");
    term.push_attribute(("lang", inflection.stem.lang.as_str()));
    writer.write_event(Event::Start(term))?;
    text_element(writer, "stem", &[], &inflection.stem.text)?;
    writer.write_event(Event::End(BytesEnd::new("term")))?;

    if let Some(pos) = inflection.pos {
      let order = pos.order().to_string();
      text_element(writer, "pofs", &[("order", &order)], pos.label())?;
    }

    writer.write_event(Event::End(BytesEnd::new("infl")))?;
  }

  writer.write_event(Event::End(BytesEnd::new("entry")))?;
  writer.write_event(Event::End(BytesEnd::new("rest")))?;
  writer.write_event(Event::End(BytesEnd::new("Body")))?;
  Ok(())
}

fn text_element(
  writer: &mut Writer<Vec<u8>>,
  name: &str,
  attrs: &[(&str, &str)],
  text: &str,
) -> Result<(), RenderError> {
  let mut start = BytesStart::new(name);
  for (key, value) in attrs {
    start.push_attribute((*key, *value));
  }
  writer.write_event(Event::Start(start))?;
  writer.write_event(Event::Text(BytesText::new(text)))?;
  writer.write_event(Event::End(BytesEnd::new(name)))?;
  Ok(())
}
