//! Legacy Alpheios encoder
//!
//! Flat container schema kept for one historical client: a `words`
//! element listing each word with a language-tagged form and nested
//! entry/infl/term/stem elements. No annotation metadata, XML only.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::errors::RenderError;
use crate::models::Analysis;

/// Renders an analysis in the legacy schema
pub fn encode(analysis: &Analysis) -> Result<Vec<u8>, RenderError> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
  writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

  writer.write_event(Event::Start(BytesStart::new("words")))?;

  for word in &analysis.words {
    writer.write_event(Event::Start(BytesStart::new("word")))?;

    text_element(&mut writer, "form", &[("lang", &word.form.lang)], &word.form.text)?;

    for entry in &word.entries {
      writer.write_event(Event::Start(BytesStart::new("entry")))?;

      for inflection in &entry.inflections {
        writer.write_event(Event::Start(BytesStart::new("infl")))?;

        let mut term = BytesStart::new("term");
        term.push_attribute(("lang", inflection.stem.lang.as_str()));
        writer.write_event(Event::Start(term))?;
        text_element(&mut writer, "stem", &[], &inflection.stem.text)?;
        writer.write_event(Event::End(BytesEnd::new("term")))?;

        if let Some(pos) = inflection.pos {
          let order = pos.order().to_string();
          text_element(&mut writer, "pofs", &[("order", &order)], pos.label())?;
        }

        writer.write_event(Event::End(BytesEnd::new("infl")))?;
      }

      writer.write_event(Event::End(BytesEnd::new("entry")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("word")))?;
  }

  writer.write_event(Event::End(BytesEnd::new("words")))?;
  Ok(writer.into_inner())
}

/// Writes `<name attrs…>text</name>`
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
