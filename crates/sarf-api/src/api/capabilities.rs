//! Engine capability descriptors
//!
//! Static XML listings of the engines this deployment knows about,
//! served by the engine endpoints. Always XML, always 200.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::config::SUPPORTED_LANGUAGE;
use crate::errors::ApiError;

/// Renders the capability list for the given engine names
///
/// # Errors
/// Internal error when the XML writer fails.
pub fn engine_list_xml(names: &[String]) -> crate::errors::Result<Vec<u8>> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
  writer
    .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
    .map_err(xml_err)?;

  writer
    .write_event(Event::Start(BytesStart::new("EngineListXMLRepresentation")))
    .map_err(xml_err)?;

  let mut meta = BytesStart::new("listMetadata");
  meta.push_attribute(("type", "bsp:listMetadataType"));
  writer.write_event(Event::Empty(meta)).map_err(xml_err)?;

  writer.write_event(Event::Start(BytesStart::new("listEntries"))).map_err(xml_err)?;
  for name in names {
    write_entry(&mut writer, name)?;
  }
  writer.write_event(Event::End(BytesEnd::new("listEntries"))).map_err(xml_err)?;

  writer
    .write_event(Event::End(BytesEnd::new("EngineListXMLRepresentation")))
    .map_err(xml_err)?;

  Ok(writer.into_inner())
}

fn write_entry(writer: &mut Writer<Vec<u8>>, name: &str) -> crate::errors::Result<()> {
  let mut entry = BytesStart::new("listEntry");
  entry.push_attribute(("type", "EngineListEntry"));
  writer.write_event(Event::Start(entry)).map_err(xml_err)?;

  let description = match name {
    "hazm" => "hazm Persian morphological analyzer (tokenizer, stemmer, lemmatizer, tagger)",
    "casl" => "casl analyzer (recognized, not implemented)",
    other => other,
  };
  text_element(writer, "description", description)?;
  text_element(writer, "supportsLanguageCode", SUPPORTED_LANGUAGE)?;
  text_element(writer, "supportsOption", "word_uri")?;

  writer.write_event(Event::End(BytesEnd::new("listEntry"))).map_err(xml_err)?;
  Ok(())
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> crate::errors::Result<()> {
  writer.write_event(Event::Start(BytesStart::new(name))).map_err(xml_err)?;
  writer.write_event(Event::Text(BytesText::new(text))).map_err(xml_err)?;
  writer.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)?;
  Ok(())
}

fn xml_err(e: impl std::fmt::Display) -> ApiError {
  ApiError::internal(format!("capability descriptor render failed: {e}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lists_every_engine() {
    let names = vec!["casl".to_string(), "hazm".to_string()];
    let xml = String::from_utf8(engine_list_xml(&names).unwrap()).unwrap();

    assert!(xml.contains("EngineListXMLRepresentation"));
    assert_eq!(xml.matches("<listEntry").count(), 2);
    assert!(xml.contains("<supportsLanguageCode>per</supportsLanguageCode>"));
    assert!(xml.contains("hazm Persian morphological analyzer"));
    assert!(xml.contains("recognized, not implemented"));
  }

  #[test]
  fn single_engine_descriptor() {
    let xml =
      String::from_utf8(engine_list_xml(std::slice::from_ref(&"hazm".to_string())).unwrap())
        .unwrap();
    assert_eq!(xml.matches("<listEntry").count(), 1);
  }
}
