//! XML namespaces and small write helpers shared by the part serializers

mod namespace;

pub use namespace::*;

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Write the standalone UTF-8 declaration every OOXML part starts with
pub fn write_declaration<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

/// Write `<name w:val="value"/>`
pub fn write_w_val<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    let mut elem = BytesStart::new(name);
    elem.push_attribute(("w:val", value));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write an empty element with the given attributes
pub fn write_empty<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Escaped character data. Markup characters are escaped; characters XML
/// cannot represent at all (most C0 controls) are rejected.
pub fn text_event(text: &str) -> Result<BytesText<'_>> {
    if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
        return Err(Error::InvalidDocument(format!(
            "character U+{:04X} cannot be written to XML in {:?}",
            c as u32, text
        )));
    }
    Ok(BytesText::new(text))
}

/// Write `<name>text</name>`, escaping the text
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    let text = text_event(text)?;
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(text))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Serialize a part into a UTF-8 string using the given body writer
pub fn to_xml_string<F>(write_body: F) -> Result<String>
where
    F: FnOnce(&mut Writer<&mut Vec<u8>>) -> Result<()>,
{
    let mut buf = Vec::new();
    {
        let mut writer = Writer::new(&mut buf);
        write_declaration(&mut writer)?;
        write_body(&mut writer)?;
    }
    String::from_utf8(buf).map_err(|e| Error::InvalidDocument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_w_val() {
        let xml = to_xml_string(|w| write_w_val(w, "w:pStyle", "Heading1")).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
        assert!(xml.ends_with(r#"<w:pStyle w:val="Heading1"/>"#));
    }

    #[test]
    fn test_write_text_element_escapes() {
        let xml = to_xml_string(|w| write_text_element(w, "dc:title", "A & B <c>")).unwrap();
        assert!(xml.contains("<dc:title>A &amp; B &lt;c&gt;</dc:title>"));
    }

    #[test]
    fn test_text_event_rejects_control_chars() {
        assert!(text_event("tab\tand\r\nnewline").is_ok());
        assert!(text_event("caf\u{e9} \u{1F600}").is_ok());

        for bad in ["esc \u{1b}[1m", "nul\0", "back\u{8}space", "\u{FFFE}"] {
            let err = text_event(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidDocument(_)), "{:?}", bad);
        }
    }

    #[test]
    fn test_write_text_element_rejects_control_chars() {
        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        assert!(write_text_element(&mut writer, "dc:title", "bad\u{7}").is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_namespace_constants() {
        assert!(W.contains("wordprocessingml"));
        assert!(R.contains("relationships"));
        assert_eq!(wordprocessing_namespaces()[0], ("xmlns:w", W));
    }
}
