//! Core document properties (docProps/core.xml)

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};

/// Dublin Core metadata shown in Word's "Info" pane
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub creator: String,
}

impl Default for CoreProperties {
    fn default() -> Self {
        CoreProperties {
            title: None,
            creator: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl CoreProperties {
    /// Serialize to XML
    pub fn to_xml(&self) -> Result<String> {
        xml::to_xml_string(|writer| {
            let mut root = BytesStart::new("cp:coreProperties");
            for (attr, value) in xml::core_properties_namespaces() {
                root.push_attribute((attr, value));
            }
            writer.write_event(Event::Start(root))?;

            if let Some(title) = &self.title {
                xml::write_text_element(writer, "dc:title", title)?;
            }
            xml::write_text_element(writer, "dc:creator", &self.creator)?;

            writer.write_event(Event::End(BytesEnd::new("cp:coreProperties")))?;
            Ok(())
        })
    }
}
