//! Style definitions from `styles.xml`, reduced to name resolution.
//!
//! Paragraphs reference styles by id (`Heading1`); the HTML output is driven by
//! the style's UI name (`Heading 1`). Built-in styles store a lower-case
//! internal name in the XML (`heading 1`) which Word shows capitalised, so
//! names go through the same alias table Word uses.
use crate::common::xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use phf::phf_map;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Internal names of built-in styles whose UI name differs.
static UI_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "caption" => "Caption",
    "footer" => "Footer",
    "header" => "Header",
    "heading 1" => "Heading 1",
    "heading 2" => "Heading 2",
    "heading 3" => "Heading 3",
    "heading 4" => "Heading 4",
    "heading 5" => "Heading 5",
    "heading 6" => "Heading 6",
    "heading 7" => "Heading 7",
    "heading 8" => "Heading 8",
    "heading 9" => "Heading 9",
};

/// Name used when a package carries no styles part at all.
pub const DEFAULT_PARAGRAPH_STYLE_NAME: &str = "Normal";

/// The kind of content a style applies to (`w:style/@w:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
    Table,
    Numbering,
}

impl StyleType {
    fn from_xml(value: &str) -> Self {
        match value {
            "character" => StyleType::Character,
            "table" => StyleType::Table,
            "numbering" => StyleType::Numbering,
            _ => StyleType::Paragraph,
        }
    }
}

/// A single `<w:style>` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    style_id: String,
    name: Option<String>,
    style_type: StyleType,
    is_default: bool,
}

impl Style {
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn style_type(&self) -> StyleType {
        self.style_type
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// The name as shown in Word: built-in internal names are translated,
    /// everything else is returned as stored. A style without `w:name` has
    /// the empty name.
    pub fn ui_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) => UI_NAMES.get(name).copied().unwrap_or(name),
            None => "",
        }
    }
}

/// All styles of a document.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: Vec<Style>,
    /// styleId -> index of its first definition
    by_id: HashMap<String, usize>,
}

impl Styles {
    /// Parse a styles part.
    pub fn from_part(part: &dyn Part) -> Result<Self> {
        Self::from_xml(part.blob())
    }

    pub(crate) fn from_xml(xml_bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml_bytes);
        reader.config_mut().trim_text(true);

        let mut styles = Vec::new();
        let mut current: Option<Style> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"style" => {
                    current = Some(Style {
                        style_id: xml::attr_value(&e, b"styleId").unwrap_or_default(),
                        name: None,
                        style_type: xml::attr_value(&e, b"type")
                            .map(|t| StyleType::from_xml(&t))
                            .unwrap_or_default(),
                        is_default: xml::attr_value(&e, b"default")
                            .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "on")),
                    });
                },
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"name" => {
                    if let Some(style) = current.as_mut() {
                        style.name = xml::val(&e);
                    }
                },
                Ok(Event::End(e)) if e.local_name().as_ref() == b"style" => {
                    if let Some(style) = current.take()
                        && !style.style_id.is_empty()
                    {
                        styles.push(style);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        let mut by_id = HashMap::with_capacity(styles.len());
        for (idx, style) in styles.iter().enumerate() {
            by_id.entry(style.style_id.clone()).or_insert(idx);
        }

        Ok(Self { styles, by_id })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Get a style by its id.
    pub fn get_by_id(&self, style_id: &str) -> Option<&Style> {
        self.by_id.get(style_id).map(|&idx| &self.styles[idx])
    }

    /// The default style of a type. When several claim to be the default,
    /// the last one in document order wins.
    pub fn default_for(&self, style_type: StyleType) -> Option<&Style> {
        self.styles
            .iter()
            .rev()
            .find(|s| s.is_default && s.style_type == style_type)
    }

    /// The paragraph style a paragraph with this style id uses: the style with
    /// that id if it is a paragraph style, else the default paragraph style.
    pub fn paragraph_style(&self, style_id: Option<&str>) -> Option<&Style> {
        style_id
            .and_then(|id| self.get_by_id(id))
            .filter(|s| s.style_type == StyleType::Paragraph)
            .or_else(|| self.default_for(StyleType::Paragraph))
    }
}

/// UI name of the paragraph style for `style_id`.
///
/// Without a styles part every paragraph is `Normal`; with one, a paragraph
/// whose style cannot be determined gets the empty name.
pub fn paragraph_style_name<'a>(styles: Option<&'a Styles>, style_id: Option<&str>) -> &'a str {
    match styles {
        None => DEFAULT_PARAGRAPH_STYLE_NAME,
        Some(styles) => styles.paragraph_style(style_id).map(Style::ui_name).unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph">
    <w:name w:val="List Paragraph"/>
  </w:style>
  <w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont">
    <w:name w:val="Default Paragraph Font"/>
  </w:style>
  <w:style w:type="character" w:styleId="Strong">
    <w:name w:val="Strong"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Quote&amp;Co">
    <w:name w:val="Quote &amp; Co"/>
  </w:style>
</w:styles>"#;

    #[test]
    fn test_parse_styles() {
        let styles = Styles::from_xml(STYLES_XML).unwrap();
        assert_eq!(styles.len(), 6);
        let heading = styles.get_by_id("Heading1").unwrap();
        assert_eq!(heading.ui_name(), "Heading 1");
        assert_eq!(heading.style_type(), StyleType::Paragraph);
        assert_eq!(styles.get_by_id("Quote&Co").unwrap().ui_name(), "Quote & Co");
    }

    #[test]
    fn test_paragraph_style_resolution() {
        let styles = Styles::from_xml(STYLES_XML).unwrap();
        let name = |id| paragraph_style_name(Some(&styles), id);

        assert_eq!(name(Some("Heading1")), "Heading 1");
        assert_eq!(name(Some("ListParagraph")), "List Paragraph");
        // Unknown id and a character style id both fall back to the default
        assert_eq!(name(Some("Missing")), "Normal");
        assert_eq!(name(Some("Strong")), "Normal");
        assert_eq!(name(None), "Normal");
    }

    #[test]
    fn test_no_default_paragraph_style() {
        let styles = Styles::from_xml(
            br#"<w:styles xmlns:w="w"><w:style w:type="paragraph" w:styleId="A"><w:name w:val="A"/></w:style></w:styles>"#,
        )
        .unwrap();
        assert_eq!(paragraph_style_name(Some(&styles), None), "");
        assert_eq!(paragraph_style_name(Some(&styles), Some("A")), "A");
    }

    #[test]
    fn test_missing_styles_part() {
        assert_eq!(paragraph_style_name(None, Some("Heading1")), "Normal");
    }

    #[test]
    fn test_last_default_wins() {
        let styles = Styles::from_xml(
            br#"<w:styles xmlns:w="w">
                <w:style w:type="paragraph" w:default="1" w:styleId="A"><w:name w:val="First"/></w:style>
                <w:style w:type="paragraph" w:default="1" w:styleId="B"><w:name w:val="Second"/></w:style>
            </w:styles>"#,
        )
        .unwrap();
        assert_eq!(paragraph_style_name(Some(&styles), None), "Second");
    }
}
