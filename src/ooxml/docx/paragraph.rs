//! Paragraph and Run structures for Word documents.
//!
//! A [`Paragraph`] is parsed once from its `<w:p>` subtree. It keeps a borrow of
//! that XML so later passes (image extraction) can rescan it without copying.
use crate::common::xml;
use crate::ooxml::docx::numbering::NumberingProperties;
use crate::ooxml::error::{OoxmlError, Result, StyleAttributeError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

/// Paragraph alignment (`w:jc`), with the numeric codes WordprocessingML
/// tooling conventionally assigns to each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
    Distribute,
    JustifyMedium,
    JustifyHigh,
    JustifyLow,
    ThaiJustify,
}

impl Alignment {
    /// Parse a `w:jc/@w:val`. `start` and `end` are the bidi-aware spellings
    /// of left and right.
    pub fn from_xml(value: &str) -> Option<Self> {
        Some(match value {
            "left" | "start" => Alignment::Left,
            "center" => Alignment::Center,
            "right" | "end" => Alignment::Right,
            "both" => Alignment::Justify,
            "distribute" => Alignment::Distribute,
            "mediumKashida" => Alignment::JustifyMedium,
            "highKashida" => Alignment::JustifyHigh,
            "lowKashida" => Alignment::JustifyLow,
            "thaiDistribute" => Alignment::ThaiJustify,
            _ => return None,
        })
    }

    /// The numeric alignment code.
    pub const fn code(self) -> u8 {
        match self {
            Alignment::Left => 0,
            Alignment::Center => 1,
            Alignment::Right => 2,
            Alignment::Justify => 3,
            Alignment::Distribute => 4,
            Alignment::JustifyMedium => 5,
            Alignment::JustifyHigh => 7,
            Alignment::JustifyLow => 8,
            Alignment::ThaiJustify => 9,
        }
    }
}

/// A run of text sharing one set of inline formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    text: String,
    bold: bool,
    italic: bool,
    underline: bool,
    /// `w:sz/@w:val` as written; interpreted by [`Run::font_size`]
    size: Option<String>,
}

impl Run {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    #[inline]
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set the raw `w:sz` value, in half-points.
    #[inline]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub fn italic(&self) -> bool {
        self.italic
    }

    #[inline]
    pub fn underline(&self) -> bool {
        self.underline
    }

    /// Font size in half-points. `None` when the run sets no size.
    pub fn font_size(&self) -> Option<std::result::Result<u32, StyleAttributeError>> {
        let raw = self.size.as_deref()?;
        Some(
            atoi_simd::parse_skipped::<u32>(raw.trim().as_bytes())
                .map_err(|_| StyleAttributeError::InvalidFontSize(raw.to_string())),
        )
    }
}

/// A paragraph (`<w:p>`).
#[derive(Debug, Clone)]
pub struct Paragraph<'a> {
    xml: &'a [u8],
    style_id: Option<String>,
    alignment: Option<Alignment>,
    numbering: Option<NumberingProperties>,
    runs: SmallVec<[Run; 8]>,
}

impl<'a> Paragraph<'a> {
    /// Parse a paragraph from the XML of its `<w:p>` element.
    pub fn parse(xml: &'a [u8]) -> Result<Self> {
        let mut parser = ParagraphParser::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    parser.depth += 1;
                    parser.open(&e, parser.depth, false);
                },
                Ok(Event::Empty(e)) => parser.open(&e, parser.depth + 1, true),
                Ok(Event::End(e)) => {
                    parser.close(e.local_name().as_ref(), parser.depth);
                    parser.depth = parser.depth.saturating_sub(1);
                },
                Ok(Event::Text(e)) if parser.in_text => {
                    parser.run.text.push_str(std::str::from_utf8(&e)?);
                },
                Ok(Event::CData(e)) if parser.in_text => {
                    parser.run.text.push_str(std::str::from_utf8(&e)?);
                },
                Ok(Event::GeneralRef(e)) if parser.in_text => {
                    xml::push_reference(&mut parser.run.text, &e);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
        }

        Ok(Self {
            xml,
            style_id: parser.style_id,
            alignment: parser.alignment,
            numbering: parser.numbering,
            runs: parser.runs,
        })
    }

    /// The raw XML of this paragraph.
    #[inline]
    pub fn xml(&self) -> &'a [u8] {
        self.xml
    }

    /// `w:pStyle/@w:val`, the id of the paragraph style.
    #[inline]
    pub fn style_id(&self) -> Option<&str> {
        self.style_id.as_deref()
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// `w:numPr`, present when the paragraph carries list numbering.
    #[inline]
    pub fn numbering(&self) -> Option<&NumberingProperties> {
        self.numbering.as_ref()
    }

    /// Runs in order, including those nested in hyperlinks.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// Parse state for one paragraph. Levels count open elements: the `w:p`
/// itself is level 1, its children level 2.
#[derive(Default)]
struct ParagraphParser {
    depth: usize,
    in_ppr: bool,
    in_numpr: bool,
    /// Level of the open `w:hyperlink` that is a direct child of the paragraph
    hyperlink_level: Option<usize>,
    /// Level of the run being read
    run_level: Option<usize>,
    in_rpr: bool,
    in_text: bool,
    run: Run,
    style_id: Option<String>,
    alignment: Option<Alignment>,
    numbering: Option<NumberingProperties>,
    runs: SmallVec<[Run; 8]>,
}

impl ParagraphParser {
    fn open(&mut self, e: &BytesStart<'_>, level: usize, empty: bool) {
        let name = e.local_name();
        let name = name.as_ref();

        if let Some(run_level) = self.run_level {
            if level == run_level + 1 {
                match name {
                    b"rPr" => self.in_rpr = !empty,
                    b"t" => self.in_text = !empty,
                    b"tab" | b"ptab" => self.run.text.push('\t'),
                    b"br" => {
                        if matches!(xml::attr_value(e, b"type").as_deref(), None | Some("textWrapping")) {
                            self.run.text.push('\n');
                        }
                    },
                    b"cr" => self.run.text.push('\n'),
                    b"noBreakHyphen" => self.run.text.push('-'),
                    _ => {},
                }
            } else if self.in_rpr && level == run_level + 2 {
                match name {
                    b"b" => self.run.bold = xml::on_off(e),
                    b"i" => self.run.italic = xml::on_off(e),
                    b"u" => {
                        self.run.underline =
                            xml::val(e).is_some_and(|v| !matches!(v.as_str(), "none" | "false" | "0"))
                    },
                    b"sz" => self.run.size = xml::val(e),
                    _ => {},
                }
            }
            return;
        }

        match (level, name) {
            (2, b"pPr") => self.in_ppr = !empty,
            (3, b"pStyle") if self.in_ppr => self.style_id = xml::val(e),
            (3, b"jc") if self.in_ppr => {
                self.alignment = xml::val(e).and_then(|v| Alignment::from_xml(&v));
            },
            (3, b"numPr") if self.in_ppr => {
                self.numbering = Some(NumberingProperties::default());
                self.in_numpr = !empty;
            },
            (4, b"numId") if self.in_numpr => {
                if let Some(numbering) = self.numbering.as_mut() {
                    numbering.num_id = xml::val(e);
                }
            },
            (4, b"ilvl") if self.in_numpr => {
                if let Some(numbering) = self.numbering.as_mut() {
                    numbering.ilvl = xml::val(e).and_then(|v| atoi_simd::parse_skipped::<u32>(v.trim().as_bytes()).ok());
                }
            },
            (2, b"hyperlink") if !empty => self.hyperlink_level = Some(level),
            (2, b"r") => self.start_run(level, empty),
            (3, b"r") if self.hyperlink_level == Some(2) => self.start_run(level, empty),
            _ => {},
        }
    }

    fn start_run(&mut self, level: usize, empty: bool) {
        self.run = Run::default();
        if empty {
            self.runs.push(std::mem::take(&mut self.run));
        } else {
            self.run_level = Some(level);
        }
    }

    fn close(&mut self, name: &[u8], level: usize) {
        if let Some(run_level) = self.run_level {
            if level == run_level {
                self.runs.push(std::mem::take(&mut self.run));
                self.run_level = None;
                self.in_rpr = false;
                self.in_text = false;
            } else if level == run_level + 1 {
                match name {
                    b"rPr" => self.in_rpr = false,
                    b"t" => self.in_text = false,
                    _ => {},
                }
            }
            return;
        }

        match (level, name) {
            (2, b"pPr") => self.in_ppr = false,
            (3, b"numPr") => self.in_numpr = false,
            (2, b"hyperlink") => self.hyperlink_level = None,
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_properties() {
        let xml = br#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:pPr>
                <w:pStyle w:val="ListParagraph"/>
                <w:numPr><w:ilvl w:val="1"/><w:numId w:val="4"/></w:numPr>
                <w:jc w:val="center"/>
                <w:rPr><w:b/></w:rPr>
            </w:pPr>
            <w:r><w:t>item</w:t></w:r>
        </w:p>"#;

        let para = Paragraph::parse(xml).unwrap();
        assert_eq!(para.style_id(), Some("ListParagraph"));
        assert_eq!(para.alignment(), Some(Alignment::Center));
        assert_eq!(
            para.numbering(),
            Some(&NumberingProperties {
                num_id: Some("4".to_string()),
                ilvl: Some(1),
            })
        );
        assert_eq!(para.runs().len(), 1);
        assert!(!para.runs()[0].bold());
    }

    #[test]
    fn test_run_text_and_formatting() {
        let xml = br#"<w:p xmlns:w="w">
            <w:r>
                <w:rPr><w:b/><w:i w:val="0"/><w:u w:val="single"/><w:sz w:val="24"/><w:szCs w:val="20"/></w:rPr>
                <w:t xml:space="preserve">a &amp; b </w:t><w:tab/><w:t>c</w:t><w:br/><w:br w:type="page"/><w:noBreakHyphen/>
            </w:r>
            <w:r><w:rPr><w:u w:val="none"/></w:rPr><w:t>&#65;&lt;</w:t></w:r>
        </w:p>"#;

        let para = Paragraph::parse(xml).unwrap();
        let runs = para.runs();
        assert_eq!(runs.len(), 2);

        assert_eq!(runs[0].text(), "a & b \tc\n-");
        assert!(runs[0].bold());
        assert!(!runs[0].italic());
        assert!(runs[0].underline());
        assert_eq!(runs[0].font_size(), Some(Ok(24)));

        assert_eq!(runs[1].text(), "A<");
        assert!(!runs[1].underline());
        assert_eq!(runs[1].font_size(), None);
    }

    #[test]
    fn test_underline_without_value_is_unset() {
        let para = Paragraph::parse(br#"<w:p><w:r><w:rPr><w:u/></w:rPr><w:t>x</w:t></w:r></w:p>"#).unwrap();
        assert!(!para.runs()[0].underline());
    }

    #[test]
    fn test_hyperlink_runs_and_nested_textbox_text() {
        let xml = br#"<w:p>
            <w:r><w:t>see </w:t></w:r>
            <w:hyperlink r:id="rId4"><w:r><w:t>here</w:t></w:r></w:hyperlink>
            <w:r><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>boxed</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></w:r>
        </w:p>"#;

        let para = Paragraph::parse(xml).unwrap();
        assert_eq!(para.runs().len(), 3);
        assert_eq!(para.text(), "see here");
    }

    #[test]
    fn test_invalid_font_size() {
        let run = Run::new("x").with_size("big");
        assert_eq!(
            run.font_size(),
            Some(Err(StyleAttributeError::InvalidFontSize("big".to_string())))
        );
        assert_eq!(Run::new("x").with_size("-4").font_size().map(|r| r.is_err()), Some(true));
    }

    #[test]
    fn test_numpr_without_num_id() {
        let para = Paragraph::parse(br#"<w:p><w:pPr><w:numPr><w:ilvl w:val="2"/></w:numPr></w:pPr></w:p>"#).unwrap();
        assert_eq!(para.numbering().and_then(|n| n.num_id.as_deref()), None);
        assert_eq!(para.numbering().and_then(|n| n.ilvl), Some(2));
    }

    #[test]
    fn test_alignment_codes() {
        assert_eq!(Alignment::from_xml("both").map(Alignment::code), Some(3));
        assert_eq!(Alignment::from_xml("end").map(Alignment::code), Some(2));
        assert_eq!(Alignment::from_xml("thaiDistribute").map(Alignment::code), Some(9));
        assert_eq!(Alignment::from_xml("sideways"), None);
    }
}
