//! List numbering: what a paragraph's `w:numPr` means for HTML lists.
//!
//! A [`NumberingResolver`] turns the raw numbering properties of a paragraph
//! into a [`NumberingInfo`] (list kind and nesting level), or decides that the
//! paragraph is not a list item. Two resolvers exist:
//!
//! - [`ParityNumbering`], the default, which classifies by the parity of the
//!   numbering id alone and never reads the numbering part;
//! - [`DefinitionNumbering`], which looks the format up in `numbering.xml`.
use crate::common::xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// The two HTML list flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Unordered list (`ul`)
    Bullet,
    /// Ordered list (`ol`)
    Decimal,
}

impl ListKind {
    /// The HTML element opening a list of this kind.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Decimal => "ol",
        }
    }
}

/// Numbering properties exactly as a paragraph carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingProperties {
    /// `w:numId/@w:val`, unparsed
    pub num_id: Option<String>,
    /// `w:ilvl/@w:val`; `None` when absent or not a number
    pub ilvl: Option<u32>,
}

/// A paragraph's place in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingInfo {
    pub kind: ListKind,
    pub level: u32,
}

/// Decides whether, and how, a paragraph belongs to a list.
pub trait NumberingResolver {
    /// `None` means the paragraph is not a list item.
    fn resolve(&self, props: &NumberingProperties) -> Option<NumberingInfo>;
}

/// Bullet for an even numbering id, decimal for an odd or unparseable one.
///
/// This is a heuristic: it ignores the numbering definitions entirely, so a
/// bulleted list with an odd id renders as `ol`. Output stability depends on
/// it, which is why it stays the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParityNumbering;

impl NumberingResolver for ParityNumbering {
    fn resolve(&self, props: &NumberingProperties) -> Option<NumberingInfo> {
        let num_id = props.num_id.as_deref()?;
        Some(NumberingInfo {
            kind: parity_kind(num_id),
            level: props.ilvl.unwrap_or(0),
        })
    }
}

fn parity_kind(num_id: &str) -> ListKind {
    match atoi_simd::parse_skipped::<i64>(num_id.trim().as_bytes()) {
        Ok(id) if id % 2 == 0 => ListKind::Bullet,
        _ => ListKind::Decimal,
    }
}

/// Numbering definitions from `numbering.xml`, reduced to what list kind
/// detection needs: `w:num` → `w:abstractNum`, and the `w:numFmt` of each level.
#[derive(Debug, Clone, Default)]
pub struct Numbering {
    /// numId -> abstractNumId
    nums: HashMap<u32, u32>,
    /// (abstractNumId, ilvl) -> numFmt
    formats: HashMap<(u32, u32), String>,
}

impl Numbering {
    /// Parse a numbering part.
    pub fn from_part(part: &dyn Part) -> Result<Self> {
        Self::from_xml(part.blob())
    }

    pub(crate) fn from_xml(xml_bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml_bytes);
        reader.config_mut().trim_text(true);

        let mut numbering = Self::default();
        let mut current_abstract: Option<u32> = None;
        let mut current_level: Option<u32> = None;
        let mut current_num: Option<u32> = None;
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"abstractNum" => {
                        current_abstract = xml::attr_value(&e, b"abstractNumId")
                            .and_then(|id| atoi_simd::parse_skipped::<u32>(id.as_bytes()).ok());
                    },
                    b"lvl" if current_abstract.is_some() => {
                        current_level = xml::attr_value(&e, b"ilvl")
                            .and_then(|id| atoi_simd::parse_skipped::<u32>(id.as_bytes()).ok());
                    },
                    b"numFmt" => {
                        if let (Some(abstract_id), Some(level), Some(fmt)) =
                            (current_abstract, current_level, xml::val(&e))
                        {
                            numbering.formats.entry((abstract_id, level)).or_insert(fmt);
                        }
                    },
                    b"num" if current_abstract.is_none() => {
                        current_num = xml::attr_value(&e, b"numId")
                            .and_then(|id| atoi_simd::parse_skipped::<u32>(id.as_bytes()).ok());
                    },
                    b"abstractNumId" => {
                        if let (Some(num_id), Some(abstract_id)) = (
                            current_num,
                            xml::val(&e).and_then(|id| atoi_simd::parse_skipped::<u32>(id.as_bytes()).ok()),
                        ) {
                            numbering.nums.insert(num_id, abstract_id);
                        }
                    },
                    _ => {},
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"abstractNum" => {
                        current_abstract = None;
                        current_level = None;
                    },
                    b"lvl" => current_level = None,
                    b"num" => current_num = None,
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(numbering)
    }

    /// The `w:numFmt` value of a level, e.g. `bullet` or `decimal`.
    pub fn format(&self, num_id: u32, level: u32) -> Option<&str> {
        let abstract_id = self.nums.get(&num_id)?;
        self.formats.get(&(*abstract_id, level)).map(String::as_str)
    }
}

/// Classifies by the numbering definitions: a `bullet` level format gives a
/// bullet list, any other format a decimal one.
///
/// Ids or levels without a definition fall back to parity. That includes `0`,
/// which never has a `w:num` and so classifies as a bullet.
#[derive(Debug, Clone, Default)]
pub struct DefinitionNumbering {
    numbering: Numbering,
}

impl DefinitionNumbering {
    pub fn new(numbering: Numbering) -> Self {
        Self { numbering }
    }
}

impl NumberingResolver for DefinitionNumbering {
    fn resolve(&self, props: &NumberingProperties) -> Option<NumberingInfo> {
        let raw_id = props.num_id.as_deref()?;
        let level = props.ilvl.unwrap_or(0);
        let kind = match atoi_simd::parse_skipped::<u32>(raw_id.trim().as_bytes()) {
            Ok(num_id) => match self.numbering.format(num_id, level) {
                Some("bullet") => ListKind::Bullet,
                Some(_) => ListKind::Decimal,
                None => parity_kind(raw_id),
            },
            Err(_) => parity_kind(raw_id),
        };
        Some(NumberingInfo { kind, level })
    }
}
