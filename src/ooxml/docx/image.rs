//! Embedded picture references inside a paragraph.
//!
//! Pictures sit in `<w:drawing>` elements; the picture data itself lives in a
//! separate media part, linked by the `r:embed` attribute of the `<a:blip>`
//! inside the drawing. This module only finds those relationship ids. Resolving
//! them to bytes is up to the caller's [`PartResolver`](crate::ooxml::opc::PartResolver).
use crate::common::xml;
use crate::ooxml::error::{OoxmlError, Result};
use memchr::memmem;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// Relationship ids of the pictures drawn in `xml`, in document order.
///
/// Only blips inside a `w:drawing` count; a blip used as a shape fill outside
/// a drawing is not a picture of the paragraph. Duplicate references are
/// kept, so the same picture drawn twice is reported twice.
pub fn image_references(xml: &[u8]) -> Result<SmallVec<[String; 2]>> {
    let mut refs = SmallVec::new();

    // Most paragraphs carry no picture at all
    if memmem::find(xml, b"blip").is_none() {
        return Ok(refs);
    }

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut drawing_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"drawing" => drawing_depth += 1,
                b"blip" if drawing_depth > 0 => refs.extend(xml::attr_value(&e, b"embed")),
                _ => {},
            },
            Ok(Event::Empty(e)) if drawing_depth > 0 && e.local_name().as_ref() == b"blip" => {
                refs.extend(xml::attr_value(&e, b"embed"));
            },
            Ok(Event::End(e)) if e.local_name().as_ref() == b"drawing" => {
                drawing_depth = drawing_depth.saturating_sub(1);
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(refs)
}
