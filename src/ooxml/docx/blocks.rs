//! The block-level content of a document body.
//!
//! [`Blocks`] walks `<w:body>` lazily and yields each direct paragraph or table
//! child as it is reached. Nothing is buffered: every block borrows its XML
//! straight from the document part.
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::table::Table;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// A top-level element of the document body.
#[derive(Debug, Clone)]
pub enum Block<'a> {
    Paragraph(Paragraph<'a>),
    Table(Table<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Paragraph,
    Table,
}

impl BlockKind {
    fn of(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"p" => Some(BlockKind::Paragraph),
            b"tbl" => Some(BlockKind::Table),
            _ => None,
        }
    }

    fn parse(self, xml: &[u8]) -> Result<Block<'_>> {
        Ok(match self {
            BlockKind::Paragraph => Block::Paragraph(Paragraph::parse(xml)?),
            BlockKind::Table => Block::Table(Table::parse(xml)?),
        })
    }
}

/// Iterator over the blocks of a document body, in document order.
///
/// Single pass: a second traversal needs a new iterator. Elements other than
/// paragraphs and tables (section properties, content controls, bookmarks)
/// are passed over. The first XML error is yielded once and ends iteration.
pub struct Blocks<'a> {
    xml: &'a [u8],
    reader: Reader<&'a [u8]>,
    depth: usize,
    /// Level of `<w:body>` once it has been entered
    body_level: Option<usize>,
    done: bool,
}

impl<'a> Blocks<'a> {
    /// Iterate over the body of a main document part's XML.
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);
        Self {
            xml,
            reader,
            depth: 0,
            body_level: None,
            done: false,
        }
    }

    fn fail(&mut self, err: quick_xml::Error) -> Option<Result<Block<'a>>> {
        self.done = true;
        Some(Err(OoxmlError::from(err)))
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<Block<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let xml = self.xml;
            let start = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => return self.fail(err),
            };

            match event {
                Event::Start(e) => {
                    self.depth += 1;
                    let body_level = self.body_level;
                    match body_level {
                        None if e.local_name().as_ref() == b"body" => self.body_level = Some(self.depth),
                        Some(body) if self.depth == body + 1 => {
                            let Some(kind) = BlockKind::of(e.local_name().as_ref()) else {
                                continue;
                            };
                            if let Err(err) = self.reader.read_to_end(e.name()) {
                                return self.fail(err);
                            }
                            self.depth -= 1;
                            let end = self.reader.buffer_position() as usize;
                            let block = kind.parse(&xml[start..end]);
                            if block.is_err() {
                                self.done = true;
                            }
                            return Some(block);
                        },
                        _ => {},
                    }
                },
                Event::Empty(e) => {
                    if self.body_level == Some(self.depth)
                        && let Some(kind) = BlockKind::of(e.local_name().as_ref())
                    {
                        let end = self.reader.buffer_position() as usize;
                        return Some(kind.parse(&xml[start..end]));
                    }
                },
                Event::End(_) => {
                    if self.body_level == Some(self.depth) {
                        self.done = true;
                        return None;
                    }
                    self.depth = self.depth.saturating_sub(1);
                },
                Event::Eof => {
                    self.done = true;
                    return None;
                },
                _ => {},
            }
        }
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>first</w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:bookmarkStart w:id="0" w:name="x"/>
    <w:p/>
    <w:sdt><w:sdtContent><w:p><w:r><w:t>hidden in sdt</w:t></w:r></w:p></w:sdtContent></w:sdt>
    <w:p><w:r><w:t>last</w:t></w:r></w:p>
    <w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>
  </w:body>
</w:document>"#;

    #[test]
    fn test_blocks_in_document_order() {
        let blocks: Vec<Block<'_>> = Blocks::new(DOCUMENT_XML).collect::<Result<_>>().unwrap();
        assert_eq!(blocks.len(), 4);

        let summary: Vec<String> = blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => format!("p:{}", p.text()),
                Block::Table(t) => format!("tbl:{}", t.rows().len()),
            })
            .collect();
        assert_eq!(summary, vec!["p:first", "tbl:1", "p:", "p:last"]);
    }

    #[test]
    fn test_blocks_borrow_their_xml() {
        let mut blocks = Blocks::new(DOCUMENT_XML);
        match blocks.next() {
            Some(Ok(Block::Paragraph(p))) => {
                assert_eq!(p.xml(), &b"<w:p><w:r><w:t>first</w:t></w:r></w:p>"[..]);
            },
            other => panic!("unexpected first block: {:?}", other),
        }
    }

    #[test]
    fn test_empty_body() {
        let xml = br#"<w:document><w:body/></w:document>"#;
        assert_eq!(Blocks::new(xml).count(), 0);
        let xml = br#"<w:document><w:body></w:body></w:document>"#;
        assert_eq!(Blocks::new(xml).count(), 0);
    }

    #[test]
    fn test_malformed_xml_yields_one_error() {
        let xml = br#"<w:document><w:body><w:p><w:r><w:t>x</w:r></w:p></w:body></w:document>"#;
        let items: Vec<_> = Blocks::new(xml).collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }
}
