/// Writer driving a whole document through the HTML conversion.
///
/// This module provides the `HtmlWriter` struct which walks the body blocks
/// once, routes each one to the list, paragraph or table rendering, and
/// collects the fragments.
use crate::common::Result;
use crate::html::config::{HtmlOptions, NumberingMode};
use crate::html::images::extract_images;
use crate::html::list::{ListState, Markup};
use crate::html::paragraph::{paragraph_content, render_paragraph};
use crate::html::table::render_table;
use crate::ooxml::docx::{
    Block, DefinitionNumbering, Document, NumberingResolver, Paragraph, ParityNumbering, Table,
};
use crate::ooxml::opc::PartResolver;
use smallvec::SmallVec;

/// Collects the HTML fragments of one document.
///
/// One writer per conversion: the list state and the fragments belong to it
/// alone.
pub struct HtmlWriter {
    /// Emitted fragments, joined with newlines by [`HtmlWriter::finish`]
    fragments: Vec<String>,
    lists: ListState,
    options: HtmlOptions,
}

impl HtmlWriter {
    /// Create a new writer with the given options.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            fragments: Vec::with_capacity(64),
            lists: ListState::new(),
            options,
        }
    }

    /// Write every block of the document's body.
    ///
    /// The first block that cannot be read aborts the conversion.
    pub fn write_document(&mut self, doc: &Document<'_>) -> Result<()> {
        let numbering = self.numbering_resolver(doc)?;
        let resolver = doc.resolver();

        for block in doc.blocks() {
            match block? {
                Block::Paragraph(para) => self.write_paragraph(doc, &para, &*numbering, &resolver),
                Block::Table(table) => self.write_table(doc, &table),
            }
        }
        Ok(())
    }

    fn numbering_resolver(&self, doc: &Document<'_>) -> Result<Box<dyn NumberingResolver>> {
        Ok(match self.options.numbering {
            NumberingMode::Parity => Box::new(ParityNumbering),
            NumberingMode::Definitions => match doc.numbering()? {
                Some(numbering) => Box::new(DefinitionNumbering::new(numbering)),
                None => {
                    log::debug!("no numbering part, classifying lists by numbering id parity");
                    Box::new(ParityNumbering)
                },
            },
        })
    }

    /// Write one body paragraph, as a list item or on its own.
    pub fn write_paragraph(
        &mut self,
        doc: &Document<'_>,
        para: &Paragraph<'_>,
        numbering: &dyn NumberingResolver,
        resolver: &dyn PartResolver,
    ) {
        let images: SmallVec<[String; 2]> = if self.options.inline_images {
            extract_images(para, resolver)
        } else {
            SmallVec::new()
        };
        let content = paragraph_content(para, &images, self.options.escape_text);

        match para.numbering().and_then(|props| numbering.resolve(props)) {
            Some(info) => {
                let (lists, markup) = std::mem::take(&mut self.lists).item(info, &content);
                self.lists = lists;
                self.push_markup(markup);
            },
            None => {
                self.flush_lists();
                self.fragments
                    .push(render_paragraph(doc.style_name(para), para.alignment(), &content));
            },
        }
    }

    /// Write one body table, closing any open list first.
    pub fn write_table(&mut self, doc: &Document<'_>, table: &Table<'_>) {
        self.flush_lists();
        self.fragments
            .extend(render_table(table, doc.styles(), self.options.escape_text));
    }

    fn flush_lists(&mut self) {
        let (lists, markup) = std::mem::take(&mut self.lists).flush();
        self.lists = lists;
        self.push_markup(markup);
    }

    fn push_markup(&mut self, markup: Markup) {
        self.fragments.extend(markup);
    }

    /// Close any open list and return the fragment.
    pub fn finish(mut self) -> String {
        self.flush_lists();
        self.fragments.join("\n")
    }
}

/// Convert a document with the given options.
pub fn convert_document(doc: &Document<'_>, options: &HtmlOptions) -> Result<String> {
    let mut writer = HtmlWriter::new(options.clone());
    writer.write_document(doc)?;
    Ok(writer.finish())
}
