/// Word (.docx) document support, read side.
///
/// # Architecture
///
/// The module is organized around these key types:
/// - `Package`: The overall .docx file package
/// - `Document`: The main document part with its styles and relationships
/// - `Blocks`: Lazy iterator over the body's paragraphs and tables
/// - `Paragraph`: A paragraph with runs, style id, alignment and numbering
/// - `Run`: A text run with formatting
/// - `Table`: A table with rows and cells
///
/// # Example
///
/// ```rust,no_run
/// use longan::ooxml::docx::{Block, Package};
///
/// let package = Package::open("document.docx")?;
/// let doc = package.document()?;
///
/// for block in doc.blocks() {
///     match block? {
///         Block::Paragraph(para) => {
///             for run in para.runs() {
///                 println!("  Run: {} (bold: {})", run.text(), run.bold());
///             }
///         },
///         Block::Table(table) => {
///             for row in table.rows() {
///                 println!("Row with {} cells", row.cells().len());
///             }
///         },
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod blocks;
pub mod document;
pub mod image;
pub mod numbering;
pub mod package;
pub mod paragraph;
pub mod styles;
pub mod table;

pub use blocks::{Block, Blocks};
pub use document::Document;
pub use numbering::{
    DefinitionNumbering, ListKind, Numbering, NumberingInfo, NumberingProperties, NumberingResolver, ParityNumbering,
};
pub use package::Package;
pub use paragraph::{Alignment, Paragraph, Run};
pub use styles::{Style, StyleType, Styles};
pub use table::{Cell, Row, Table, VMergeState};
