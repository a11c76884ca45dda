//! Longan - semantic HTML fragments from Word documents
//!
//! This library reads the body of a WordprocessingML (.docx) package and
//! writes it out as an HTML fragment: headings and paragraphs classed by
//! style and alignment, nested `ul`/`ol` lists rebuilt from list numbering,
//! tables, inline bold/italic/underline/font size, and pictures inlined as
//! data URIs.
//!
//! # Features
//!
//! - **OPC layer**: ZIP container, content types and relationship graph
//! - **Streaming body**: paragraphs and tables are produced lazily, in order
//! - **List reconstruction**: a stack machine turns flat list paragraphs into
//!   nested lists
//! - **Tolerant**: a picture or attribute that cannot be read costs only
//!   itself; only an unreadable package aborts the conversion
//!
//! # Example - Converting a DOCX file
//!
//! ```no_run
//! use longan::html::{self, HtmlOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fragment = html::convert_file("document.docx", &HtmlOptions::default())?;
//! println!("{}", fragment);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Walking the body
//!
//! ```no_run
//! use longan::ooxml::docx::{Block, Package};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//!
//! for block in doc.blocks() {
//!     match block? {
//!         Block::Paragraph(para) => println!("[{}] {}", doc.style_name(&para), para.text()),
//!         Block::Table(table) => println!("table with {} rows", table.rows().len()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Types and utilities shared across the crate
pub mod common;

/// HTML fragment rendering
pub mod html;

/// Office Open XML package and WordprocessingML reading
pub mod ooxml;

pub use common::{Error, Result};
pub use html::{HtmlOptions, NumberingMode, ToHtml};
