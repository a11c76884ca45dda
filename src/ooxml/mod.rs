//! Office Open XML (OOXML) WordprocessingML reading.
//!
//! The implementation is based on the Open Packaging Conventions (OPC) and
//! follows the structure of the python-docx library, adapted for Rust.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **Errors** (`error`): Document-layer error types
//! 3. **Word documents** (`docx`): Body blocks, paragraphs, tables, styles, numbering
//!
//! # Example
//!
//! ```rust,no_run
//! use longan::ooxml::docx::Package;
//!
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//! println!("Document contains {} blocks", doc.blocks().count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result, StyleAttributeError};
