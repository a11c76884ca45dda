/// HTML conversion of Word documents.
///
/// The output is an HTML fragment, one element per line, using a small fixed
/// vocabulary: `p`, `h1`..`h6`, `ul`, `ol`, `li`, `table`, `tr`, `td`, `span`,
/// `strong`, `em`, `u` and `img`. Style-derived classes are `docx--{style}`,
/// paragraph alignment is `text-left|text-center|text-right|text-justify`, and
/// tables carry `docx-table`. Pictures are inlined as data URIs.
///
/// # Quick Start
///
/// ```rust,no_run
/// use longan::html::{self, HtmlOptions};
///
/// # fn main() -> Result<(), longan::Error> {
/// let fragment = html::convert_file("report.docx", &HtmlOptions::default())?;
/// println!("{}", fragment);
/// # Ok(())
/// # }
/// ```
///
/// # Architecture
///
/// - [`ToHtml`] trait: conversion entry point for packages and documents
/// - [`HtmlOptions`]: configuration for conversion behavior
/// - [`writer`]: drives one pass over the body blocks
/// - [`list`]: reconstructs nested lists from flat list paragraphs
/// - [`classify`], [`run`], [`paragraph`], [`table`], [`images`]: rendering of
///   the individual pieces
pub mod classify;
pub mod config;
pub mod images;
pub mod list;
pub mod paragraph;
pub mod run;
pub mod table;
pub mod traits;
pub mod writer;

pub use config::{HtmlOptions, NumberingMode};
pub use images::ImageError;
pub use list::{ListFrame, ListState};
pub use traits::ToHtml;
pub use writer::{HtmlWriter, convert_document};

use crate::common::Result;
use crate::ooxml::docx::Package;
use std::io::{Read, Seek};
use std::path::Path;

/// Convert the Word document at `path`.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &HtmlOptions) -> Result<String> {
    Package::open(path)?.to_html_with_options(options)
}

/// Convert a Word document held in memory.
pub fn convert_bytes(data: Vec<u8>, options: &HtmlOptions) -> Result<String> {
    Package::from_bytes(data)?.to_html_with_options(options)
}

/// Convert a Word document read from a seekable stream.
pub fn convert_reader<R: Read + Seek>(reader: R, options: &HtmlOptions) -> Result<String> {
    Package::from_reader(reader)?.to_html_with_options(options)
}
