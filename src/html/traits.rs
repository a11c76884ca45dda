/// Core trait for HTML conversion.
use super::config::HtmlOptions;
use super::writer::convert_document;
use crate::common::Result;
use crate::ooxml::docx::{Document, Package};

/// Types that can be converted to an HTML fragment.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::html::ToHtml;
/// use longan::ooxml::docx::Package;
///
/// # fn main() -> Result<(), longan::Error> {
/// let pkg = Package::open("document.docx")?;
/// let html = pkg.to_html()?;
/// println!("{}", html);
/// # Ok(())
/// # }
/// ```
pub trait ToHtml {
    /// Convert this item to HTML with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Convert this item to HTML with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}

impl ToHtml for Document<'_> {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        convert_document(self, options)
    }
}

impl ToHtml for Package {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        self.document()?.to_html_with_options(options)
    }
}
