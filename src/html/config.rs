/// Configuration types for HTML conversion.
///
/// This module defines the options used to customize the HTML fragment
/// produced from a Word document.
use crate::common::{Error, Result};
use serde::Deserialize;

/// How list paragraphs are classified as bullet or numbered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingMode {
    /// Even numbering id is a bullet list, anything else a numbered list.
    /// Does not read the numbering part.
    #[default]
    Parity,
    /// Look the level format up in the numbering part, falling back to
    /// parity when there is no definition.
    Definitions,
}

impl std::str::FromStr for NumberingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "parity" => Ok(NumberingMode::Parity),
            "definitions" => Ok(NumberingMode::Definitions),
            other => Err(Error::Options(format!("unknown numbering mode {:?}", other))),
        }
    }
}

/// Configuration options for HTML conversion.
///
/// # Examples
///
/// ```rust
/// use longan::html::{HtmlOptions, NumberingMode};
///
/// // Create with defaults
/// let options = HtmlOptions::default();
///
/// // Or customize
/// let options = HtmlOptions::new()
///     .with_inline_images(false)
///     .with_numbering(NumberingMode::Definitions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlOptions {
    /// Whether embedded pictures are inlined as data URIs
    pub inline_images: bool,
    /// How list kinds are decided
    pub numbering: NumberingMode,
    /// Whether run text is HTML-escaped
    pub escape_text: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            inline_images: true,
            numbering: NumberingMode::Parity,
            escape_text: true,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether pictures are inlined.
    ///
    /// When disabled, paragraphs are not scanned for drawings and no `<img>`
    /// is emitted.
    #[inline]
    pub fn with_inline_images(mut self, inline: bool) -> Self {
        self.inline_images = inline;
        self
    }

    /// Set the list classification mode.
    #[inline]
    pub fn with_numbering(mut self, mode: NumberingMode) -> Self {
        self.numbering = mode;
        self
    }

    /// Set whether run text is escaped.
    ///
    /// Turning this off writes run text verbatim, markup characters included.
    #[inline]
    pub fn with_escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Read options from YAML. Missing keys keep their defaults.
    ///
    /// ```rust
    /// use longan::html::{HtmlOptions, NumberingMode};
    ///
    /// let options = HtmlOptions::from_yaml_str("numbering: definitions\n").unwrap();
    /// assert_eq!(options.numbering, NumberingMode::Definitions);
    /// assert!(options.inline_images);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Options(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_options_builder() {
        let options = HtmlOptions::new()
            .with_inline_images(false)
            .with_numbering(NumberingMode::Definitions)
            .with_escape_text(false);

        assert!(!options.inline_images);
        assert_eq!(options.numbering, NumberingMode::Definitions);
        assert!(!options.escape_text);
    }

    #[test]
    fn test_html_options_default() {
        let options = HtmlOptions::default();
        assert!(options.inline_images);
        assert_eq!(options.numbering, NumberingMode::Parity);
        assert!(options.escape_text);
    }

    #[test]
    fn test_from_yaml() {
        let options = HtmlOptions::from_yaml_str("inline_images: false\nescape_text: false\n").unwrap();
        assert_eq!(
            options,
            HtmlOptions::new().with_inline_images(false).with_escape_text(false)
        );
    }

    #[test]
    fn test_from_yaml_rejects_unknown_values() {
        assert!(matches!(
            HtmlOptions::from_yaml_str("numbering: roman\n"),
            Err(Error::Options(_))
        ));
        assert!(matches!(
            HtmlOptions::from_yaml_str("inline_pictures: true\n"),
            Err(Error::Options(_))
        ));
    }

    #[test]
    fn test_numbering_mode_from_str() {
        assert_eq!("parity".parse::<NumberingMode>().unwrap(), NumberingMode::Parity);
        assert_eq!("definitions".parse::<NumberingMode>().unwrap(), NumberingMode::Definitions);
        assert!("bullets".parse::<NumberingMode>().is_err());
    }
}
