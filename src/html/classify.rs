/// Paragraph classification: alignment class, heading level and style class.
use crate::common::xml::escape_attr;
use std::borrow::Cow;

/// CSS class prefix for style-derived classes.
pub const STYLE_CLASS_PREFIX: &str = "docx--";

/// CSS class of a paragraph alignment code.
///
/// Codes 0 to 3 are left, center, right and justify. Anything else,
/// including the wider WordprocessingML codes and no alignment at all, is left.
#[inline]
pub const fn alignment_class(code: Option<u8>) -> &'static str {
    match code {
        Some(1) => "text-center",
        Some(2) => "text-right",
        Some(3) => "text-justify",
        _ => "text-left",
    }
}

/// What a paragraph style name makes of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    /// A style named `Heading...`, with its level
    Heading(u32),
    /// The default body style: `Normal` or no name at all
    Body,
    /// Any other style
    Other,
}

impl StyleClass {
    /// Classify a style name.
    ///
    /// A name starting with `Heading` is a heading. Its level is the first
    /// run of ASCII digits anywhere in the name, or 1 when there is none.
    pub fn classify(style_name: &str) -> Self {
        if style_name.starts_with("Heading") {
            StyleClass::Heading(heading_level(style_name))
        } else if style_name.is_empty() || style_name == "Normal" {
            StyleClass::Body
        } else {
            StyleClass::Other
        }
    }

    /// The element a paragraph of this class is written as.
    pub fn tag(self) -> Cow<'static, str> {
        const HEADINGS: [&str; 10] = ["h0", "h1", "h2", "h3", "h4", "h5", "h6", "h7", "h8", "h9"];
        match self {
            StyleClass::Heading(level) => match HEADINGS.get(level as usize) {
                Some(&tag) => Cow::Borrowed(tag),
                None => Cow::Owned(format!("h{}", level)),
            },
            StyleClass::Body | StyleClass::Other => Cow::Borrowed("p"),
        }
    }
}

fn heading_level(style_name: &str) -> u32 {
    let bytes = style_name.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return 1;
    };
    let len = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
    atoi_simd::parse_skipped::<u32>(&bytes[start..start + len]).unwrap_or(1)
}

/// The style-derived class: `docx--` followed by the lower-cased name with
/// spaces turned into hyphens, escaped for a quoted attribute.
pub fn style_class_slug(style_name: &str) -> String {
    let slug = style_name.to_lowercase().replace(' ', "-");
    let slug = escape_attr(&slug);
    let mut class = String::with_capacity(STYLE_CLASS_PREFIX.len() + slug.len());
    class.push_str(STYLE_CLASS_PREFIX);
    class.push_str(&slug);
    class
}
