use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automata are built only once, thread-safe
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build HTML text escaper")
});

static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build HTML attribute escaper")
});

/// Escape text for use as HTML element content.
///
/// # Examples
///
/// ```
/// use longan::common::xml::escape_html;
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<b>'x'</b>"), "&lt;b&gt;'x'&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[inline]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !TEXT_ESCAPER.is_match(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"]))
}

/// Escape text for use inside a quoted HTML attribute value, single or double.
///
/// # Examples
///
/// ```
/// use longan::common::xml::escape_attr;
/// assert_eq!(escape_attr("o'brien"), "o&#39;brien");
/// assert_eq!(escape_attr("\"a\" & <b>"), "&quot;a&quot; &amp; &lt;b&gt;");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !ATTR_ESCAPER.is_match(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]))
}
