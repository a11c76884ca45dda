/// Paragraphs outside lists and tables.
use crate::html::classify::{StyleClass, alignment_class, style_class_slug};
use crate::html::images::write_image_tags;
use crate::html::run::runs_html;
use crate::ooxml::docx::{Alignment, Paragraph};

/// Formatted run text, trimmed, followed by one `<img>` per picture.
pub fn paragraph_content(paragraph: &Paragraph<'_>, images: &[String], escape: bool) -> String {
    let runs = runs_html(paragraph.runs(), escape);
    let mut content = String::with_capacity(runs.len() + images.iter().map(|uri| uri.len() + 12).sum::<usize>());
    content.push_str(runs.trim());
    write_image_tags(&mut content, images);
    content
}

/// Wrap paragraph content in its element: `h{n}` for headings, `p` otherwise,
/// classed by style and alignment.
pub fn render_paragraph(style_name: &str, alignment: Option<Alignment>, content: &str) -> String {
    let tag = StyleClass::classify(style_name).tag();
    let class = style_class_slug(style_name);
    let align = alignment_class(alignment.map(Alignment::code));
    format!("<{tag} class='{class} {align}'>{content}</{tag}>")
}
