/// Inline formatting of runs.
use crate::common::xml::escape_html;
use crate::ooxml::docx::Run;

/// Write one run as HTML.
///
/// Markup nests from the inside out: `strong`, then `em`, then `u`, then a
/// `span` carrying the font size. A run without text writes nothing, and a run
/// whose size is missing or unreadable gets no `span`.
pub fn write_run(out: &mut String, run: &Run, escape: bool) {
    let text = run.text();
    if text.is_empty() {
        return;
    }

    let size_px = match run.font_size() {
        Some(Ok(half_points)) => Some(half_points / 2),
        Some(Err(err)) => {
            log::debug!("ignoring run size: {}", err);
            None
        },
        None => None,
    };

    if let Some(px) = size_px {
        out.push_str("<span style=\"font-size:");
        out.push_str(itoa::Buffer::new().format(px));
        out.push_str("px\">");
    }
    if run.underline() {
        out.push_str("<u>");
    }
    if run.italic() {
        out.push_str("<em>");
    }
    if run.bold() {
        out.push_str("<strong>");
    }

    if escape {
        out.push_str(&escape_html(text));
    } else {
        out.push_str(text);
    }

    if run.bold() {
        out.push_str("</strong>");
    }
    if run.italic() {
        out.push_str("</em>");
    }
    if run.underline() {
        out.push_str("</u>");
    }
    if size_px.is_some() {
        out.push_str("</span>");
    }
}

/// The runs of a paragraph written back to back.
pub fn runs_html(runs: &[Run], escape: bool) -> String {
    let mut out = String::with_capacity(runs.iter().map(|r| r.text().len()).sum::<usize>() + 16);
    for run in runs {
        write_run(&mut out, run, escape);
    }
    out
}
