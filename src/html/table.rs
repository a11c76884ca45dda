/// Tables.
///
/// Cells hold their paragraphs only: no alignment class and no pictures.
/// Nested tables inside cells are not rendered.
use crate::html::classify::{StyleClass, style_class_slug};
use crate::html::run::runs_html;
use crate::ooxml::docx::Table;
use crate::ooxml::docx::styles::{Styles, paragraph_style_name};

/// Render a table as lines: the opening tag, one line per row, the closing tag.
///
/// Rows follow the table grid, so a cell spanning columns or continuing a
/// vertical merge is repeated.
pub fn render_table(table: &Table<'_>, styles: Option<&Styles>, escape: bool) -> Vec<String> {
    let grid = table.grid_rows();
    let mut lines = Vec::with_capacity(grid.len() + 2);
    lines.push("<table class='docx-table'>".to_string());

    for row in grid {
        let mut line = String::from("<tr>");
        for cell in row {
            line.push_str("<td>");
            for para in cell.paragraphs() {
                let text = runs_html(para.runs(), escape);
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let style_name = paragraph_style_name(styles, para.style_id());
                let tag = StyleClass::classify(style_name).tag();
                let class = style_class_slug(style_name);
                line.push_str(&format!("<{tag} class='{class}'>{text}</{tag}>"));
            }
            line.push_str("</td>");
        }
        line.push_str("</tr>");
        lines.push(line);
    }

    lines.push("</table>".to_string());
    lines
}
