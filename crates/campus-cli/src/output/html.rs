//! HTML rendering for the web view.

use super::report::TitledTable;

/// Escape text for use inside an HTML element or attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// One `<table>` with a caption.
#[must_use]
pub fn render_table(table: &TitledTable) -> String {
    let mut html = String::new();
    html.push_str("<table>\n<caption>");
    html.push_str(&escape(&table.title));
    html.push_str("</caption>\n<thead><tr>");
    for header in &table.headers {
        html.push_str("<th>");
        html.push_str(&escape(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// A complete page holding `tables` in order.
#[must_use]
pub fn render_page(title: &str, tables: &[TitledTable]) -> String {
    let body: String = tables.iter().map(render_table).collect();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>table{{border-collapse:collapse;margin-bottom:2em}}\
         td,th{{border:1px solid #999;padding:4px 8px;text-align:left}}\
         caption{{font-weight:bold;text-align:left}}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}
