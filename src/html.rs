//! HTML rendering of reader page descriptions
//!
//! Consumes the structured descriptions from [`crate::render`] and emits
//! page markup: the `articles` listing table with a colspan-5 `fetch` cell
//! under each row, and a `pingbacks` sub-table per populated detail panel.

use crate::reader::{FetchState, Page};
use crate::render::{ArticleRow, Cell, ARTICLE_COLUMNS};

/// Renders a [`Page`] into HTML table markup.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole page: warning banner and article listing.
    pub fn render_page(&self, page: &Page) -> String {
        let mut out = String::new();
        if page.warning_banner_visible {
            out.push_str("<p id=\"jsWarning\">This page requires scripting support.</p>\n");
        }
        out.push_str("<table class=\"articles\">\n");
        for (row, state) in page.table.rows.iter().zip(&page.states) {
            self.render_article_row(&mut out, row, *state);
        }
        out.push_str("</table>\n");
        out
    }

    fn render_article_row(&self, out: &mut String, row: &ArticleRow, state: FetchState) {
        out.push_str("<tr>");
        for cell in &row.cells {
            self.render_cell(out, cell, state);
        }
        out.push_str("</tr>\n");

        let hidden = if row.detail.hidden { " hidden" } else { "" };
        out.push_str(&format!(
            "<tr{}><td class=\"fetch\" colspan=\"{}\">",
            hidden, ARTICLE_COLUMNS
        ));
        if !row.detail.hidden {
            out.push_str(&format!("<h3>{}</h3>", escape(&row.detail.header)));
            if let Some(pingbacks) = &row.detail.pingbacks {
                out.push_str("<table class=\"pingbacks\">\n");
                for sub_row in pingbacks {
                    out.push_str("<tr>");
                    for cell in sub_row {
                        self.render_cell(out, cell, state);
                    }
                    out.push_str("</tr>\n");
                }
                out.push_str("</table>");
            }
        }
        out.push_str("</td></tr>\n");
    }

    fn render_cell(&self, out: &mut String, cell: &Cell, state: FetchState) {
        match cell {
            Cell::Text(text) => {
                out.push_str(&format!("<td>{}</td>", escape(text)));
            }
            Cell::Link { href, label } => {
                out.push_str(&format!(
                    "<td><a href=\"{}\">{}</a></td>",
                    escape(href),
                    escape(label)
                ));
            }
            Cell::FetchButton => {
                let disabled = if state == FetchState::Idle {
                    ""
                } else {
                    " disabled"
                };
                out.push_str(&format!("<td><button{}>Fetch</button></td>", disabled));
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
