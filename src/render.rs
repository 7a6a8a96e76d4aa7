//! Render descriptions for the reader page
//!
//! Pure transforms from fetched data to a structured description of the
//! tables the page shows. The transforms do no I/O and know nothing about
//! any widget toolkit, so row construction is unit-testable on its own;
//! [`crate::html`] turns a description into markup.

use crate::models::{ArticleSummary, Pingback};

/// Number of columns in the article listing, and the colspan of each
/// hidden detail cell.
pub const ARTICLE_COLUMNS: usize = 5;

/// One table cell in a render description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text content
    Text(String),
    /// Hyperlink with a target and a visible label
    Link { href: String, label: String },
    /// The per-article "Fetch" button
    FetchButton,
}

/// A visible article row paired with its initially hidden detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    /// The five listing cells: DOI, title link, count, most recent, button
    pub cells: Vec<Cell>,
    /// The detail row rendered immediately below this one
    pub detail: DetailPanel,
}

/// The article listing: one row pair per summary, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTable {
    pub rows: Vec<ArticleRow>,
}

impl ArticleTable {
    /// Build the listing description from fetched summaries.
    ///
    /// Produces exactly one visible row and one hidden detail panel per
    /// summary, preserving input order.
    pub fn from_summaries(articles: &[ArticleSummary]) -> Self {
        let rows = articles
            .iter()
            .map(|article| ArticleRow {
                cells: vec![
                    Cell::Text(article.doi.as_raw().to_string()),
                    Cell::Link {
                        href: article.article_url.clone(),
                        label: article.title.clone(),
                    },
                    Cell::Text(article.pingback_count.to_string()),
                    Cell::Text(article.most_recent_pingback.clone()),
                    Cell::FetchButton,
                ],
                detail: DetailPanel::for_article(article),
            })
            .collect();
        Self { rows }
    }
}

/// Detail row content for one article.
///
/// Starts hidden with only its header text. Revealed when the row's fetch
/// begins; the sub-table appears only if the fetch succeeds. A failed fetch
/// leaves the panel visible with no table and no in-row error placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    /// `Pingbacks for "{title}"`, shown from the moment the panel is revealed
    pub header: String,
    /// Whether the detail row is still hidden
    pub hidden: bool,
    /// Sub-table rows, present only after a successful fetch
    pub pingbacks: Option<Vec<Vec<Cell>>>,
}

impl DetailPanel {
    fn for_article(article: &ArticleSummary) -> Self {
        Self {
            header: format!("Pingbacks for \"{}\"", article.title),
            hidden: true,
            pingbacks: None,
        }
    }

    /// Show the detail row. Happens before the fetch is dispatched, so the
    /// header is visible while the request is in flight.
    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Fill the sub-table from a successful detail response.
    pub fn populate(&mut self, pingbacks: &[Pingback]) {
        self.pingbacks = Some(pingback_rows(pingbacks));
    }
}

/// Sub-table rows for a pingback detail response, in input order.
///
/// Each row carries the referring page's title, a link whose target and
/// label are both the pingback URL, and the creation timestamp.
pub fn pingback_rows(pingbacks: &[Pingback]) -> Vec<Vec<Cell>> {
    pingbacks
        .iter()
        .map(|pingback| {
            vec![
                Cell::Text(pingback.title.clone()),
                Cell::Link {
                    href: pingback.url.clone(),
                    label: pingback.url.clone(),
                },
                Cell::Text(pingback.created.clone()),
            ]
        })
        .collect()
}
