//! The reader page session
//!
//! Drives the two page operations: the one-shot article listing on load and
//! per-row pingback detail fetches. [`Page`] holds the state a browser page
//! would keep in the DOM: the table description, per-row fetch states, and
//! the notifications that stand in for blocking alerts.

use tracing::warn;

use crate::client::PingbackClient;
use crate::models::ArticleSummary;
use crate::render::ArticleTable;

/// Fetch-button state for one article row.
///
/// There is no transition back to `Idle`: the button is disabled before the
/// request is dispatched, so each row fetches at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Button enabled, nothing fetched yet
    Idle,
    /// Request dispatched, response not yet arrived
    Loading,
    /// Detail sub-table rendered
    Populated,
    /// Fetch failed; the panel stays visible without a sub-table
    Failed,
}

/// Observable page state.
#[derive(Debug, Clone)]
pub struct Page {
    /// Summaries backing the table, in server order
    pub articles: Vec<ArticleSummary>,
    /// Render description of the article listing
    pub table: ArticleTable,
    /// Fetch state per article row, indexed like `articles`
    pub states: Vec<FetchState>,
    /// Status texts surfaced to the user, one per failed request
    pub notifications: Vec<String>,
    /// The script-disabled warning banner. Visible until the page loads.
    pub warning_banner_visible: bool,
}

impl Page {
    fn new() -> Self {
        Self {
            articles: Vec::new(),
            table: ArticleTable::default(),
            states: Vec::new(),
            notifications: Vec::new(),
            warning_banner_visible: true,
        }
    }
}

/// The pingback reader page: one listing load, then independent per-row
/// detail fetches.
///
/// # Example
///
/// ```no_run
/// use pingback_client_rs::{PingbackClient, PingbackReader};
///
/// #[tokio::main]
/// async fn main() {
///     let mut reader = PingbackReader::new(PingbackClient::new());
///     reader.load().await;
///
///     // "Click" the first row's Fetch button
///     reader.fetch(0).await;
///
///     for notification in &reader.page().notifications {
///         eprintln!("alert: {}", notification);
///     }
/// }
/// ```
pub struct PingbackReader {
    client: PingbackClient,
    page: Page,
}

impl PingbackReader {
    pub fn new(client: PingbackClient) -> Self {
        Self {
            client,
            page: Page::new(),
        }
    }

    /// The current page state.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Load the page: hide the warning banner and request the article
    /// listing.
    ///
    /// On success the whole listing is rendered; on failure the status text
    /// is recorded as a notification and no rows are added. The banner is
    /// hidden before the request goes out and failures do not restore it.
    pub async fn load(&mut self) {
        self.page.warning_banner_visible = false;
        match self.client.list_articles().await {
            Ok(articles) => {
                self.page.table = ArticleTable::from_summaries(&articles);
                self.page.states = vec![FetchState::Idle; articles.len()];
                self.page.articles = articles;
            }
            Err(err) => {
                warn!(error = %err, "article listing failed");
                self.page.notifications.push(err.status_text());
            }
        }
    }

    /// Handle a click on row `index`'s Fetch button.
    ///
    /// The row's state flips to `Loading` and the detail panel is revealed
    /// before the request goes out, so a second click on the same row never
    /// dispatches. Returns whether a request was actually issued.
    pub async fn fetch(&mut self, index: usize) -> bool {
        let Some(article) = self.page.articles.get(index).cloned() else {
            return false;
        };
        if self.page.states[index] != FetchState::Idle {
            return false;
        }

        self.page.states[index] = FetchState::Loading;
        self.page.table.rows[index].detail.reveal();

        match self.client.fetch_pingbacks(&article.doi).await {
            Ok(pingbacks) => {
                self.page.table.rows[index].detail.populate(&pingbacks);
                self.page.states[index] = FetchState::Populated;
            }
            Err(err) => {
                // panel stays visible with just its header
                warn!(doi = %article.doi, error = %err, "pingback detail fetch failed");
                self.page.notifications.push(err.status_text());
                self.page.states[index] = FetchState::Failed;
            }
        }
        true
    }
}
