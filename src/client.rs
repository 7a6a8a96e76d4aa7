use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::doi::Doi;
use crate::error::{PingbackError, Result};
use crate::jsonp;
use crate::models::{ArticleSummary, Pingback};

/// How the list endpoint orders article summaries.
///
/// The server's pingback read service sorts either by the most recent
/// pingback or by pingback count, newest/highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    /// Most recent pingback first (the server default)
    #[default]
    Date,
    /// Highest pingback count first
    Count,
}

impl OrderBy {
    fn query_value(self) -> &'static str {
        match self {
            OrderBy::Date => "date",
            OrderBy::Count => "count",
        }
    }
}

/// Client for the article pingback read API
///
/// Issues the two read requests the reader page depends on: the summary
/// listing and the per-article pingback detail. Both endpoints answer
/// callback-wrapped JSON or plain JSON; either form is accepted.
///
/// # Example
///
/// ```no_run
/// use pingback_client_rs::PingbackClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PingbackClient::new();
///     let articles = client.list_articles().await?;
///
///     for article in &articles {
///         println!("{}: {} pingbacks", article.title, article.pingback_count);
///     }
///
///     if let Some(article) = articles.first() {
///         let pingbacks = client.fetch_pingbacks(&article.doi).await?;
///         println!("detail rows: {}", pingbacks.len());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PingbackClient {
    client: Client,
    base_url: String,
}

impl PingbackClient {
    /// Create a client against the default server root
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url();
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Create a client with a custom reqwest client and the default server root
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        Self {
            client,
            base_url: config.effective_base_url(),
        }
    }

    /// Fetch the article/pingback summary listing
    ///
    /// `GET {serverRoot}/articles?pingbacks`, returning summaries in server
    /// order. All-or-nothing: any failure yields an error and no partial
    /// result.
    ///
    /// # Errors
    ///
    /// * [`PingbackError::RequestError`] - the HTTP request failed
    /// * [`PingbackError::ApiError`] - the server answered a non-2xx status
    /// * [`PingbackError::JsonError`] - the body was not a summary sequence
    #[instrument(skip(self))]
    pub async fn list_articles(&self) -> Result<Vec<ArticleSummary>> {
        let url = format!("{}/articles?pingbacks", self.base_url);
        self.get_article_list(&url).await
    }

    /// Fetch the summary listing with an explicit sort order
    ///
    /// Same contract as [`list_articles`](Self::list_articles) with the
    /// read service's sort key passed along as `orderby`.
    #[instrument(skip(self))]
    pub async fn list_articles_ordered(&self, order_by: OrderBy) -> Result<Vec<ArticleSummary>> {
        let url = format!(
            "{}/articles?pingbacks&orderby={}",
            self.base_url,
            order_by.query_value()
        );
        self.get_article_list(&url).await
    }

    async fn get_article_list(&self, url: &str) -> Result<Vec<ArticleSummary>> {
        let body = self.get_body(url).await?;
        let articles: Vec<ArticleSummary> = serde_json::from_str(jsonp::strip_callback(&body))?;
        info!(count = articles.len(), "listed article pingback summaries");
        Ok(articles)
    }

    /// Fetch the pingback detail list for one article
    ///
    /// `GET {serverRoot}/articles/{doi}?pingbacks` with the DOI's scheme
    /// marker stripped. The identifier goes into the path verbatim; DOI
    /// slashes are part of the path by the server's contract.
    ///
    /// # Errors
    ///
    /// * [`PingbackError::RequestError`] - the HTTP request failed
    /// * [`PingbackError::ApiError`] - the server answered a non-2xx status
    /// * [`PingbackError::JsonError`] - the body was not a pingback sequence
    #[instrument(skip(self), fields(doi = %doi))]
    pub async fn fetch_pingbacks(&self, doi: &Doi) -> Result<Vec<Pingback>> {
        let url = format!("{}/articles/{}?pingbacks", self.base_url, doi.as_identifier());
        let body = self.get_body(&url).await?;
        let pingbacks: Vec<Pingback> = serde_json::from_str(jsonp::strip_callback(&body))?;
        info!(count = pingbacks.len(), "fetched pingback detail");
        Ok(pingbacks)
    }

    async fn get_body(&self, url: &str) -> Result<String> {
        debug!(%url, "dispatching pingback API request");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "API request failed");
            return Err(PingbackError::ApiError {
                message: format!(
                    "HTTP {}: {}",
                    response.status().as_u16(),
                    response
                        .status()
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                ),
            });
        }

        Ok(response.text().await?)
    }
}

impl Default for PingbackClient {
    fn default() -> Self {
        Self::new()
    }
}
