//! # Pingback Client
//!
//! A Rust client for the article pingback read API of an Ambra-style
//! article server, together with the reader-page logic that turns the
//! responses into table descriptions.
//!
//! ## Features
//!
//! - **Summary Listing**: fetch all articles with their pingback counts
//! - **Lazy Detail**: fetch one article's pingback list on demand, at most
//!   once per article
//! - **DOI Normalization**: `info:doi/` scheme handling for request paths
//! - **Render Descriptions**: pure data-to-table transforms, plus an HTML
//!   renderer consuming them
//! - **Async Support**: built on tokio for async/await support
//!
//! ## Quick Start
//!
//! ```no_run
//! use pingback_client_rs::{ClientConfig, PingbackClient, PingbackReader};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::new().with_base_url("http://localhost:8080");
//!     let mut reader = PingbackReader::new(PingbackClient::with_config(config));
//!
//!     // Page load: one listing request, one table
//!     reader.load().await;
//!     println!("{} articles", reader.page().articles.len());
//!
//!     // User clicks the first row's Fetch button
//!     reader.fetch(0).await;
//! }
//! ```
//!
//! ## Using the client directly
//!
//! ```no_run
//! use pingback_client_rs::PingbackClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PingbackClient::new();
//!     for article in client.list_articles().await? {
//!         println!("{} ({} pingbacks)", article.title, article.pingback_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod doi;
pub mod error;
pub mod html;
mod jsonp;
pub mod models;
pub mod reader;
pub mod render;

// Re-export main types for convenience
pub use client::{OrderBy, PingbackClient};
pub use config::ClientConfig;
pub use doi::{Doi, DOI_SCHEME};
pub use error::{PingbackError, Result};
pub use html::HtmlRenderer;
pub use models::{ArticleSummary, Pingback};
pub use reader::{FetchState, Page, PingbackReader};
pub use render::{ArticleTable, Cell, DetailPanel};
