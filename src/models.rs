use serde::{Deserialize, Serialize};

use crate::doi::Doi;

/// One article in the pingback summary listing
///
/// Never mutated after deserialization; each render is a one-shot
/// transformation from this data to table rows.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    /// Article DOI, possibly carrying the `info:doi/` scheme marker
    pub doi: Doi,
    /// Public URL of the article landing page
    pub article_url: String,
    /// Article title
    pub title: String,
    /// Number of pingbacks recorded against the article
    pub pingback_count: u32,
    /// Creation time of the newest pingback, as reported by the server
    pub most_recent_pingback: String,
}

/// A recorded inbound reference event pointing at an article
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Pingback {
    /// Title of the referring page
    pub title: String,
    /// URL of the referring page
    pub url: String,
    /// Creation timestamp, as reported by the server
    pub created: String,
}
