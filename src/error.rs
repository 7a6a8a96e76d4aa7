use thiserror::Error;

/// Error types for pingback reader operations
#[derive(Error, Debug)]
pub enum PingbackError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic API error
    #[error("API error: {message}")]
    ApiError { message: String },
}

impl PingbackError {
    /// Status text shown to the user when a request fails.
    ///
    /// The reader page collapses every failure kind to one blocking
    /// notification, so all variants funnel through `Display`.
    pub fn status_text(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, PingbackError>;
