//! Article identifiers and DOI scheme normalization
//!
//! DOIs arrive from the list endpoint optionally prefixed with the
//! `info:doi/` URI scheme marker. The detail endpoint addresses articles by
//! the bare identifier, so the scheme is stripped before the DOI is used as
//! a URL path segment. Display and table rendering keep the raw form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// URI scheme marker that may prefix a DOI on the wire.
pub const DOI_SCHEME: &str = "info:doi/";

/// An article DOI as received from the server.
///
/// The raw form (scheme prefix included, if any) is kept verbatim;
/// [`Doi::as_identifier`] yields the form used in request paths.
///
/// # Examples
///
/// ```
/// use pingback_client_rs::Doi;
///
/// let doi = Doi::new("info:doi/10.1371/journal.pone.0040000");
/// assert_eq!(doi.as_identifier(), "10.1371/journal.pone.0040000");
///
/// // Already bare: left unchanged
/// let doi = Doi::new("10.1371/journal.pone.0040000");
/// assert_eq!(doi.as_identifier(), "10.1371/journal.pone.0040000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doi(String);

impl Doi {
    /// Wrap a raw DOI string without validating it.
    ///
    /// The server owns DOI syntax; the client only understands the scheme
    /// prefix.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The DOI exactly as received, scheme marker and all.
    pub fn as_raw(&self) -> &str {
        &self.0
    }

    /// The DOI without the `info:doi/` scheme marker.
    ///
    /// Strips the prefix if present, otherwise returns the raw form
    /// unchanged. Idempotent: the stripped form no longer carries the
    /// prefix, so normalizing it again is the identity.
    pub fn as_identifier(&self) -> &str {
        self.0.strip_prefix(DOI_SCHEME).unwrap_or(&self.0)
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Doi {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Doi {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
