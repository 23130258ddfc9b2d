use thiserror::Error;

use crate::http_client::HttpError;

/// Hard failures of the price flow.
///
/// Every variant aborts the whole snapshot: a partial price table could mix
/// staleness across instruments, which is unacceptable for money decisions.
/// Recoverable problems inside an entry (unparseable number, malformed
/// timestamp) are handled locally with safe defaults and never reach here.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("price upstream fetch failed: {0}")]
    Fetch(#[from] HttpError),

    #[error("price upstream returned status {status}")]
    Status { status: u16 },

    #[error("price upstream returned a malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("price document has no 'current' section")]
    MissingSection,

    #[error("price document is missing data for instrument '{key}'")]
    MissingField { key: String },
}

/// Per-source failures of the news flow.
///
/// These are isolated: one feed's error is logged and contributes zero
/// headlines, it never aborts the digest.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] HttpError),

    #[error("feed returned status {status}")]
    Status { status: u16 },

    #[error("feed document is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Failure of the external membership check.
///
/// The gate treats this as a denial (fail-closed); the message exists only
/// for logging.
#[derive(Debug, Error)]
#[error("membership check failed: {message}")]
pub struct MembershipError {
    message: String,
}

impl MembershipError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
