//! Literature Retriever: queries an external bibliographic search service
//! and normalizes its heterogeneous response shapes into uniform records.
//!
//! Retrieval is optional enrichment. Nothing in this module returns an
//! error: failures degrade to an empty result set plus a recorded warning
//! that the caller surfaces for display.

pub mod crossref;

pub use crossref::CrossrefClient;

use serde::{Deserialize, Serialize};

/// Placeholder used when a work carries no title at all.
pub const TITLE_PLACEHOLDER: &str = "No title";
/// Resolution URL template for persistent document identifiers.
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Normalized bibliographic search result. Created fresh per query, folded
/// into the context payload, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl LiteratureRecord {
    /// Canonical resolution link for a persistent identifier.
    pub fn link_for(doi: &str) -> String {
        format!("{DOI_RESOLVER}{doi}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalWarningReason {
    /// The search request could not be sent or timed out.
    RequestFailed,
    /// The endpoint answered with a non-success status.
    BadStatus,
    /// The response body could not be parsed.
    MalformedBody,
    /// A sub-topic was supplied but the catalog exposes no narrowing column.
    NarrowingUnavailable,
}

/// Non-fatal problem recorded while assembling evidence. Displayed to the
/// caller; never aborts the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalWarning {
    pub reason: RetrievalWarningReason,
    pub message: String,
}

impl RetrievalWarning {
    pub fn new(reason: RetrievalWarningReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Result of one literature search: the normalized records in service
/// order, plus at most one warning when the search degraded.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub records: Vec<LiteratureRecord>,
    pub warning: Option<RetrievalWarning>,
}

impl SearchOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn degraded(warning: RetrievalWarning) -> Self {
        Self {
            records: Vec::new(),
            warning: Some(warning),
        }
    }
}

/// Seam over the bibliographic search boundary. Implementations must never
/// fail: a broken backend yields an empty, warning-carrying outcome.
pub trait LiteratureSource {
    fn search(&self, query: &str, max_results: usize) -> SearchOutcome;
}
