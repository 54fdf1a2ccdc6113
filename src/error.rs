use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems with the journal catalog. A missing or corrupt catalog is
/// a configuration problem, not a transient fault, so there is no retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Journal catalog not found at {path}")]
    Missing { path: PathBuf },
    #[error("Failed to read journal catalog {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Journal catalog {path} is missing the required '{column}' column")]
    MissingColumn { path: PathBuf, column: String },
}

/// Fatal-to-this-request failures from the report synthesis boundary.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Report synthesis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Report synthesis endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Report synthesis response contained no message content")]
    EmptyResponse,
    #[error("No API key configured for report synthesis (set {env_var})")]
    MissingApiKey { env_var: &'static str },
}

/// Top-level pipeline failure. Catalog and synthesis errors propagate to the
/// caller unmodified; literature retrieval never surfaces here (it degrades
/// to an empty result set plus a recorded warning).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Query rejected: 'area' must be non-empty")]
    InvalidQuery,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
