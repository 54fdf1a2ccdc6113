pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod literature;
pub mod pipeline;
pub mod ranking;
pub mod synthesis;

// Re-export commonly used types for convenience.
pub use catalog::{Catalog, CatalogStore, JournalRecord, QualityTier};
pub use config::AppConfig;
pub use context::{assemble, ContextPayload, QueryParameters};
pub use error::{CatalogError, PipelineError, SynthesisError};
pub use literature::{
    CrossrefClient, LiteratureRecord, LiteratureSource, RetrievalWarning, RetrievalWarningReason,
    SearchOutcome,
};
pub use pipeline::{run_recommendation, RecommendationOutcome, RecommendationRequest};
pub use ranking::filter_journals;
pub use synthesis::{ChatSynthesizer, ReportSynthesizer};
