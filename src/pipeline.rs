//! End-to-end recommendation pipeline: catalog filter, optional literature
//! retrieval, context assembly, report synthesis.
//!
//! One invocation handles one user query, sequentially. Catalog and
//! synthesis failures abort the request; literature failures degrade to an
//! empty evidence set plus a recorded warning.

use log::debug;

use crate::catalog::{CatalogStore, JournalRecord};
use crate::config::LiteratureSettings;
use crate::context::{assemble, QueryParameters};
use crate::error::PipelineError;
use crate::literature::{
    LiteratureRecord, LiteratureSource, RetrievalWarning, RetrievalWarningReason,
};
use crate::ranking::{filter_journals, narrowing_available};
use crate::synthesis::ReportSynthesizer;

/// One user query, as received from the consumer-facing surface.
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    pub area: String,
    pub sub_topic: Option<String>,
    pub keywords: Option<String>,
    /// Requested literature result count; clamped to the configured bounds,
    /// defaulted when absent.
    pub result_count: Option<usize>,
}

/// Everything the caller needs to present: the ranked journals, the
/// literature evidence, the synthesized report, and any non-fatal warnings
/// collected along the way.
#[derive(Debug)]
pub struct RecommendationOutcome {
    pub journals: Vec<JournalRecord>,
    pub literature: Vec<LiteratureRecord>,
    pub report: String,
    pub warnings: Vec<RetrievalWarning>,
}

/// Run one recommendation query end to end.
///
/// The synthesizer is invoked even when no journal matches; the static task
/// contract makes it flag the missing data instead of fabricating entries.
pub fn run_recommendation(
    store: &CatalogStore,
    literature_source: &dyn LiteratureSource,
    synthesizer: &dyn ReportSynthesizer,
    settings: &LiteratureSettings,
    request: &RecommendationRequest,
) -> Result<RecommendationOutcome, PipelineError> {
    let area = request.area.trim();
    if area.is_empty() {
        return Err(PipelineError::InvalidQuery);
    }
    let sub_topic = normalize_optional(request.sub_topic.as_deref());
    let keywords = normalize_optional(request.keywords.as_deref());
    let result_count =
        settings.clamp_result_count(request.result_count.unwrap_or(settings.default_results));

    let catalog = store.load()?;
    let journals = filter_journals(catalog, area, sub_topic.as_deref());

    let mut warnings = Vec::new();
    if sub_topic.is_some() && !narrowing_available(catalog) {
        warnings.push(RetrievalWarning::new(
            RetrievalWarningReason::NarrowingUnavailable,
            "The catalog has no scope/subarea column; the sub-topic did not narrow the match",
        ));
    }
    if journals.is_empty() {
        // Informational, not an error: the synthesizer still runs and must
        // flag the empty journal list per the task contract.
        debug!("no journals matched area '{area}'");
    }

    let literature = match &keywords {
        Some(keywords) => {
            let query = build_literature_query(area, sub_topic.as_deref(), keywords);
            let outcome = literature_source.search(&query, result_count);
            warnings.extend(outcome.warning);
            outcome.records
        }
        None => Vec::new(),
    };

    let query = QueryParameters {
        area: area.to_string(),
        sub_topic,
        keywords,
        result_count,
    };
    let payload = assemble(&query, &journals, &literature);
    let report = synthesizer.synthesize(&payload)?;

    Ok(RecommendationOutcome {
        journals,
        literature,
        report,
        warnings,
    })
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Free-text query for the literature boundary: area, sub-topic and
/// keywords concatenated with single spaces.
fn build_literature_query(area: &str, sub_topic: Option<&str>, keywords: &str) -> String {
    match sub_topic {
        Some(sub_topic) => format!("{area} {sub_topic} {keywords}"),
        None => format!("{area} {keywords}"),
    }
}
