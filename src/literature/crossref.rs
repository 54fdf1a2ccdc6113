//! Crossref works-search client.
//!
//! One GET per query against the public works endpoint, bounded by an
//! explicit timeout. The service is asked to sort by relevance and result
//! order is preserved as returned. Every per-item field extraction is
//! best-effort and independent: a work with a broken date still contributes
//! its title and identifier.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;

use super::{
    LiteratureRecord, LiteratureSource, RetrievalWarning, RetrievalWarningReason, SearchOutcome,
    TITLE_PLACEHOLDER,
};
use crate::config::LiteratureSettings;

/// Date fields probed for a publication year, in priority order. The first
/// field whose `date-parts` leading component parses wins.
const DATE_FIELDS: [&str; 3] = ["published-print", "published-online", "issued"];

pub struct CrossrefClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl CrossrefClient {
    pub fn new(settings: &LiteratureSettings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build literature search HTTP client")?;
        Ok(Self {
            endpoint: settings.endpoint.clone(),
            client,
        })
    }

    fn fetch_items(&self, query: &str, rows: usize) -> Result<Vec<Value>, RetrievalWarning> {
        let rows = rows.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("rows", rows.as_str()),
                ("sort", "relevance"),
            ])
            .send()
            .map_err(|err| {
                RetrievalWarning::new(
                    RetrievalWarningReason::RequestFailed,
                    format!("Literature search request failed: {err}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalWarning::new(
                RetrievalWarningReason::BadStatus,
                format!("Literature search endpoint returned status {status}"),
            ));
        }

        let body: Value = response.json().map_err(|err| {
            RetrievalWarning::new(
                RetrievalWarningReason::MalformedBody,
                format!("Literature search response could not be parsed: {err}"),
            )
        })?;

        // A well-formed body without message.items means zero results.
        let items = body
            .get("message")
            .and_then(|message| message.get("items"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(items)
    }
}

impl LiteratureSource for CrossrefClient {
    fn search(&self, query: &str, max_results: usize) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::empty();
        }
        match self.fetch_items(query.trim(), max_results) {
            Ok(items) => {
                debug!("literature search returned {} works", items.len());
                SearchOutcome {
                    records: items.iter().map(normalize_work).collect(),
                    warning: None,
                }
            }
            Err(warning) => {
                warn!("literature search degraded: {}", warning.message);
                SearchOutcome::degraded(warning)
            }
        }
    }
}

/// Fold one raw work item into a [`LiteratureRecord`].
pub(crate) fn normalize_work(item: &Value) -> LiteratureRecord {
    let title = item
        .get("title")
        .and_then(Value::as_array)
        .and_then(|titles| titles.first())
        .and_then(Value::as_str)
        .unwrap_or(TITLE_PLACEHOLDER)
        .to_string();
    let doi = item
        .get("DOI")
        .and_then(Value::as_str)
        .map(str::to_string);
    let link = doi.as_deref().map(LiteratureRecord::link_for);
    LiteratureRecord {
        title,
        year: extract_year(item),
        doi,
        link,
    }
}

/// Try each known date field in priority order; first successful parse wins.
fn extract_year(item: &Value) -> Option<i32> {
    DATE_FIELDS
        .iter()
        .filter_map(|field| item.get(field))
        .find_map(year_from_date_field)
}

fn year_from_date_field(field: &Value) -> Option<i32> {
    field
        .get("date-parts")?
        .get(0)?
        .get(0)?
        .as_i64()
        .map(|year| year as i32)
}
