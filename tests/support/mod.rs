#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;

use qualiscout::context::ContextPayload;
use qualiscout::error::SynthesisError;
use qualiscout::literature::{LiteratureRecord, LiteratureSource, SearchOutcome};
use qualiscout::synthesis::ReportSynthesizer;
use qualiscout::CatalogStore;

/// Write a catalog CSV into a temp dir and hand back a store over it. The
/// temp dir must stay alive for the store to keep reading.
pub struct CatalogFixture {
    pub dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl CatalogFixture {
    pub fn write(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catalog.csv");
        let mut file = std::fs::File::create(&path).expect("create catalog file");
        file.write_all(contents.as_bytes())
            .expect("write catalog file");
        Self { dir, path }
    }

    pub fn store(&self) -> CatalogStore {
        CatalogStore::new(&self.path)
    }
}

/// Synthesizer stub that records every payload it receives and returns a
/// fixed report.
pub struct StubSynthesizer {
    pub report: String,
    pub payloads: RefCell<Vec<ContextPayload>>,
}

impl StubSynthesizer {
    pub fn returning(report: &str) -> Self {
        Self {
            report: report.to_string(),
            payloads: RefCell::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> usize {
        self.payloads.borrow().len()
    }
}

impl ReportSynthesizer for StubSynthesizer {
    fn synthesize(&self, payload: &ContextPayload) -> Result<String, SynthesisError> {
        self.payloads.borrow_mut().push(payload.clone());
        Ok(self.report.clone())
    }
}

/// Synthesizer stub that always fails, for propagation tests.
pub struct FailingSynthesizer;

impl ReportSynthesizer for FailingSynthesizer {
    fn synthesize(&self, _payload: &ContextPayload) -> Result<String, SynthesisError> {
        Err(SynthesisError::EmptyResponse)
    }
}

/// Literature stub returning a scripted outcome and recording the queries
/// it was asked to run.
pub struct StubLiterature {
    pub outcome: SearchOutcome,
    pub queries: RefCell<Vec<(String, usize)>>,
}

impl StubLiterature {
    pub fn returning(records: Vec<LiteratureRecord>) -> Self {
        Self {
            outcome: SearchOutcome {
                records,
                warning: None,
            },
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_outcome(outcome: SearchOutcome) -> Self {
        Self {
            outcome,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }
}

impl LiteratureSource for StubLiterature {
    fn search(&self, query: &str, max_results: usize) -> SearchOutcome {
        self.queries
            .borrow_mut()
            .push((query.to_string(), max_results));
        self.outcome.clone()
    }
}

pub fn record(title: &str, year: Option<i32>, doi: Option<&str>) -> LiteratureRecord {
    LiteratureRecord {
        title: title.to_string(),
        year,
        doi: doi.map(str::to_string),
        link: doi.map(LiteratureRecord::link_for),
    }
}
