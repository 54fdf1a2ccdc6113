//! Catalog Store: loads the static journal catalog and caches it for the
//! process lifetime.
//!
//! The backing file is a CSV whose column names are trimmed and lower-cased
//! on ingestion, so downstream lookups are case-insensitive and
//! whitespace-tolerant. The catalog is write-once, read-many: there is no
//! invalidation rule, and a missing or malformed file is fatal.

mod tier;

pub use tier::{tier_rank, QualityTier, TIER_ORDER};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::error::CatalogError;

/// Column that must exist in every catalog.
pub const AREA_COLUMN: &str = "area";
/// Column holding the quality tier, when the catalog carries one.
pub const TIER_COLUMN: &str = "estrato_qualis";
/// Candidate columns for sub-topic narrowing, checked in order. The first
/// one present in the header wins; resolved once at load time.
pub const NARROW_COLUMNS: [&str; 2] = ["escopo", "subarea"];

/// One row of the journal catalog.
///
/// `fields` keeps every column of the source row under its normalized name,
/// so descriptive columns (journal name, site link, submission template
/// link, ...) pass through opaquely. `area`, `narrow` and `tier` are
/// convenience views resolved at load time.
#[derive(Debug, Clone)]
pub struct JournalRecord {
    pub area: String,
    /// Value of the resolved narrowing column, when the catalog has one and
    /// the cell is non-empty.
    pub narrow: Option<String>,
    /// Raw quality-tier value, when present.
    pub tier: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl JournalRecord {
    /// Plain field map for payload embedding.
    pub fn field_map(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// The loaded catalog plus the capabilities resolved from its header.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<JournalRecord>,
    /// Name of the narrowing column the catalog exposes, if any.
    narrow_column: Option<String>,
    /// Whether the catalog carries a quality-tier column at all.
    has_tier_column: bool,
}

impl Catalog {
    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    /// Which of the candidate narrowing columns this catalog exposes.
    pub fn narrow_column(&self) -> Option<&str> {
        self.narrow_column.as_deref()
    }

    pub fn has_tier_column(&self) -> bool {
        self.has_tier_column
    }

    /// Distinct non-empty area values, sorted. Callers use this to
    /// enumerate valid areas for selection.
    pub fn distinct_areas(&self) -> Vec<String> {
        let mut areas: Vec<String> = self
            .records
            .iter()
            .map(|record| record.area.trim().to_string())
            .filter(|area| !area.is_empty())
            .collect();
        areas.sort();
        areas.dedup();
        areas
    }
}

/// Owns the catalog file location and the process-lifetime cache. The cache
/// fills lazily on the first successful load; a failed load is not cached,
/// so a fixed file is picked up on the next call.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    cache: OnceCell<Catalog>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, idempotently. Subsequent calls return the cached
    /// table without touching the filesystem.
    pub fn load(&self) -> Result<&Catalog, CatalogError> {
        self.cache.get_or_try_init(|| read_catalog(&self.path))
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::Missing {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path).map_err(|source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    if !headers.iter().any(|name| name == AREA_COLUMN) {
        return Err(CatalogError::MissingColumn {
            path: path.to_path_buf(),
            column: AREA_COLUMN.to_string(),
        });
    }
    let narrow_column = NARROW_COLUMNS
        .iter()
        .find(|candidate| headers.iter().any(|name| name == *candidate))
        .map(|candidate| candidate.to_string());
    let has_tier_column = headers.iter().any(|name| name == TIER_COLUMN);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let fields: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(row.iter().map(|cell| cell.trim().to_string()))
            .collect();
        let area = fields.get(AREA_COLUMN).cloned().unwrap_or_default();
        let narrow = narrow_column
            .as_deref()
            .and_then(|column| fields.get(column))
            .filter(|value| !value.is_empty())
            .cloned();
        let tier = fields
            .get(TIER_COLUMN)
            .filter(|value| !value.is_empty())
            .cloned();
        records.push(JournalRecord {
            area,
            narrow,
            tier,
            fields,
        });
    }

    Ok(Catalog {
        records,
        narrow_column,
        has_tier_column,
    })
}
