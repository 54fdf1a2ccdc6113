//! Ranking Filter: selects catalog rows by topical match and orders them by
//! quality tier.

use crate::catalog::{tier_rank, Catalog, JournalRecord};

/// Filter the catalog by area and, when supplied, by sub-topic.
///
/// Matching is substring-based and case-insensitive on the `area` field.
/// The sub-topic narrows the area match against the catalog's resolved
/// narrowing column; when the catalog exposes none, the sub-topic has no
/// effect (the caller is told through [`narrowing_available`]). Rows are
/// ordered best-tier-first when the catalog carries a tier column;
/// otherwise original catalog order is preserved. No match is an empty
/// result, never an error.
pub fn filter_journals(
    catalog: &Catalog,
    area: &str,
    sub_topic: Option<&str>,
) -> Vec<JournalRecord> {
    let area_needle = area.to_lowercase();
    let narrow_needle = sub_topic
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_lowercase)
        .filter(|_| catalog.narrow_column().is_some());

    let mut matched: Vec<JournalRecord> = catalog
        .records()
        .iter()
        .filter(|record| record.area.to_lowercase().contains(&area_needle))
        .filter(|record| match &narrow_needle {
            Some(needle) => record
                .narrow
                .as_deref()
                .is_some_and(|narrow| narrow.to_lowercase().contains(needle)),
            None => true,
        })
        .cloned()
        .collect();

    if catalog.has_tier_column() {
        // Stable sort: rows sharing a tier keep their catalog order.
        matched.sort_by_key(|record| tier_rank(record.tier.as_deref()));
    }
    matched
}

/// Whether sub-topic narrowing can take effect for this catalog.
pub fn narrowing_available(catalog: &Catalog) -> bool {
    catalog.narrow_column().is_some()
}
