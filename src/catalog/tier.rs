/// Ordered quality-tier vocabulary, best to worst. Ranking is by position
/// in this table, never by string comparison.
pub const TIER_ORDER: [&str; 9] = ["A1", "A2", "A3", "A4", "B1", "B2", "B3", "B4", "C"];

/// Discrete journal quality tier. `Unrecognized` covers any value outside
/// the fixed vocabulary; it sorts after every known tier and never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityTier {
    Known(&'static str),
    Unrecognized(String),
}

impl QualityTier {
    /// Parse loosely: surrounding whitespace is ignored, matching is
    /// case-insensitive against the fixed vocabulary.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        TIER_ORDER
            .iter()
            .find(|known| known.eq_ignore_ascii_case(trimmed))
            .map(|known| QualityTier::Known(known))
            .unwrap_or_else(|| QualityTier::Unrecognized(trimmed.to_string()))
    }

    /// Position index in the tier table. Unrecognized values get a sentinel
    /// rank greater than every known tier.
    pub fn rank(&self) -> usize {
        match self {
            QualityTier::Known(label) => TIER_ORDER
                .iter()
                .position(|known| known == label)
                .unwrap_or(TIER_ORDER.len()),
            QualityTier::Unrecognized(_) => TIER_ORDER.len(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            QualityTier::Known(label) => label,
            QualityTier::Unrecognized(raw) => raw,
        }
    }
}

/// Rank for an optional raw tier string, used when ordering catalog rows.
/// Rows without a tier sort together after every tiered row.
pub fn tier_rank(raw: Option<&str>) -> usize {
    match raw {
        Some(value) => QualityTier::parse(value).rank(),
        None => TIER_ORDER.len() + 1,
    }
}
