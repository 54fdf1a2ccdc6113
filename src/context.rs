//! Context Assembler: merges ranked journals, normalized literature records
//! and user parameters into the structured instruction payload handed to
//! the report synthesizer.
//!
//! `assemble` is a pure function. Given identical inputs it produces an
//! identical payload, which keeps this stage testable even though the
//! downstream synthesizer is non-deterministic.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::catalog::JournalRecord;
use crate::literature::LiteratureRecord;

/// Behavioral role description sent alongside every payload.
pub const SYNTHESIZER_ROLE: &str = "You are an extremely objective scientific \
publication consultant, specialized in the Brazilian Qualis system, journal \
selection and publication strategy.";

/// The static task contract: the numbered report sections plus the
/// anti-hallucination constraints. Independent of input by design.
pub const TASK_CONTRACT: &str = "\
TASK:
Write a STRUCTURED REPORT with the following sections:

1. Overview of the area and sub-topic
   - One short paragraph explaining the focus of the stated area/sub-topic.

2. Recommended journals for publication
   - List the best-ranked journals, each with:
     * journal name
     * quality tier (when available)
     * a brief description of its focus/scope
     * the kind of work it usually accepts (case reports, original articles, reviews, ...)
     * site or submission-system link when such a field exists in the data.

3. Submission template and author guidance
   - For each listed journal, say whether the data carries a template or
     author-instructions link, point the reader to where that information
     lives on the journal's site, and summarize the critical formatting
     points to watch (abstract size, word limits, IMRAD structure, citation
     style).

4. Most relevant literature on the topic
   - If literature records were supplied, pick at most 10 of them, list each
     with title, year and identifier/link, and comment in 1-2 sentences on
     its main focus.

5. Suggested keyword set
   - Based on the supplied literature and topic, suggest 8 to 15 keywords,
     with an English version in parentheses where it helps.

6. Current research landscape
   - In 2-4 paragraphs: the main active research lines, frequent gaps, and
     emerging trends in the area/sub-topic.

7. Proposed article outline
   - A numbered structure including a provisional title, a one-paragraph
     abstract suggestion, introduction topics, general and specific
     objectives, a methods/results/discussion skeleton, and closing
     implications.

IMPORTANT:
- Use clear, direct language.
- Use only the supplied data. Never invent identifiers or journal names.
- If a requested field is not present in the data, say so explicitly
  instead of fabricating it, and give generic guidance.
- Discuss at most 10 literature records even if more were supplied.";

/// The user's request as it enters the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub result_count: usize,
}

/// The assembled instruction: static contract plus serialized evidence.
/// Read-only input to the synthesis boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextPayload {
    pub role: &'static str,
    pub task: &'static str,
    pub query: QueryParameters,
    /// Ranked journals flattened to plain field maps, so the payload stays
    /// representable as plain structured data regardless of transport.
    pub journals: Vec<BTreeMap<String, String>>,
    pub literature: Vec<LiteratureRecord>,
}

impl ContextPayload {
    /// Render the payload as the user-facing prompt text. Deterministic:
    /// field maps iterate in key order and both lists keep their ranking.
    pub fn render(&self) -> String {
        let journals = json!(self.journals);
        let literature = json!(self.literature);
        format!(
            "Researcher context:\n\
             - Main area of the article: {area}\n\
             - Sub-topic / specific theme: {sub_topic}\n\
             - Keywords supplied by the researcher: {keywords}\n\n\
             Available journals (internal catalog data):\n{journals}\n\n\
             Literature found for the keywords (if any):\n{literature}\n\n\
             {task}\n",
            area = self.query.area,
            sub_topic = self.query.sub_topic.as_deref().unwrap_or("not provided"),
            keywords = self.query.keywords.as_deref().unwrap_or("not provided"),
            task = self.task,
        )
    }
}

/// Merge the evidence into a payload. Pure: no hidden state, no randomness.
pub fn assemble(
    query: &QueryParameters,
    ranked_journals: &[JournalRecord],
    literature: &[LiteratureRecord],
) -> ContextPayload {
    ContextPayload {
        role: SYNTHESIZER_ROLE,
        task: TASK_CONTRACT,
        query: query.clone(),
        journals: ranked_journals
            .iter()
            .map(|record| record.field_map().clone())
            .collect(),
        literature: literature.to_vec(),
    }
}
