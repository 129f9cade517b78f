//! Keyword search over the section registry.
//!
//! A linear scan over a handful of static records. There is no index; the
//! registry is small and immutable.
//!
//! # Scoring
//!
//! 1. Ignore queries whose trimmed length is below `min_query_len`.
//! 2. Lowercase the query and split on whitespace into a set of terms.
//! 3. Per record and term: `+10` if the lowercased title contains the term,
//!    `+5` if any keyword contains it.
//! 4. Drop zero scores.
//! 5. Stable sort by score (desc), so ties keep registry order.
//! 6. Truncate to `max_results`.

use serde::Serialize;

use crate::registry::SearchableRecord;

/// Points for a term found in the title.
pub const TITLE_WEIGHT: u32 = 10;
/// Points for a term found in any keyword.
pub const KEYWORD_WEIGHT: u32 = 5;

/// Search tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Queries shorter than this (after trimming, in characters) return nothing.
    pub min_query_len: usize,
    /// Maximum results to return.
    pub max_results: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            max_results: 10,
        }
    }
}

/// A scored registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub section_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub keywords: &'static [&'static str],
    pub score: u32,
    pub snippet: String,
}

impl SearchResult {
    fn new(record: &SearchableRecord, score: u32) -> Self {
        Self {
            section_id: record.section_id,
            title: record.title,
            description: record.description,
            keywords: record.keywords,
            score,
            snippet: format!("Found in {} section", record.title),
        }
    }
}

/// True when `query` is long enough to trigger a search.
pub fn is_active_query(query: &str, params: &SearchParams) -> bool {
    query.trim().chars().count() >= params.min_query_len
}

/// Split a query into distinct lowercase terms, first occurrence first.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.to_lowercase().split_whitespace() {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// Score one record against a set of terms.
pub fn score_record(record: &SearchableRecord, terms: &[String]) -> u32 {
    let title = record.title.to_lowercase();
    terms
        .iter()
        .map(|term| {
            let mut score = 0;
            if title.contains(term.as_str()) {
                score += TITLE_WEIGHT;
            }
            if record.keywords.iter().any(|kw| kw.contains(term.as_str())) {
                score += KEYWORD_WEIGHT;
            }
            score
        })
        .sum()
}

/// Search with the default parameters.
pub fn search(query: &str, records: &[SearchableRecord]) -> Vec<SearchResult> {
    search_with(query, records, &SearchParams::default())
}

/// Search `records` for `query`. Never fails; bad input yields no results.
pub fn search_with(
    query: &str,
    records: &[SearchableRecord],
    params: &SearchParams,
) -> Vec<SearchResult> {
    if !is_active_query(query, params) {
        return Vec::new();
    }

    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = records
        .iter()
        .filter_map(|record| {
            let score = score_record(record, &terms);
            (score > 0).then(|| SearchResult::new(record, score))
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(params.max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SECTIONS;

    fn record(id: &'static str, title: &'static str, kws: &'static [&'static str]) -> SearchableRecord {
        SearchableRecord {
            section_id: id,
            title,
            description: "",
            keywords: kws,
        }
    }

    #[test]
    fn test_short_queries_return_nothing() {
        for q in ["", " ", "te", "  ai  ", "\tab\n", "é"] {
            assert!(search(q, &SECTIONS).is_empty(), "query {:?}", q);
        }
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        let records = [record("a", "Ééé", &[])];
        // three characters, six bytes
        assert_eq!(search("ééé", &records).len(), 1);
        assert!(search("éé", &records).is_empty());
    }

    #[test]
    fn test_tokenize_dedupes_and_lowercases() {
        assert_eq!(tokenize("  Cortex AI cortex\tai "), vec!["cortex", "ai"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_score_title_and_keyword() {
        let r = record("a", "System Architecture", &["design", "architecture"]);
        assert_eq!(score_record(&r, &tokenize("architecture")), 15);
        assert_eq!(score_record(&r, &tokenize("sign")), 5);
        assert_eq!(score_record(&r, &tokenize("system")), 10);
        assert_eq!(score_record(&r, &tokenize("nothing")), 0);
    }

    #[test]
    fn test_title_match_on_every_term_scores_at_least_ten_per_term() {
        for r in &SECTIONS {
            let query = r.title.to_lowercase();
            let terms = tokenize(&query);
            if query.trim().chars().count() < 3 {
                continue;
            }
            let results = search(&query, &SECTIONS);
            let hit = results
                .iter()
                .find(|res| res.section_id == r.section_id)
                .unwrap_or_else(|| panic!("{} missing for {:?}", r.section_id, query));
            assert!(hit.score >= TITLE_WEIGHT * terms.len() as u32);
        }
    }

    #[test]
    fn test_sorted_and_stable() {
        let records = [
            record("a", "Alpha", &["shared"]),
            record("b", "Beta shared", &[]),
            record("c", "Gamma", &["shared"]),
            record("d", "Delta", &["shared"]),
        ];
        let results = search("shared", &records);
        let ids: Vec<&str> = results.iter().map(|r| r.section_id).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_truncates_to_max_results() {
        let records: Vec<SearchableRecord> = (0..25)
            .map(|_| record("x", "Common Title", &["common"]))
            .collect();
        assert_eq!(search("common", &records).len(), 10);

        let params = SearchParams {
            min_query_len: 3,
            max_results: 4,
        };
        assert_eq!(search_with("common", &records, &params).len(), 4);
    }

    #[test]
    fn test_cortex_ai_ranks_overview_first() {
        let results = search("cortex ai", &SECTIONS);
        assert_eq!(results[0].section_id, "overview");
        assert!(results[0].score >= 10);
        assert_eq!(results[0].snippet, "Found in Ecosystem Overview section");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(search("xyz123", &SECTIONS).is_empty());
    }

    #[test]
    fn test_result_json_omits_keywords() {
        let results = search("roadmap", &SECTIONS);
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["section_id"], "roadmap");
        assert_eq!(json["score"], 15);
        assert!(json.get("keywords").is_none());
    }
}
