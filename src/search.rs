//! `ecodocs search`: run the search engine from the command line.

use anyhow::Result;
use ecosystem_docs_core::registry;
use ecosystem_docs_core::search::{is_active_query, search_with, SearchResult};
use tracing::debug;

use crate::config::Config;
use crate::render::TerminalRenderer;

/// Core search behind `ecodocs search`, with limits from the config.
pub fn search_sections(config: &Config, query: &str) -> Vec<SearchResult> {
    let params = config.search_params();
    let results = search_with(query, registry::sections(), &params);
    debug!(query, hits = results.len(), "search");
    results
}

pub fn run_search(config: &Config, renderer: &TerminalRenderer, query: &str, json: bool) -> Result<()> {
    let results = search_sections(config, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if !is_active_query(query, &config.search_params()) {
        println!(
            "Query too short: type at least {} characters.",
            config.search.min_query_len
        );
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    print!("{}", renderer.render_results(query, &results));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respects_configured_limit() {
        let mut config = Config::minimal();
        config.search.max_results = 1;
        let results = search_sections(&config, "cortex");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].section_id, "overview");
    }

    #[test]
    fn test_configured_min_length() {
        let mut config = Config::minimal();
        config.search.min_query_len = 8;
        assert!(search_sections(&config, "roadmap").is_empty());
        assert_eq!(search_sections(&config, "roadmap ").len(), 0);
        config.search.min_query_len = 7;
        assert_eq!(search_sections(&config, "roadmap").len(), 1);
    }
}
