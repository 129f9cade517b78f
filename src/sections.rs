//! Section listing (`ecodocs sections`).
//!
//! Prints the navigation table straight from the registry.

use anyhow::Result;
use ecosystem_docs_core::registry;
use serde::Serialize;

/// One row of the navigation table.
#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Core listing used by the CLI.
pub fn get_sections() -> Vec<SectionInfo> {
    registry::sections()
        .iter()
        .map(|r| SectionInfo {
            id: r.section_id,
            title: r.title,
            description: r.description,
        })
        .collect()
}

pub fn list_sections(json: bool) -> Result<()> {
    let sections = get_sections();
    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    println!("{:<14} {:<24} DESCRIPTION", "SECTION", "TITLE");
    for s in &sections {
        println!("{:<14} {:<24} {}", s.id, s.title, s.description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_match_registry() {
        let sections = get_sections();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].id, "overview");
        assert_eq!(sections[5].title, "Roadmap");
    }
}
