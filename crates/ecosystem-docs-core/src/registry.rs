//! The section registry.
//!
//! [`SECTIONS`] is the single authoritative table of section metadata. The
//! navigation sidebar, the search engine, the view router's titles, and both
//! export adapters all read from it; nothing else defines section titles.
//!
//! The registry is `'static` and never mutated at runtime.

/// Identifier of the section shown when no other section is selected, and
/// the fallback for unknown identifiers.
pub const DEFAULT_SECTION: &str = "overview";

/// A searchable section descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchableRecord {
    /// Stable key into the view router's table.
    pub section_id: &'static str,
    /// Human-readable display title.
    pub title: &'static str,
    /// One-line summary shown in the sidebar and export table of contents.
    pub description: &'static str,
    /// Lowercase match terms. Never displayed.
    pub keywords: &'static [&'static str],
}

/// All sections, in navigation order.
pub static SECTIONS: [SearchableRecord; 6] = [
    SearchableRecord {
        section_id: "overview",
        title: "Ecosystem Overview",
        description: "What the four components are and how they fit together",
        keywords: &[
            "cortex",
            "ai",
            "ecosystem",
            "overview",
            "introduction",
            "platform",
            "vision",
        ],
    },
    SearchableRecord {
        section_id: "architecture",
        title: "System Architecture",
        description: "Layers, data flow, and the boundaries between components",
        keywords: &[
            "architecture",
            "layers",
            "data flow",
            "design",
            "topology",
            "boundaries",
        ],
    },
    SearchableRecord {
        section_id: "components",
        title: "Core Components",
        description: "Cortex, Forge, Sentinel, and Atlas in detail",
        keywords: &[
            "cortex",
            "forge",
            "sentinel",
            "atlas",
            "modules",
            "services",
        ],
    },
    SearchableRecord {
        section_id: "integration",
        title: "Integration Patterns",
        description: "Connecting the ecosystem to editors, CI, and existing tooling",
        keywords: &[
            "integration",
            "api",
            "plugins",
            "editor",
            "ci",
            "webhooks",
            "sdk",
        ],
    },
    SearchableRecord {
        section_id: "workflows",
        title: "Development Workflows",
        description: "Day-to-day loops: prototyping, reviewing, testing, shipping",
        keywords: &[
            "workflow",
            "development",
            "review",
            "testing",
            "deployment",
            "pipeline",
        ],
    },
    SearchableRecord {
        section_id: "roadmap",
        title: "Roadmap",
        description: "Planned milestones and open research directions",
        keywords: &[
            "roadmap",
            "milestones",
            "future",
            "timeline",
            "research",
            "plans",
        ],
    },
];

/// Returns the full registry.
pub fn sections() -> &'static [SearchableRecord] {
    &SECTIONS
}

/// Look up a record by its exact section identifier.
pub fn find(section_id: &str) -> Option<&'static SearchableRecord> {
    SECTIONS.iter().find(|r| r.section_id == section_id)
}

/// Look up a record, falling back to [`DEFAULT_SECTION`].
pub fn find_or_default(section_id: &str) -> &'static SearchableRecord {
    find(section_id).unwrap_or(&SECTIONS[0])
}
