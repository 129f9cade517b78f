//! Export the documentation as a single Markdown file.
//!
//! The document is built from the same [`Page`]s the view router renders on
//! screen, with the table of contents taken from the section registry, so
//! the export always matches what the browser shows. The file name is fixed
//! ([`MARKDOWN_FILENAME`]).

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use ecosystem_docs_core::registry;
use ecosystem_docs_core::{Block, Page, RenderContext, ViewRouter};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;

pub const MARKDOWN_FILENAME: &str = "ai-ecosystem-documentation.md";

pub const DOCUMENT_TITLE: &str = "AI Development Ecosystem Documentation";

/// GitHub-style heading anchor.
fn anchor(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

fn push_page(out: &mut String, page: &Page) {
    out.push_str(&format!("## {}\n\n", page.title));
    out.push_str(&format!("_{}_\n\n", page.subtitle));
    for block in &page.blocks {
        match block {
            Block::Heading(t) => out.push_str(&format!("### {}\n\n", t)),
            Block::Paragraph(t) => out.push_str(&format!("{}\n\n", t)),
            Block::Bullets(items) => {
                for item in items {
                    out.push_str(&format!("- {}\n", item));
                }
                out.push('\n');
            }
            Block::Card {
                title,
                tagline,
                points,
            } => {
                out.push_str(&format!("**{}** ({})\n\n", title, tagline));
                for point in points {
                    out.push_str(&format!("- {}\n", point));
                }
                out.push('\n');
            }
            Block::Preformatted(t) => out.push_str(&format!("```text\n{}\n```\n\n", t)),
        }
    }
}

/// Build the Markdown document for `pages`.
pub fn markdown_document(pages: &[Page], generated: NaiveDate) -> String {
    let mut out = format!("# {}\n\n", DOCUMENT_TITLE);
    out.push_str(&format!("_Generated {}_\n\n", generated.format("%Y-%m-%d")));

    out.push_str("## Contents\n\n");
    for (i, page) in pages.iter().enumerate() {
        let description = registry::find(page.section_id)
            .map(|r| r.description)
            .unwrap_or(page.subtitle);
        out.push_str(&format!(
            "{}. [{}](#{}) — {}\n",
            i + 1,
            page.title,
            anchor(page.title),
            description
        ));
    }
    out.push('\n');

    for page in pages {
        out.push_str("---\n\n");
        push_page(&mut out, page);
    }
    out
}

/// Every section, rendered for export.
pub fn export_pages(router: &ViewRouter) -> Vec<Page> {
    router.render_all(&RenderContext::default())
}

/// Where the Markdown export goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownTarget {
    Stdout,
    Dir(PathBuf),
}

impl MarkdownTarget {
    /// `-` means stdout; anything else is a directory.
    pub fn from_arg(arg: Option<&Path>, config: &Config) -> Self {
        match arg {
            Some(p) if p == Path::new("-") => MarkdownTarget::Stdout,
            Some(p) => MarkdownTarget::Dir(p.to_path_buf()),
            None => MarkdownTarget::Dir(config.export.output_dir.clone()),
        }
    }
}

/// Write the Markdown export. Returns the written path, if any.
pub fn run_markdown_export(target: &MarkdownTarget) -> Result<Option<PathBuf>> {
    let pages = export_pages(&ViewRouter::new());
    let markdown = markdown_document(&pages, Utc::now().date_naive());

    match target {
        MarkdownTarget::Dir(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            let path = dir.join(MARKDOWN_FILENAME);
            std::fs::write(&path, &markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(sections = pages.len(), path = %path.display(), "markdown exported");
            eprintln!("Exported {} sections to {}", pages.len(), path.display());
            Ok(Some(path))
        }
        MarkdownTarget::Stdout => {
            print!("{}", markdown);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

    fn doc() -> String {
        let pages = export_pages(&ViewRouter::new());
        markdown_document(&pages, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
    }

    fn h2_titles(md: &str) -> Vec<String> {
        let mut titles = Vec::new();
        let mut in_h2 = false;
        let mut current = String::new();
        for event in Parser::new(md) {
            match event {
                Event::Start(Tag::Heading {
                    level: HeadingLevel::H2,
                    ..
                }) => in_h2 = true,
                Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                    titles.push(std::mem::take(&mut current));
                    in_h2 = false;
                }
                Event::Text(t) if in_h2 => current.push_str(&t),
                _ => {}
            }
        }
        titles
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("Ecosystem Overview"), "ecosystem-overview");
        assert_eq!(anchor("Roadmap"), "roadmap");
    }

    #[test]
    fn test_sections_follow_registry() {
        let md = doc();
        let mut expected = vec!["Contents".to_string()];
        expected.extend(registry::sections().iter().map(|r| r.title.to_string()));
        assert_eq!(h2_titles(&md), expected);
    }

    #[test]
    fn test_export_carries_on_screen_prose() {
        let md = doc();
        assert!(md.starts_with("# AI Development Ecosystem Documentation\n"));
        assert!(md.contains("_Generated 2026-01-02_"));
        assert!(!md.contains("Content available in the interactive documentation"));
        for page in export_pages(&ViewRouter::new()) {
            for fragment in page.text_fragments() {
                assert!(md.contains(fragment), "missing {:?}", fragment);
            }
        }
    }

    #[test]
    fn test_contents_lists_descriptions() {
        let md = doc();
        assert!(md.contains(
            "1. [Ecosystem Overview](#ecosystem-overview) — What the four components are and how they fit together"
        ));
    }

    #[test]
    fn test_target_from_arg() {
        let cfg = Config::minimal();
        assert_eq!(
            MarkdownTarget::from_arg(Some(Path::new("-")), &cfg),
            MarkdownTarget::Stdout
        );
        assert_eq!(
            MarkdownTarget::from_arg(None, &cfg),
            MarkdownTarget::Dir(PathBuf::from("."))
        );
    }

    #[test]
    fn test_writes_fixed_filename() {
        let dir = tempfile::tempdir().unwrap();
        let target = MarkdownTarget::Dir(dir.path().join("out"));
        let path = run_markdown_export(&target).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), MARKDOWN_FILENAME);
        assert!(std::fs::read_to_string(path).unwrap().contains("## Roadmap"));
    }
}
