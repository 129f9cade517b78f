//! Terminal rendering.
//!
//! Turns core [`Page`]s, search results, and the navigation table into text
//! for stdout. Colors come from the active theme's [`Palette`]; with color
//! disabled the output is plain text and safe to pipe.

use ecosystem_docs_core::registry;
use ecosystem_docs_core::{Block, Page, Palette, Screen, SearchResult};

/// Renders to a fixed-width terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    palette: &'static Palette,
    color: bool,
    width: usize,
}

impl TerminalRenderer {
    pub fn new(palette: &'static Palette, color: bool, width: usize) -> Self {
        Self {
            palette,
            color,
            width,
        }
    }

    fn paint(&self, sgr: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", sgr, text)
        } else {
            text.to_string()
        }
    }

    pub fn render_screen(&self, screen: &Screen) -> String {
        match screen {
            Screen::Content(page) => self.render_page(page),
            Screen::SearchResults { query, results } => self.render_results(query, results),
        }
    }

    pub fn render_page(&self, page: &Page) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(self.palette.ansi_heading, page.title));
        out.push('\n');
        out.push_str(&self.paint(self.palette.ansi_muted, page.subtitle));
        out.push_str("\n\n");

        for block in &page.blocks {
            match block {
                Block::Heading(text) => {
                    out.push_str(&self.paint(self.palette.ansi_accent, text));
                    out.push('\n');
                }
                Block::Paragraph(text) => {
                    for line in wrap(text, self.width) {
                        out.push_str(&self.paint(self.palette.ansi_text, &line));
                        out.push('\n');
                    }
                }
                Block::Bullets(items) => {
                    for item in items {
                        self.push_bullet(&mut out, "  • ", item);
                    }
                }
                Block::Card {
                    title,
                    tagline,
                    points,
                } => {
                    let head = format!("▸ {} — {}", title, tagline);
                    out.push_str(&self.paint(self.palette.ansi_heading, &head));
                    out.push('\n');
                    for point in points {
                        self.push_bullet(&mut out, "    - ", point);
                    }
                }
                Block::Preformatted(text) => {
                    for line in text.lines() {
                        out.push_str(&self.paint(self.palette.ansi_muted, line));
                        out.push('\n');
                    }
                }
            }
            out.push('\n');
        }
        out
    }

    fn push_bullet(&self, out: &mut String, marker: &str, text: &str) {
        let indent = " ".repeat(marker.chars().count());
        let avail = self.width.saturating_sub(indent.len()).max(10);
        for (i, line) in wrap(text, avail).into_iter().enumerate() {
            let prefix = if i == 0 { marker } else { indent.as_str() };
            out.push_str(prefix);
            out.push_str(&self.paint(self.palette.ansi_text, &line));
            out.push('\n');
        }
    }

    /// The search results view. An empty list renders the "no results" state.
    pub fn render_results(&self, query: &str, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return format!("No results for \"{}\".\n", query.trim());
        }
        let mut out = format!(
            "{} result{} for \"{}\"\n\n",
            results.len(),
            if results.len() == 1 { "" } else { "s" },
            query.trim()
        );
        for (i, r) in results.iter().enumerate() {
            let line = format!("{}. [{}] {}", i + 1, r.score, r.title);
            out.push_str(&self.paint(self.palette.ansi_heading, &line));
            out.push('\n');
            out.push_str(&format!("    {}\n", self.paint(self.palette.ansi_muted, &r.snippet)));
            out.push_str(&format!("    section: {}\n", r.section_id));
        }
        out
    }

    /// The navigation sidebar, marking `active` with an arrow.
    pub fn render_sidebar(&self, active: &str) -> String {
        let mut out = String::new();
        for r in registry::sections() {
            let marker = if r.section_id == active { "➜" } else { " " };
            let line = format!("{} {:<14} {}", marker, r.section_id, r.title);
            if r.section_id == active {
                out.push_str(&self.paint(self.palette.ansi_accent, &line));
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }
        out
    }
}

/// Greedy word wrap. Words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosystem_docs_core::search::search;
    use ecosystem_docs_core::theme::{DARK_PALETTE, LIGHT_PALETTE};
    use ecosystem_docs_core::{RenderContext, ViewRouter, SECTIONS};

    fn plain() -> TerminalRenderer {
        TerminalRenderer::new(&DARK_PALETTE, false, 60)
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six seven", 10);
        assert_eq!(lines, vec!["one two", "three four", "five six", "seven"]);
        for l in &lines {
            assert!(l.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("a supercalifragilistic b", 5), vec!["a", "supercalifragilistic", "b"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_plain_page_has_no_escapes() {
        let page = ViewRouter::new().render("overview", &RenderContext::default());
        let text = plain().render_page(&page);
        assert!(text.starts_with("Ecosystem Overview\n"));
        assert!(text.contains("▸ Cortex — Reasoning engine"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_color_uses_theme_palette() {
        let page = ViewRouter::new().render("roadmap", &RenderContext::default());
        let dark = TerminalRenderer::new(&DARK_PALETTE, true, 60).render_page(&page);
        let light = TerminalRenderer::new(&LIGHT_PALETTE, true, 60).render_page(&page);
        assert!(dark.contains("\x1b[1;96mRoadmap"));
        assert!(light.contains("\x1b[1;34mRoadmap"));
    }

    #[test]
    fn test_results_and_no_results() {
        let r = plain();
        let text = r.render_results("cortex ai", &search("cortex ai", &SECTIONS));
        assert!(text.contains("1. [10] Ecosystem Overview"));
        assert!(text.contains("Found in Ecosystem Overview section"));
        assert_eq!(r.render_results(" xyz123 ", &[]), "No results for \"xyz123\".\n");
    }

    #[test]
    fn test_sidebar_marks_active() {
        let text = plain().render_sidebar("components");
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().any(|l| l.starts_with("➜ components")));
    }
}
