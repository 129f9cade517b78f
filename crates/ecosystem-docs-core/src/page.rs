//! Structured page content.
//!
//! A [`Page`] is what the view router produces for a section. It is a
//! presentation-neutral tree of [`Block`]s; the terminal renderer, the print
//! adapter (HTML), and the Markdown adapter each walk the same tree.

/// A rendered section.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub section_id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub blocks: Vec<Block>,
}

/// One unit of page content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(Vec<&'static str>),
    /// A titled card, used for the component summaries.
    Card {
        title: &'static str,
        tagline: &'static str,
        points: Vec<&'static str>,
    },
    /// Preformatted text such as an ASCII diagram.
    Preformatted(&'static str),
}

impl Page {
    /// True when the page has nothing to show.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All human-readable text on the page, in reading order.
    ///
    /// Used to verify that exports carry the same prose as the screen.
    pub fn text_fragments(&self) -> Vec<&'static str> {
        let mut out = vec![self.title, self.subtitle];
        for block in &self.blocks {
            match block {
                Block::Heading(s) | Block::Paragraph(s) | Block::Preformatted(s) => out.push(*s),
                Block::Bullets(items) => out.extend(items.iter().copied()),
                Block::Card {
                    title,
                    tagline,
                    points,
                } => {
                    out.push(*title);
                    out.push(*tagline);
                    out.extend(points.iter().copied());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_fragments_order() {
        let page = Page {
            section_id: "x",
            title: "T",
            subtitle: "S",
            blocks: vec![
                Block::Heading("H"),
                Block::Card {
                    title: "C",
                    tagline: "tag",
                    points: vec!["p1", "p2"],
                },
                Block::Bullets(vec!["b"]),
            ],
        };
        assert_eq!(
            page.text_fragments(),
            vec!["T", "S", "H", "C", "tag", "p1", "p2", "b"]
        );
        assert!(!page.is_empty());
    }
}
