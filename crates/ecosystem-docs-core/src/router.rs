//! View router: section identifier → content producer.
//!
//! Lookup is an exact match against a fixed table. Unknown identifiers fall
//! back to the default section rather than failing.

use crate::content;
use crate::page::Page;
use crate::registry::{self, DEFAULT_SECTION};
use crate::theme::Theme;

/// Display parameters passed to every content producer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub theme: Theme,
    /// Omit wide preformatted blocks (diagrams) for narrow surfaces.
    pub compact: bool,
}

/// Produces the page for one section.
pub type Renderer = fn(&RenderContext) -> Page;

/// Maps section identifiers to content producers.
#[derive(Clone)]
pub struct ViewRouter {
    routes: Vec<(&'static str, Renderer)>,
    default_section: &'static str,
}

impl std::fmt::Debug for ViewRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.routes.iter().map(|(id, _)| *id).collect();
        f.debug_struct("ViewRouter")
            .field("routes", &ids)
            .field("default_section", &self.default_section)
            .finish()
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    /// The router for the built-in sections, in registry order.
    pub fn new() -> Self {
        let routes: Vec<(&'static str, Renderer)> = vec![
            ("overview", content::overview as Renderer),
            ("architecture", content::architecture as Renderer),
            ("components", content::components as Renderer),
            ("integration", content::integration as Renderer),
            ("workflows", content::workflows as Renderer),
            ("roadmap", content::roadmap as Renderer),
        ];
        debug_assert!(routes
            .iter()
            .zip(registry::sections())
            .all(|((id, _), r)| *id == r.section_id));
        Self {
            routes,
            default_section: DEFAULT_SECTION,
        }
    }

    /// True if `section_id` has its own route.
    pub fn has_route(&self, section_id: &str) -> bool {
        self.lookup(section_id).is_some()
    }

    /// Resolve `section_id` to the identifier that will actually render.
    pub fn resolve(&self, section_id: &str) -> &'static str {
        self.routes
            .iter()
            .find(|(id, _)| *id == section_id)
            .map(|(id, _)| *id)
            .unwrap_or(self.default_section)
    }

    /// Render `section_id`, or the default section if it is unknown.
    pub fn render(&self, section_id: &str, ctx: &RenderContext) -> Page {
        let renderer = self
            .lookup(section_id)
            .or_else(|| self.lookup(self.default_section))
            .unwrap_or(content::overview);
        renderer(ctx)
    }

    /// Render every routed section, in table order.
    pub fn render_all(&self, ctx: &RenderContext) -> Vec<Page> {
        self.routes.iter().map(|(_, r)| r(ctx)).collect()
    }

    fn lookup(&self, section_id: &str) -> Option<Renderer> {
        self.routes
            .iter()
            .find(|(id, _)| *id == section_id)
            .map(|(_, r)| *r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Block;

    #[test]
    fn test_every_registry_section_routes() {
        let router = ViewRouter::new();
        let ctx = RenderContext::default();
        for r in registry::sections() {
            let page = router.render(r.section_id, &ctx);
            assert_eq!(page.section_id, r.section_id);
            assert_eq!(page.title, r.title);
            assert!(!page.is_empty());
        }
    }

    #[test]
    fn test_unknown_section_renders_default() {
        let router = ViewRouter::new();
        let ctx = RenderContext::default();
        for id in ["", "nope", "OVERVIEW", "roadmap ", "../etc"] {
            let page = router.render(id, &ctx);
            assert_eq!(page.section_id, DEFAULT_SECTION, "id {:?}", id);
            assert_eq!(router.resolve(id), DEFAULT_SECTION);
        }
    }

    #[test]
    fn test_compact_drops_diagram() {
        let router = ViewRouter::new();
        let full = router.render("architecture", &RenderContext::default());
        let compact = router.render(
            "architecture",
            &RenderContext {
                compact: true,
                ..Default::default()
            },
        );
        let has_pre = |p: &Page| p.blocks.iter().any(|b| matches!(b, Block::Preformatted(_)));
        assert!(has_pre(&full));
        assert!(!has_pre(&compact));
    }

    #[test]
    fn test_render_all_in_registry_order() {
        let router = ViewRouter::new();
        let ids: Vec<&str> = router
            .render_all(&RenderContext::default())
            .iter()
            .map(|p| p.section_id)
            .collect();
        let expected: Vec<&str> = registry::sections().iter().map(|r| r.section_id).collect();
        assert_eq!(ids, expected);
    }
}
