//! # Ecosystem Docs Core
//!
//! The pure logic behind the Ecosystem Docs browser: the section registry,
//! static page content, keyword search, the navigation dispatcher, the view
//! router, and theme state.
//!
//! This crate does no I/O and has no runtime dependencies beyond `serde`.
//! Rendering to a terminal, exporting, and configuration live in the
//! `ecosystem-docs` binary crate.

pub mod app;
pub mod content;
pub mod dispatch;
pub mod page;
pub mod registry;
pub mod router;
pub mod search;
pub mod theme;

pub use app::{DocsApp, ResultsPanel, Screen, ViewState};
pub use dispatch::{NavigationDispatcher, NavigationEvent, Subscription};
pub use page::{Block, Page};
pub use registry::{SearchableRecord, DEFAULT_SECTION, SECTIONS};
pub use router::{RenderContext, ViewRouter};
pub use search::{SearchParams, SearchResult};
pub use theme::{Palette, Theme};
