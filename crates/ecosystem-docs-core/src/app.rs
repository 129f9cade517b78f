//! Root application state.
//!
//! [`DocsApp`] owns the [`ViewState`] and the [`NavigationDispatcher`]. It
//! subscribes itself to the dispatcher at construction, so any component
//! holding a dispatcher clone (the [`ResultsPanel`], the sidebar) can change
//! the active section by publishing, without a reference back to the app.
//!
//! ```text
//! query ──▶ search ──▶ ResultsPanel::select ──▶ dispatcher.publish
//!                                                     │
//!              ViewRouter::render ◀── ViewState ◀─────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{NavigationDispatcher, Subscription};
use crate::page::Page;
use crate::registry::{self, SearchableRecord, DEFAULT_SECTION};
use crate::router::{RenderContext, ViewRouter};
use crate::search::{self, SearchParams, SearchResult};
use crate::theme::Theme;

/// Everything the UI layer mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: String,
    pub query: String,
    pub theme: Theme,
    /// Whether the search results view is shown instead of content.
    pub showing_results: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_section: DEFAULT_SECTION.to_string(),
            query: String::new(),
            theme: Theme::default(),
            showing_results: false,
        }
    }
}

/// The two mutually exclusive states of the render surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Normal content view for the active section.
    Content(Page),
    /// Search results for an active query. Empty means "no results".
    SearchResults {
        query: String,
        results: Vec<SearchResult>,
    },
}

/// A result list that can publish a navigation intent for one of its rows.
#[derive(Debug, Clone)]
pub struct ResultsPanel {
    results: Vec<SearchResult>,
    dispatcher: NavigationDispatcher,
}

impl ResultsPanel {
    pub fn new(results: Vec<SearchResult>, dispatcher: NavigationDispatcher) -> Self {
        Self {
            results,
            dispatcher,
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Publish navigation to the result at `index` (0-based).
    ///
    /// Returns the selected section id, or `None` if `index` is out of range.
    pub fn select(&self, index: usize) -> Option<&'static str> {
        let result = self.results.get(index)?;
        self.dispatcher.publish(result.section_id);
        Some(result.section_id)
    }
}

/// The root of the documentation browser.
pub struct DocsApp {
    state: Rc<RefCell<ViewState>>,
    dispatcher: NavigationDispatcher,
    router: ViewRouter,
    records: &'static [SearchableRecord],
    params: SearchParams,
    navigation: Option<Subscription>,
}

impl Default for DocsApp {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl DocsApp {
    pub fn new(params: SearchParams) -> Self {
        let state = Rc::new(RefCell::new(ViewState::default()));
        let dispatcher = NavigationDispatcher::new();

        let handle = Rc::clone(&state);
        let navigation = dispatcher.subscribe(move |event| {
            let mut s = handle.borrow_mut();
            s.active_section = event.section_id.clone();
            s.query.clear();
            s.showing_results = false;
        });

        Self {
            state,
            dispatcher,
            router: ViewRouter::new(),
            records: registry::sections(),
            params,
            navigation: Some(navigation),
        }
    }

    /// Start on a specific theme.
    pub fn with_theme(self, theme: Theme) -> Self {
        self.state.borrow_mut().theme = theme;
        self
    }

    /// A copy of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// A handle children can publish navigation through.
    pub fn dispatcher(&self) -> NavigationDispatcher {
        self.dispatcher.clone()
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Update the query text. The results view shows only for active queries.
    pub fn set_query(&self, query: &str) {
        let mut s = self.state.borrow_mut();
        s.query = query.to_string();
        s.showing_results = search::is_active_query(query, &self.params);
    }

    pub fn clear_query(&self) {
        let mut s = self.state.borrow_mut();
        s.query.clear();
        s.showing_results = false;
    }

    /// Direct navigation (sidebar click). Goes through the dispatcher like
    /// any other navigation.
    pub fn navigate(&self, section_id: &str) {
        self.dispatcher.publish(section_id);
    }

    pub fn toggle_theme(&self) {
        self.state.borrow_mut().theme.toggle();
    }

    /// Fresh search results for the current query.
    pub fn results(&self) -> Vec<SearchResult> {
        let query = self.state.borrow().query.clone();
        search::search_with(&query, self.records, &self.params)
    }

    /// A results panel wired to this app's dispatcher.
    pub fn results_panel(&self) -> ResultsPanel {
        ResultsPanel::new(self.results(), self.dispatcher())
    }

    /// Select the result at `index` (0-based) for the current query.
    pub fn select_result(&self, index: usize) -> Option<&'static str> {
        self.results_panel().select(index)
    }

    pub fn render_context(&self, compact: bool) -> RenderContext {
        RenderContext {
            theme: self.state.borrow().theme,
            compact,
        }
    }

    /// The page for the active section (default section if unknown).
    pub fn current_page(&self, compact: bool) -> Page {
        let ctx = self.render_context(compact);
        let active = self.state.borrow().active_section.clone();
        self.router.render(&active, &ctx)
    }

    /// What the render surface should show right now.
    pub fn screen(&self, compact: bool) -> Screen {
        let (showing, query) = {
            let s = self.state.borrow();
            (s.showing_results, s.query.clone())
        };
        if showing && search::is_active_query(&query, &self.params) {
            Screen::SearchResults {
                results: self.results(),
                query,
            }
        } else {
            Screen::Content(self.current_page(compact))
        }
    }
}

impl Drop for DocsApp {
    fn drop(&mut self) {
        if let Some(sub) = self.navigation.take() {
            sub.unsubscribe();
        }
    }
}

impl std::fmt::Debug for DocsApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsApp")
            .field("state", &*self.state.borrow())
            .field("params", &self.params)
            .finish()
    }
}
