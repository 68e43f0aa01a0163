//! Page controllers.
//!
//! A page turns a data object into displayable content. The shell asks the
//! [`PageRegistry`] which page owns an object, then awaits
//! [`Page::load_from_data_object`].

pub mod search_results;

pub use search_results::SearchResultsPage;

use std::rc::Rc;

use async_trait::async_trait;
use ratatui::text::Line;
use serde_json::{Map, Value};

use crate::model::PageError;
use crate::template::TemplateSource;
use crate::view::widgets::InAppLink;

/// Title shown in the shell's title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    /// Optional icon glyph.
    pub icon: Option<String>,
    /// Title text.
    pub text: String,
}

/// A link placed on a specific body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAnchor {
    /// Index into [`PageContent::body`].
    pub line: usize,
    /// The link itself.
    pub link: InAppLink,
}

/// Rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// Body lines, top to bottom.
    pub body: Vec<Line<'static>>,
    /// Links in body order.
    pub links: Vec<LinkAnchor>,
    /// Title bar contents.
    pub title: PageTitle,
}

/// State a page leaves behind when it is navigated away from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHistoryState {
    /// Name of the page that produced the state.
    pub page: &'static str,
    /// Page-specific data needed to restore it.
    pub data: Map<String, Value>,
}

/// Page lifecycle contract.
#[async_trait(?Send)]
pub trait Page {
    /// Stable page name, used in history state and logs.
    fn name(&self) -> &'static str;

    /// Whether this page displays the given data object.
    fn owns_data_object(&self, data: &Value) -> bool;

    /// Render a data object this page owns.
    async fn load_from_data_object(&self, data: &Value) -> Result<PageContent, PageError>;

    /// Load the page without a data object (direct navigation).
    ///
    /// `Ok(None)` means the page cannot be shown on its own.
    async fn load(&self) -> Result<Option<PageContent>, PageError>;

    /// Short preview for hover cards. `None` when the page has none.
    async fn generate_preview(&self, data: &Value) -> Option<Vec<Line<'static>>>;

    /// Called when the page is about to be replaced.
    fn on_unload_beginning(&self) -> PageHistoryState;
}

/// Ordered set of pages; the first owner of a data object wins.
#[derive(Default)]
pub struct PageRegistry {
    pages: Vec<Box<dyn Page>>,
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in page.
    pub fn with_builtin_pages(templates: Rc<dyn TemplateSource>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SearchResultsPage::new(templates)));
        registry
    }

    /// Add a page after the existing ones.
    pub fn register(&mut self, page: Box<dyn Page>) {
        self.pages.push(page);
    }

    /// Number of registered pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when no page is registered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find the page that owns `data`.
    ///
    /// # Errors
    ///
    /// [`PageError::NoOwner`] when no registered page claims it.
    pub fn page_for(&self, data: &Value) -> Result<&dyn Page, PageError> {
        self.pages
            .iter()
            .find(|page| page.owns_data_object(data))
            .map(|page| page.as_ref())
            .ok_or_else(|| PageError::NoOwner {
                id: data.get("id").and_then(Value::as_str).map(str::to_string),
            })
    }
}
