//! Search results page.
//!
//! Lists every hit under its group label, groups in label order, hits in
//! name order. Each hit is a link the user can open for details.

use std::rc::Rc;

use async_trait::async_trait;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{LinkAnchor, Page, PageContent, PageHistoryState, PageTitle};
use crate::model::{group_results, PageError, SearchResults, SEARCH_RESULTS_ID};
use crate::template::{TemplateSource, SEARCH_RESULTS_TEMPLATE_PATH};
use crate::view::widgets::InAppLink;

/// Page name.
pub const PAGE_NAME: &str = "search-results-page";

/// Template id of the page header.
pub const SEARCH_RESULTS_TEMPLATE_ID: &str = "template-search-results-page";

const QUERY_SLOT: &str = "search-results-query";
const COUNT_SLOT: &str = "search-results-count";

/// Page title text.
pub const TITLE_TEXT: &str = "Search Results";

/// Renders [`SearchResults`] documents.
pub struct SearchResultsPage {
    templates: Rc<dyn TemplateSource>,
    link_style: Style,
}

impl SearchResultsPage {
    /// Create the page.
    pub fn new(templates: Rc<dyn TemplateSource>) -> Self {
        Self {
            templates,
            link_style: Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Render a parsed document.
    ///
    /// # Errors
    ///
    /// Fails only if the header template cannot be instantiated.
    pub async fn render(&self, results: &SearchResults) -> Result<PageContent, PageError> {
        let mut header = self
            .templates
            .instantiate(SEARCH_RESULTS_TEMPLATE_PATH, SEARCH_RESULTS_TEMPLATE_ID)
            .await?;
        header.set_slot(QUERY_SLOT, results.query.as_str())?;
        header.set_slot(COUNT_SLOT, results.len().to_string())?;

        let query = header.slot(QUERY_SLOT).unwrap_or_default().to_string();
        let count = header.slot(COUNT_SLOT).unwrap_or_default().to_string();

        let mut body = vec![
            Line::from(vec![
                Span::raw("Results for "),
                Span::styled(format!("\"{query}\""), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(" ({count})")),
            ]),
        ];
        let mut links = Vec::new();

        let groups = group_results(results);
        debug!(
            query = %results.query,
            hits = results.len(),
            groups = groups.len(),
            "Rendering search results"
        );

        if groups.is_empty() {
            body.push(Line::default());
            body.push(Line::from("No results."));
        }

        for group in groups {
            body.push(Line::default());
            for item in group.items {
                let link = InAppLink::from_item(item);
                body.push(Line::from(vec![
                    Span::raw(format!("{}: ", group.label)),
                    link.span(self.link_style),
                ]));
                links.push(LinkAnchor {
                    line: body.len() - 1,
                    link,
                });
            }
        }

        Ok(PageContent {
            body,
            links,
            title: PageTitle {
                icon: None,
                text: TITLE_TEXT.to_string(),
            },
        })
    }
}

#[async_trait(?Send)]
impl Page for SearchResultsPage {
    fn name(&self) -> &'static str {
        PAGE_NAME
    }

    fn owns_data_object(&self, data: &Value) -> bool {
        data.get("id").and_then(Value::as_str) == Some(SEARCH_RESULTS_ID)
    }

    async fn load_from_data_object(&self, data: &Value) -> Result<PageContent, PageError> {
        let results = SearchResults::deserialize(data).map_err(|source| PageError::Malformed {
            page: PAGE_NAME,
            source,
        })?;
        self.render(&results).await
    }

    async fn load(&self) -> Result<Option<PageContent>, PageError> {
        // Search results are only reachable through a search.
        Ok(None)
    }

    async fn generate_preview(&self, _data: &Value) -> Option<Vec<Line<'static>>> {
        None
    }

    fn on_unload_beginning(&self) -> PageHistoryState {
        PageHistoryState {
            page: PAGE_NAME,
            data: Map::new(),
        }
    }
}

#[cfg(test)]
#[path = "search_results_tests.rs"]
mod tests;
