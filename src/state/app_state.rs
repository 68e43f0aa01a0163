//! Shell state: the displayed page, link selection, and dialog focus.
//!
//! Pure data with small transitions; no terminal or async access.

use crate::pages::{LinkAnchor, PageContent, PageHistoryState};

/// Root UI state of the shell.
///
/// # Invariants
/// - `selected_link < page.links.len()` whenever the page has links
/// - `scroll_offset` only changes through [`AppState::adjust_scroll`]
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Page currently displayed. `None` before the first load.
    page: Option<PageContent>,

    /// States left behind by pages that were replaced, oldest first.
    history: Vec<PageHistoryState>,

    /// Index into the page's links.
    selected_link: usize,

    /// First body line shown.
    scroll_offset: usize,

    /// Focused action of the open modal, wrapped into its action count on use.
    action_focus: usize,
}

impl AppState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed page.
    pub fn page(&self) -> Option<&PageContent> {
        self.page.as_ref()
    }

    /// Replace the displayed page.
    ///
    /// `left_behind` is the outgoing page's history state, if there was one.
    pub fn show_page(&mut self, content: PageContent, left_behind: Option<PageHistoryState>) {
        if let Some(state) = left_behind {
            self.history.push(state);
        }
        self.page = Some(content);
        self.selected_link = 0;
        self.scroll_offset = 0;
    }

    /// History states, oldest first.
    pub fn history(&self) -> &[PageHistoryState] {
        &self.history
    }

    fn link_count(&self) -> usize {
        self.page.as_ref().map_or(0, |page| page.links.len())
    }

    /// Index of the selected link.
    pub fn selected_link_index(&self) -> usize {
        self.selected_link
    }

    /// The selected link, if the page has any.
    pub fn selected_link(&self) -> Option<&LinkAnchor> {
        self.page
            .as_ref()
            .and_then(|page| page.links.get(self.selected_link))
    }

    /// Move selection up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.selected_link = self.selected_link.saturating_sub(1);
    }

    /// Move selection down, clamping at the last link.
    pub fn select_next(&mut self) {
        let count = self.link_count();
        if count > 0 {
            self.selected_link = (self.selected_link + 1).min(count - 1);
        }
    }

    /// Jump to the first link.
    pub fn select_first(&mut self) {
        self.selected_link = 0;
    }

    /// Jump to the last link.
    pub fn select_last(&mut self) {
        self.selected_link = self.link_count().saturating_sub(1);
    }

    /// Select the link drawn on `line`, if any. Returns whether one was found.
    pub fn select_link_on_line(&mut self, line: usize) -> bool {
        let found = self
            .page
            .as_ref()
            .and_then(|page| page.links.iter().position(|anchor| anchor.line == line));
        match found {
            Some(index) => {
                self.selected_link = index;
                true
            }
            None => false,
        }
    }

    /// First body line shown.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Update scroll offset so the selected link's line is visible.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        let Some(line) = self.selected_link().map(|anchor| anchor.line) else {
            return;
        };
        let visible_rows = visible_rows.max(1);

        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + visible_rows {
            self.scroll_offset = line - visible_rows + 1;
        }
    }

    /// Focused action index for a dialog with `action_count` actions.
    pub fn action_focus(&self, action_count: usize) -> usize {
        if action_count == 0 {
            0
        } else {
            self.action_focus % action_count
        }
    }

    /// Move dialog focus right, wrapping.
    pub fn focus_next_action(&mut self, action_count: usize) {
        if action_count > 0 {
            self.action_focus = (self.action_focus(action_count) + 1) % action_count;
        }
    }

    /// Move dialog focus left, wrapping.
    pub fn focus_prev_action(&mut self, action_count: usize) {
        if action_count > 0 {
            self.action_focus = (self.action_focus(action_count) + action_count - 1) % action_count;
        }
    }

    /// Focus the first action; used whenever no dialog is open.
    pub fn reset_action_focus(&mut self) {
        self.action_focus = 0;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
