//! Tests for shell state transitions.

use super::*;
use crate::pages::PageTitle;
use crate::view::widgets::InAppLink;
use ratatui::text::Line;
use serde_json::Map;

fn page_with_links(lines: &[usize]) -> PageContent {
    let body_len = lines.iter().max().map_or(1, |max| max + 1);
    PageContent {
        body: (0..body_len).map(|i| Line::from(format!("line {i}"))).collect(),
        links: lines
            .iter()
            .map(|&line| LinkAnchor {
                line,
                link: InAppLink {
                    target_id: format!("item_{line}"),
                    text: format!("Item {line}"),
                    details: String::new(),
                },
            })
            .collect(),
        title: PageTitle {
            icon: None,
            text: "Test".to_string(),
        },
    }
}

#[test]
fn new_state_has_no_page() {
    let state = AppState::new();
    assert!(state.page().is_none());
    assert!(state.selected_link().is_none());
    assert!(state.history().is_empty());
}

#[test]
fn select_next_clamps_to_last_link() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[2, 3, 4]), None);

    state.select_next();
    state.select_next();
    state.select_next();

    assert_eq!(state.selected_link_index(), 2);
    assert_eq!(state.selected_link().unwrap().line, 4);
}

#[test]
fn select_prev_clamps_at_zero() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[2, 3]), None);

    state.select_last();
    state.select_prev();
    state.select_prev();

    assert_eq!(state.selected_link_index(), 0);
}

#[test]
fn selection_on_page_without_links_stays_put() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[]), None);

    state.select_next();
    state.select_last();

    assert_eq!(state.selected_link_index(), 0);
    assert!(state.selected_link().is_none());
}

#[test]
fn show_page_resets_selection_and_records_history() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[1, 2]), None);
    state.select_next();

    state.show_page(
        page_with_links(&[5]),
        Some(PageHistoryState {
            page: "first",
            data: Map::new(),
        }),
    );

    assert_eq!(state.selected_link_index(), 0);
    assert_eq!(state.scroll_offset(), 0);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history()[0].page, "first");
}

#[test]
fn select_link_on_line_finds_anchor() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[2, 4, 6]), None);

    assert!(state.select_link_on_line(4));
    assert_eq!(state.selected_link_index(), 1);
    assert!(!state.select_link_on_line(5));
    assert_eq!(state.selected_link_index(), 1);
}

#[test]
fn adjust_scroll_keeps_selection_visible() {
    let mut state = AppState::new();
    state.show_page(page_with_links(&[0, 5, 10, 20]), None);

    state.select_last();
    state.adjust_scroll(5);
    assert_eq!(state.scroll_offset(), 16);

    state.select_first();
    state.adjust_scroll(5);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn action_focus_wraps_both_ways() {
    let mut state = AppState::new();

    state.focus_next_action(2);
    assert_eq!(state.action_focus(2), 1);
    state.focus_next_action(2);
    assert_eq!(state.action_focus(2), 0);
    state.focus_prev_action(2);
    assert_eq!(state.action_focus(2), 1);

    state.reset_action_focus();
    assert_eq!(state.action_focus(2), 0);
}

#[test]
fn action_focus_with_no_actions_is_zero() {
    let mut state = AppState::new();
    state.focus_next_action(0);
    assert_eq!(state.action_focus(0), 0);
}
