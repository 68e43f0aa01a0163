//! Keyboard routing for the shell.
//!
//! While a modal is open every key goes to the dialog; otherwise keys move
//! the link selection or request shell-level commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::AppState;
use crate::modal::ModalManager;

/// What the shell should do after a page key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Nothing beyond the state change already applied.
    None,
    /// Quit right away.
    Quit,
    /// Quit, asking first if configured to.
    RequestQuit,
    /// Show details for the selected link.
    OpenSelected,
}

/// Handle a key while no modal is open.
///
/// # Key Bindings
/// - Up/k, Down/j: Move link selection (clamps, no wrap)
/// - Home/g, End/G: First / last link
/// - Enter: Open the selected link
/// - q/Esc: Request quit
/// - Ctrl+C: Quit immediately
pub fn handle_page_key(state: &mut AppState, key: KeyEvent) -> ShellCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return ShellCommand::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        KeyCode::Enter => return ShellCommand::OpenSelected,
        KeyCode::Char('q') | KeyCode::Esc => return ShellCommand::RequestQuit,
        _ => {}
    }

    ShellCommand::None
}

/// Handle a key while a modal is open.
///
/// Returns `true` if the key was consumed, which is always the case while a
/// modal is open; `false` when no modal is open.
///
/// # Key Bindings
/// - Tab/Right/l: Focus next action (wraps)
/// - Shift+Tab/Left/h: Focus previous action (wraps)
/// - Enter/Space: Activate the focused action
///
/// Escape is swallowed; dialogs end through their own actions.
pub fn handle_modal_key(state: &mut AppState, modal: &ModalManager, key: KeyEvent) -> bool {
    if !modal.is_any_modal_open() {
        return false;
    }

    let actions = modal.action_ids();

    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            state.focus_next_action(actions.len());
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            state.focus_prev_action(actions.len());
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(action_id) = actions.get(state.action_focus(actions.len())) {
                modal.activate(action_id);
            }
            state.reset_action_focus();
        }
        _ => {}
    }

    true
}
