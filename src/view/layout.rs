//! Shell layout: title bar, page body, status bar, and the dialog overlay.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::constants::{STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use super::dialog::{dialog_layout, render_dialog, DialogLayout};
use super::styles::ViewerStyles;
use crate::modal::ModalManager;
use crate::state::AppState;

/// Screen regions of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    /// Title bar row.
    pub title: Rect,
    /// Page body.
    pub body: Rect,
    /// Status bar row.
    pub status: Rect,
}

/// Split the screen into title bar, body, and status bar.
pub fn shell_areas(area: Rect) -> ShellAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ShellAreas {
        title: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Render the whole shell. Returns the dialog layout when a modal is shown,
/// for mouse hit testing.
pub fn render_shell(
    frame: &mut Frame,
    state: &AppState,
    modal: &ModalManager,
    styles: &ViewerStyles,
) -> Option<DialogLayout> {
    let areas = shell_areas(frame.area());
    let host = modal.host();

    render_title_bar(frame, areas.title, state, styles);
    render_body(frame, areas.body, state, host.modal_active, styles);
    render_status_bar(frame, areas.status, host.modal_active, styles);

    if !host.container_visible {
        return None;
    }

    let focus_count = modal.action_ids().len();
    let focus = state.action_focus(focus_count);
    modal
        .with_content(|fragment| {
            let layout = dialog_layout(frame.area(), fragment);
            render_dialog(frame, &layout, fragment, focus, styles);
            layout
        })
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewerStyles) {
    let text = match state.page() {
        Some(page) => match &page.title.icon {
            Some(icon) => format!(" {icon} {}", page.title.text),
            None => format!(" {}", page.title.text),
        },
        None => " Loading...".to_string(),
    };
    frame.render_widget(Paragraph::new(text).style(styles.title_bar), area);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    suppressed: bool,
    styles: &ViewerStyles,
) {
    let Some(page) = state.page() else {
        return;
    };

    let selected_line = state.selected_link().map(|anchor| anchor.line);
    let link_lines: Vec<usize> = page.links.iter().map(|anchor| anchor.line).collect();

    let lines: Vec<Line<'static>> = page
        .body
        .iter()
        .enumerate()
        .skip(state.scroll_offset())
        .take(usize::from(area.height))
        .map(|(index, line)| {
            if !link_lines.contains(&index) {
                return line.clone();
            }
            let link_style = if selected_line == Some(index) && !suppressed {
                styles.selected_link
            } else {
                styles.link
            };
            restyle_last_span(line, link_style)
        })
        .collect();

    let mut paragraph = Paragraph::new(lines);
    if suppressed {
        paragraph = paragraph.style(styles.suppressed);
    }
    frame.render_widget(paragraph, area);
}

// Pages put the link text in the last span of its line.
fn restyle_last_span(line: &Line<'static>, style: Style) -> Line<'static> {
    let mut line = line.clone();
    if let Some(last) = line.spans.last_mut() {
        last.style = style;
    }
    line
}

fn render_status_bar(frame: &mut Frame, area: Rect, modal_active: bool, styles: &ViewerStyles) {
    let hints = if modal_active {
        "Tab: next button  Enter: activate"
    } else {
        "j/k: move  Enter: open  q: quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {hints}"), styles.muted))),
        area,
    );
}
