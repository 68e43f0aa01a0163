//! Modal dialog rendering and hit testing.
//!
//! A dialog is drawn centered over the page: a bordered box titled with the
//! fragment's title slot, the content slot wrapped inside, and the actions
//! as a row of buttons along the bottom edge.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::constants::{BUTTON_GAP, DIALOG_WIDTH};
use super::styles::ViewerStyles;
use crate::modal::{CONTENT_SLOT, TITLE_SLOT};
use crate::template::Fragment;

/// Where a dialog and its buttons sit on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// Outer dialog box, borders included.
    pub area: Rect,
    /// Content paragraph area.
    pub body: Rect,
    /// Button rectangles keyed by action id, in display order.
    pub buttons: Vec<(String, Rect)>,
}

impl DialogLayout {
    /// Whether a cell lies inside the dialog box.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.area, column, row)
    }

    /// Action id of the button under a cell.
    pub fn button_at(&self, column: u16, row: u16) -> Option<&str> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(id, _)| id.as_str())
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// Rows the content needs when wrapped to `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Compute the dialog layout for a fragment inside `screen`.
///
/// Height is borders + wrapped content + a spacer row + the button row,
/// clamped to the screen.
pub fn dialog_layout(screen: Rect, fragment: &Fragment) -> DialogLayout {
    let width = DIALOG_WIDTH.min(screen.width);
    let inner_width = width.saturating_sub(2);
    let content = fragment.slot(CONTENT_SLOT).unwrap_or_default();
    let content_rows = wrapped_rows(content, inner_width);

    let height = content_rows.saturating_add(4).min(screen.height);
    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let body = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: inner_width,
        height: height.saturating_sub(4).max(1).min(height.saturating_sub(2)),
    };

    let labels: Vec<(String, u16)> = fragment
        .actions()
        .iter()
        .map(|action| {
            let label_width = u16::try_from(button_text(action.label()).width()).unwrap_or(u16::MAX);
            (action.id().to_string(), label_width)
        })
        .collect();
    let gaps = BUTTON_GAP.saturating_mul(u16::try_from(labels.len().saturating_sub(1)).unwrap_or(0));
    let row_width = labels
        .iter()
        .fold(gaps, |total, (_, w)| total.saturating_add(*w))
        .min(inner_width);
    let button_row = area.y + height.saturating_sub(2);

    let mut x = area.x + 1 + inner_width.saturating_sub(row_width) / 2;
    let right_edge = area.x + 1 + inner_width;
    let buttons = labels
        .into_iter()
        .map(|(id, label_width)| {
            let button_width = label_width.min(right_edge.saturating_sub(x));
            let rect = Rect {
                x,
                y: button_row,
                width: button_width,
                height: 1,
            };
            x = x.saturating_add(button_width).saturating_add(BUTTON_GAP);
            (id, rect)
        })
        .collect();

    DialogLayout {
        area,
        body,
        buttons,
    }
}

/// Draw a dialog for `fragment`, highlighting the action at `focus`.
pub fn render_dialog(
    frame: &mut Frame,
    layout: &DialogLayout,
    fragment: &Fragment,
    focus: usize,
    styles: &ViewerStyles,
) {
    frame.render_widget(Clear, layout.area);

    let title = fragment.slot(TITLE_SLOT).unwrap_or_default();
    let block = Block::default()
        .title(Line::from(Span::styled(format!(" {title} "), styles.modal_title)).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(styles.modal);
    frame.render_widget(block, layout.area);

    let content = fragment.slot(CONTENT_SLOT).unwrap_or_default();
    let paragraph = Paragraph::new(content.to_string())
        .style(styles.modal)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, layout.body);

    for (index, (action, (_, rect))) in fragment
        .actions()
        .iter()
        .zip(layout.buttons.iter())
        .enumerate()
    {
        let style = if index == focus {
            styles.focused_button
        } else {
            styles.button
        };
        frame.render_widget(
            Paragraph::new(Span::styled(button_text(action.label()), style)),
            *rect,
        );
    }
}
