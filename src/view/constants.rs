//! Layout dimension constants for TUI rendering.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Preferred dialog width in columns (clamped to the terminal).
pub const DIALOG_WIDTH: u16 = 60;

/// Columns between two dialog buttons.
pub const BUTTON_GAP: u16 = 2;

/// Event loop tick when no input is pending, in milliseconds.
///
/// Between ticks the loop yields so dialog tasks can make progress.
pub const TICK_INTERVAL_MS: u64 = 30;
