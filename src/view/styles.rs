//! Viewer styling.
//!
//! Colors can be switched off with `--no-color` or the `NO_COLOR`
//! environment variable, in which case every style falls back to the
//! terminal default (modifiers such as bold and underline are kept).

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on or off.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::with_colors(true)
    }
}

// ===== ViewerStyles =====

/// Styles used by the page and modal renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerStyles {
    /// Page title bar.
    pub title_bar: Style,
    /// In-app navigation links.
    pub link: Style,
    /// The link under the cursor.
    pub selected_link: Style,
    /// Secondary text (hints, counts).
    pub muted: Style,
    /// Page body while a modal suppresses it.
    pub suppressed: Style,
    /// Modal frame and background.
    pub modal: Style,
    /// Modal title.
    pub modal_title: Style,
    /// Unfocused action button.
    pub button: Style,
    /// Focused action button.
    pub focused_button: Style,
}

impl ViewerStyles {
    /// Create styles honoring the color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title_bar: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                link: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
                selected_link: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
                muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                suppressed: Style::default().fg(Color::DarkGray),
                modal: Style::default().fg(Color::White).bg(Color::DarkGray),
                modal_title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                button: Style::default().fg(Color::White),
                focused_button: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title_bar: Style::default().add_modifier(Modifier::BOLD),
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                selected_link: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().add_modifier(Modifier::DIM),
                suppressed: Style::default().add_modifier(Modifier::DIM),
                modal: Style::default(),
                modal_title: Style::default().add_modifier(Modifier::BOLD),
                button: Style::default(),
                focused_button: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for ViewerStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::with_colors(true))
    }
}

// ===== Tests =====
