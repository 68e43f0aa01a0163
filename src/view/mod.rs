//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod dialog;
mod layout;
pub mod styles;
pub mod widgets;

pub use dialog::{dialog_layout, render_dialog, DialogLayout};
pub use layout::{render_shell, shell_areas, ShellAreas};
pub use styles::{ColorConfig, ViewerStyles};

use std::cell::Cell;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use serde_json::Value;
use thiserror::Error;
use tokio::task::LocalSet;
use tracing::{debug, info, warn};

use crate::modal::ModalManager;
use crate::model::PageError;
use crate::pages::PageRegistry;
use crate::state::{handle_modal_key, handle_page_key, AppState, ShellCommand};
use crate::template::{BuiltinTemplates, DirTemplates, TemplateSource};
use constants::TICK_INTERVAL_MS;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The data object could not be shown
    #[error("Page error: {0}")]
    Page(#[from] PageError),
}

/// Prompt of the quit confirmation dialog.
pub const QUIT_PROMPT: &str = "Quit codexv?";

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend. Dialog flows
/// are spawned with [`tokio::task::spawn_local`], so every method that
/// handles input must run inside a [`LocalSet`].
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    modal: ModalManager,
    pages: PageRegistry,
    styles: ViewerStyles,
    confirm_quit: bool,
    quit: Rc<Cell<bool>>,
    /// Data object behind the displayed page
    current_data: Option<Value>,
    /// Last rendered dialog (for mouse click detection)
    last_dialog: Option<DialogLayout>,
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        templates: Rc<dyn TemplateSource>,
        styles: ViewerStyles,
        confirm_quit: bool,
    ) -> Self {
        Self {
            terminal,
            state: AppState::new(),
            modal: ModalManager::new(Rc::clone(&templates)),
            pages: PageRegistry::with_builtin_pages(templates),
            styles,
            confirm_quit,
            quit: Rc::new(Cell::new(false)),
            current_data: None,
            last_dialog: None,
        }
    }

    /// Display a data object with the page that owns it.
    ///
    /// The outgoing page's history state is recorded only once the new page
    /// loaded successfully.
    pub async fn show(&mut self, data: &Value) -> Result<(), TuiError> {
        let page = self.pages.page_for(data)?;
        let content = page.load_from_data_object(data).await?;

        let left_behind = self
            .current_data
            .as_ref()
            .and_then(|previous| self.pages.page_for(previous).ok())
            .map(|previous| previous.on_unload_beginning());

        info!(
            page = page.name(),
            links = content.links.len(),
            "Showing page"
        );
        self.state.show_page(content, left_behind);
        self.current_data = Some(data.clone());
        Ok(())
    }

    /// Route a key press to the open dialog or the page.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if handle_modal_key(&mut self.state, &self.modal, key) {
            return;
        }

        match handle_page_key(&mut self.state, key) {
            ShellCommand::None => {}
            ShellCommand::Quit => self.quit.set(true),
            ShellCommand::RequestQuit => self.request_quit(),
            ShellCommand::OpenSelected => self.open_selected(),
        }
    }

    fn request_quit(&mut self) {
        if !self.confirm_quit {
            self.quit.set(true);
            return;
        }

        let modal = self.modal.clone();
        let quit = Rc::clone(&self.quit);
        tokio::task::spawn_local(async move {
            match modal.confirm(QUIT_PROMPT, "Quit", Some("Quit"), Some("Stay")).await {
                Ok(answer) => {
                    debug!(answer, "Quit confirmation answered");
                    quit.set(answer);
                }
                Err(err) => warn!(error = %err, "Quit confirmation failed"),
            }
        });
    }

    fn open_selected(&mut self) {
        let Some(anchor) = self.state.selected_link() else {
            return;
        };
        let title = anchor.link.text.clone();
        let details = anchor.link.details.clone();
        debug!(target_id = %anchor.link.target_id, "Opening link");

        let modal = self.modal.clone();
        tokio::task::spawn_local(async move {
            if let Err(err) = modal.message(&details, &title).await {
                warn!(error = %err, "Could not show record details");
            }
        });
    }

    /// Handle mouse input: dialog buttons, backdrop, links, and wheel.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let dialog_open = self.modal.is_any_modal_open();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if dialog_open => {
                let Some(layout) = self.last_dialog.as_ref() else {
                    return;
                };
                if let Some(action_id) = layout.button_at(mouse.column, mouse.row) {
                    let action_id = action_id.to_string();
                    self.modal.activate(&action_id);
                    self.state.reset_action_focus();
                } else if !layout.contains(mouse.column, mouse.row) {
                    self.modal.click_backdrop();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Ok(areas) = self.areas() else {
                    return;
                };
                let body = areas.body;
                if mouse.row < body.y || mouse.row >= body.y + body.height {
                    return;
                }
                let line = self.state.scroll_offset() + usize::from(mouse.row - body.y);
                if self.state.select_link_on_line(line) {
                    self.open_selected();
                }
            }
            MouseEventKind::ScrollDown if !dialog_open => self.state.select_next(),
            MouseEventKind::ScrollUp if !dialog_open => self.state.select_prev(),
            _ => {}
        }
    }

    fn areas(&self) -> Result<ShellAreas, TuiError> {
        let size = self.terminal.size()?;
        Ok(shell_areas(Rect::new(0, 0, size.width, size.height)))
    }

    /// Render the current frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        if !self.modal.is_any_modal_open() {
            self.state.reset_action_focus();
        }
        let body_rows = usize::from(self.areas()?.body.height);
        self.state.adjust_scroll(body_rows);

        let Self {
            terminal,
            state,
            modal,
            styles,
            last_dialog,
            ..
        } = self;
        terminal.draw(|frame| {
            *last_dialog = render_shell(frame, state, modal, styles);
        })?;
        Ok(())
    }

    /// Whether the shell should exit.
    pub fn should_quit(&self) -> bool {
        self.quit.get()
    }

    /// Shell state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Modal handle shared with dialog flows.
    pub fn modal(&self) -> &ModalManager {
        &self.modal
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Dispatch one terminal event, then yield once.
    ///
    /// Held keys keep input pending, so the yield is what gives spawned
    /// dialog flows a turn between events.
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        tokio::task::yield_now().await;
    }

    /// Run the event loop until quit.
    ///
    /// Input is polled without blocking; between polls the loop sleeps so
    /// spawned dialog flows get to run.
    pub async fn run(&mut self) -> Result<(), TuiError> {
        let tick = Duration::from_millis(TICK_INTERVAL_MS);

        loop {
            self.draw()?;
            if self.should_quit() {
                return Ok(());
            }

            if event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(event).await;
            } else {
                tokio::time::sleep(tick).await;
            }
        }
    }
}

/// Options for [`run_viewer`].
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    /// Directory to load templates from instead of the built-in ones.
    pub template_dir: Option<PathBuf>,
    /// Ask before quitting.
    pub confirm_quit: bool,
    /// Color configuration.
    pub color: ColorConfig,
}

/// Initialize the terminal, show `data`, and run until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_viewer(data: Value, options: ViewerOptions) -> Result<(), TuiError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();

    let templates: Rc<dyn TemplateSource> = match options.template_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Loading templates from directory");
            Rc::new(DirTemplates::new(dir))
        }
        None => Rc::new(BuiltinTemplates::new()),
    };
    let styles = ViewerStyles::with_color_config(options.color);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app: TuiApp<CrosstermBackend<Stdout>> =
        TuiApp::with_terminal(terminal, templates, styles, options.confirm_quit);

    // Run the app and ensure cleanup happens even on error
    let result = local.block_on(&runtime, async {
        app.show(&data).await?;
        app.run().await
    });

    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
