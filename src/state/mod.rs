//! UI state (pure) and input routing.

pub mod app_state;
pub mod key_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use key_handler::{handle_modal_key, handle_page_key, ShellCommand};
