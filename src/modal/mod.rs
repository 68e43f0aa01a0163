//! Modal dialog system.
//!
//! At most one modal is open per shell. [`ModalSession`] is the plain state
//! machine; [`ModalManager`] is the shared handle the shell and dialog
//! flows use.

pub mod manager;
pub mod session;

pub use manager::{
    ModalManager, CANCEL_ACTION, CLOSE_ACTION, CONFIRM_ACTION, CONFIRM_TEMPLATE_ID,
    CONTENT_SLOT, DEFAULT_FALSE_LABEL, DEFAULT_TRUE_LABEL, MESSAGE_TEMPLATE_ID, TITLE_SLOT,
};
pub use session::{CloseHandler, EndedSession, HostView, ModalSession};
