//! Exclusive modal session state machine.
//!
//! # States
//! - `Closed`: no content, no handler, host view inactive
//! - `Open`: exactly one content value displayed, optional single-use handler
//!
//! Transitions are atomic: `open` and `close` never suspend. Opening while
//! already open is reported and ignored; closing while closed is a no-op.

use std::fmt;

use tracing::{debug, error};

/// Single-use callback run when a session ends, given the content it displayed.
pub type CloseHandler<C> = Box<dyn FnOnce(&C)>;

/// Host view flags the modal system drives.
///
/// `modal_active` suppresses the rest of the interface (dimmed page, input
/// routed to the dialog). `container_visible` shows the dialog frame itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostView {
    /// Whether the shell is in modal mode.
    pub modal_active: bool,
    /// Whether the modal container is shown.
    pub container_visible: bool,
}

/// A session that has just ended, with its handler not yet run.
///
/// Split out so a shared owner can release its borrow before running the
/// handler, which may open the next modal.
pub struct EndedSession<C> {
    /// Content that was displayed.
    pub content: C,
    /// Handler registered by `open`, if any.
    pub handler: Option<CloseHandler<C>>,
}

impl<C> EndedSession<C> {
    /// Run the handler (if any) and hand back the content.
    pub fn finish(self) -> C {
        if let Some(handler) = self.handler {
            handler(&self.content);
        }
        self.content
    }
}

/// Modal session state.
///
/// One per shell. The content type is opaque to the session.
pub struct ModalSession<C> {
    is_open: bool,
    close_on_outside_click: bool,
    close_handler: Option<CloseHandler<C>>,
    content: Option<C>,
    host: HostView,
}

impl<C> Default for ModalSession<C> {
    fn default() -> Self {
        Self {
            is_open: false,
            close_on_outside_click: false,
            close_handler: None,
            content: None,
            host: HostView::default(),
        }
    }
}

impl<C> fmt::Debug for ModalSession<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalSession")
            .field("is_open", &self.is_open)
            .field("close_on_outside_click", &self.close_on_outside_click)
            .field("has_close_handler", &self.close_handler.is_some())
            .field("host", &self.host)
            .finish()
    }
}

impl<C> ModalSession<C> {
    /// Create a closed session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a modal is currently presented.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a click outside the dialog closes it.
    pub fn close_on_outside_click(&self) -> bool {
        self.close_on_outside_click
    }

    /// Current host view flags.
    pub fn host(&self) -> HostView {
        self.host
    }

    /// Displayed content.
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Displayed content, mutably (for action dispatch).
    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Present `content` as the modal body.
    ///
    /// Returns `false` (and drops `content`) if a modal is already open; the
    /// displayed content and registered handler are left as they were.
    pub fn open(
        &mut self,
        content: C,
        on_closed: Option<CloseHandler<C>>,
        close_on_outside_click: bool,
    ) -> bool {
        if self.is_open {
            error!("Attempting to open a modal while one is already open");
            return false;
        }

        self.host.modal_active = true;
        self.content = Some(content);
        self.host.container_visible = true;

        self.is_open = true;
        self.close_handler = on_closed;
        self.close_on_outside_click = close_on_outside_click;

        debug!(close_on_outside_click, "Modal opened");
        true
    }

    /// End the session and reset every flag, without running the handler.
    ///
    /// Returns `None` when nothing was open.
    pub fn end(&mut self) -> Option<EndedSession<C>> {
        if !self.is_open {
            return None;
        }

        let content = self.content.take()?;

        self.host.modal_active = false;
        self.host.container_visible = false;

        self.is_open = false;
        self.close_on_outside_click = false;

        debug!("Modal closed");
        Some(EndedSession {
            content,
            handler: self.close_handler.take(),
        })
    }

    /// End the session, run its handler once, and return the content.
    ///
    /// The handler observes a fully closed session.
    pub fn close(&mut self) -> Option<C> {
        self.end().map(EndedSession::finish)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
