//! Shared modal manager handle and the dialog flows built on it.
//!
//! [`ModalManager`] wraps a [`ModalSession`] of [`Fragment`]s in an
//! `Rc<RefCell<..>>` confined to the UI thread. Clones share one session,
//! so there is still at most one modal per shell. No borrow is ever held
//! while a close handler or an action handler runs, which lets handlers
//! call back into the manager.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tokio::sync::oneshot;
use tracing::debug;

use super::session::{CloseHandler, HostView, ModalSession};
use crate::model::ModalError;
use crate::template::{Fragment, TemplateSource, MODAL_TEMPLATE_PATH};

/// Template id of the two-button confirmation dialog.
pub const CONFIRM_TEMPLATE_ID: &str = "template-confirm-modal";
/// Template id of the single-button message dialog.
pub const MESSAGE_TEMPLATE_ID: &str = "template-message-modal";

/// Slot holding the dialog title.
pub const TITLE_SLOT: &str = "modal-title";
/// Slot holding the dialog body text.
pub const CONTENT_SLOT: &str = "modal-content";

/// Affirmative action of a confirmation dialog.
pub const CONFIRM_ACTION: &str = "modal-confirm";
/// Negative action of a confirmation dialog.
pub const CANCEL_ACTION: &str = "modal-cancel";
/// Dismiss action of a message dialog.
pub const CLOSE_ACTION: &str = "modal-close";

/// Default affirmative label.
pub const DEFAULT_TRUE_LABEL: &str = "Confirm";
/// Default negative label.
pub const DEFAULT_FALSE_LABEL: &str = "Cancel";

struct Inner {
    session: RefCell<ModalSession<Fragment>>,
    templates: Rc<dyn TemplateSource>,
}

/// Handle to the shell's modal session.
#[derive(Clone)]
pub struct ModalManager {
    inner: Rc<Inner>,
}

/// Non-owning handle captured by action handlers stored inside fragments.
#[derive(Clone)]
struct WeakModalManager {
    inner: Weak<Inner>,
}

impl WeakModalManager {
    fn upgrade(&self) -> Option<ModalManager> {
        self.inner.upgrade().map(|inner| ModalManager { inner })
    }
}

impl fmt::Debug for ModalManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalManager")
            .field("session", &self.inner.session)
            .finish()
    }
}

impl ModalManager {
    /// Create a manager with a closed session.
    pub fn new(templates: Rc<dyn TemplateSource>) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(ModalSession::new()),
                templates,
            }),
        }
    }

    fn downgrade(&self) -> WeakModalManager {
        WeakModalManager {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Open `content` as the modal.
    ///
    /// Ignored (and logged) when a modal is already open; `content` is then
    /// dropped along with any action handlers it carries.
    pub fn open(
        &self,
        content: Fragment,
        on_closed: Option<CloseHandler<Fragment>>,
        close_on_outside_click: bool,
    ) -> bool {
        self.inner
            .session
            .borrow_mut()
            .open(content, on_closed, close_on_outside_click)
    }

    /// Close the current modal and return its content.
    ///
    /// The close handler, if one was registered, runs after the session is
    /// fully reset, so it may open another modal.
    pub fn close(&self) -> Option<Fragment> {
        let ended = self.inner.session.borrow_mut().end();
        ended.map(|ended| ended.finish())
    }

    /// Whether any modal is open.
    pub fn is_any_modal_open(&self) -> bool {
        self.inner.session.borrow().is_open()
    }

    /// Host view flags for rendering.
    pub fn host(&self) -> HostView {
        self.inner.session.borrow().host()
    }

    /// Run `f` against the displayed fragment.
    pub fn with_content<R>(&self, f: impl FnOnce(&Fragment) -> R) -> Option<R> {
        self.inner.session.borrow().content().map(f)
    }

    /// Ids of the displayed fragment's actions, in display order.
    pub fn action_ids(&self) -> Vec<String> {
        self.with_content(|fragment| {
            fragment
                .actions()
                .iter()
                .map(|action| action.id().to_string())
                .collect()
        })
        .unwrap_or_default()
    }

    /// Backdrop click: closes the modal if it allows outside clicks.
    ///
    /// Returns whether a modal was closed.
    pub fn click_backdrop(&self) -> bool {
        let enabled = self.inner.session.borrow().close_on_outside_click();
        if enabled {
            debug!("Backdrop click closes modal");
            self.close().is_some()
        } else {
            false
        }
    }

    /// Activate an action of the displayed fragment.
    ///
    /// Returns `false` when no modal is open, the action is unknown, or its
    /// handler already ran.
    pub fn activate(&self, action_id: &str) -> bool {
        let handler = self
            .inner
            .session
            .borrow_mut()
            .content_mut()
            .and_then(|fragment| fragment.take_action_handler(action_id));

        match handler {
            Some(handler) => {
                debug!(action_id, "Modal action activated");
                handler();
                true
            }
            None => false,
        }
    }

    /// Ask the user to confirm a choice.
    ///
    /// Resolves to `true` for the affirmative action and `false` for the
    /// negative one. The dialog is closed before the answer is delivered.
    /// Outside clicks do not dismiss it. Labels default to "Confirm" and
    /// "Cancel".
    ///
    /// # Errors
    ///
    /// [`ModalError::Template`] if the dialog template cannot be
    /// instantiated (no modal is opened), [`ModalError::Dismissed`] if the
    /// dialog could not be shown because another modal was open.
    pub async fn confirm(
        &self,
        prompt: &str,
        title: &str,
        true_label: Option<&str>,
        false_label: Option<&str>,
    ) -> Result<bool, ModalError> {
        let mut fragment = self
            .inner
            .templates
            .instantiate(MODAL_TEMPLATE_PATH, CONFIRM_TEMPLATE_ID)
            .await?;

        fragment.set_slot(CONTENT_SLOT, prompt)?;
        fragment.set_slot(TITLE_SLOT, title)?;
        fragment.set_action_label(CONFIRM_ACTION, true_label.unwrap_or(DEFAULT_TRUE_LABEL))?;
        fragment.set_action_label(CANCEL_ACTION, false_label.unwrap_or(DEFAULT_FALSE_LABEL))?;

        let (tx, rx) = oneshot::channel();
        let reply = Rc::new(RefCell::new(Some(tx)));

        for (action_id, answer) in [(CONFIRM_ACTION, true), (CANCEL_ACTION, false)] {
            let modal = self.downgrade();
            let reply = Rc::clone(&reply);
            fragment.on_activate(action_id, move || {
                if let Some(modal) = modal.upgrade() {
                    modal.close();
                }
                if let Some(tx) = reply.borrow_mut().take() {
                    // Receiver gone means the caller stopped waiting.
                    let _ = tx.send(answer);
                }
            })?;
        }
        drop(reply);

        self.open(fragment, None, false);

        rx.await.map_err(|_| ModalError::Dismissed)
    }

    /// Show an informational dialog with a single dismiss action.
    ///
    /// Resolves as soon as the dialog is shown. Outside clicks dismiss it.
    ///
    /// # Errors
    ///
    /// [`ModalError::Template`] if the dialog template cannot be instantiated.
    pub async fn message(&self, content: &str, title: &str) -> Result<(), ModalError> {
        let mut fragment = self
            .inner
            .templates
            .instantiate(MODAL_TEMPLATE_PATH, MESSAGE_TEMPLATE_ID)
            .await?;

        fragment.set_slot(CONTENT_SLOT, content)?;
        fragment.set_slot(TITLE_SLOT, title)?;

        let modal = self.downgrade();
        fragment.on_activate(CLOSE_ACTION, move || {
            if let Some(modal) = modal.upgrade() {
                modal.close();
            }
        })?;

        self.open(fragment, None, true);
        Ok(())
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
