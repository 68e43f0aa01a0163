//! Instantiated UI fragments.
//!
//! A fragment is the terminal analogue of a cloned markup template: a set of
//! named text slots plus an ordered list of actions (buttons). Actions can
//! carry a single-use handler that runs when the action is activated.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::TemplateError;

/// Callback run when an action is activated. Runs at most once.
pub type ActionHandler = Box<dyn FnOnce()>;

/// A button inside a fragment.
pub struct Action {
    id: String,
    label: String,
    handler: Option<ActionHandler>,
}

impl Action {
    /// Create an action with no handler attached.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            handler: None,
        }
    }

    /// Element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Button text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a handler is still attached.
    pub fn is_armed(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("armed", &self.is_armed())
            .finish()
    }
}

/// An instantiated template.
#[derive(Debug)]
pub struct Fragment {
    template_id: String,
    slots: BTreeMap<String, String>,
    actions: Vec<Action>,
}

impl Fragment {
    /// Create an empty fragment for the given template id.
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            slots: BTreeMap::new(),
            actions: Vec::new(),
        }
    }

    /// Builder: add a slot with initial text.
    pub fn with_slot(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.slots.insert(id.into(), text.into());
        self
    }

    /// Builder: append an action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Template id this fragment was instantiated from.
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Text of a slot.
    pub fn slot(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    /// Replace the text of an existing slot.
    pub fn set_slot(&mut self, id: &str, text: impl Into<String>) -> Result<(), TemplateError> {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = text.into();
                Ok(())
            }
            None => Err(self.missing(id)),
        }
    }

    /// Actions in display order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Replace the label of an existing action.
    pub fn set_action_label(
        &mut self,
        id: &str,
        label: impl Into<String>,
    ) -> Result<(), TemplateError> {
        let action = self.action_mut(id)?;
        action.label = label.into();
        Ok(())
    }

    /// Attach the handler run when the action is activated.
    ///
    /// Replaces any handler attached earlier.
    pub fn on_activate(
        &mut self,
        id: &str,
        handler: impl FnOnce() + 'static,
    ) -> Result<(), TemplateError> {
        let action = self.action_mut(id)?;
        action.handler = Some(Box::new(handler));
        Ok(())
    }

    /// Detach an action's handler so the caller can run it.
    ///
    /// Returns `None` for unknown actions and for actions whose handler
    /// already ran.
    pub fn take_action_handler(&mut self, id: &str) -> Option<ActionHandler> {
        self.actions
            .iter_mut()
            .find(|action| action.id == id)
            .and_then(|action| action.handler.take())
    }

    fn action_mut(&mut self, id: &str) -> Result<&mut Action, TemplateError> {
        match self.actions.iter().position(|action| action.id == id) {
            Some(index) => Ok(&mut self.actions[index]),
            None => Err(self.missing(id)),
        }
    }

    fn missing(&self, element_id: &str) -> TemplateError {
        TemplateError::MissingElement {
            template_id: self.template_id.clone(),
            element_id: element_id.to_string(),
        }
    }
}
