//! Error types for codexv.
//!
//! Each subsystem gets its own `thiserror` enum so callers can match on the
//! failure they care about and compose the rest with `?`.
//!
//! # Error Hierarchy
//!
//! - [`InputError`] - reading the data object from a file or stdin
//! - [`TemplateError`] - the templating collaborator could not produce a fragment
//! - [`ModalError`] - a dialog flow did not complete
//! - [`PageError`] - a page could not render a data object
//!
//! Protocol slips such as opening a modal while one is already open, or
//! closing when nothing is open, are not errors at all: they are logged
//! and ignored by the modal manager.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading the data object to display.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No file was given and stdin is not piped.
    #[error("No input: pass a JSON file or pipe one to stdin")]
    NoInput,

    /// The input was read but is not valid JSON.
    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        /// Where the input came from (a path or `<stdin>`).
        origin: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the templating collaborator.
///
/// A failed instantiation leaves the modal manager untouched: no session is
/// opened for a fragment that never existed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template resource does not exist.
    #[error("Template resource not found: {path}")]
    ResourceNotFound {
        /// Resource path as requested.
        path: String,
    },

    /// The resource exists but has no template with this id.
    #[error("Template {template_id} not found in {path}")]
    TemplateNotFound {
        /// Resource path.
        path: String,
        /// Template id that was requested.
        template_id: String,
    },

    /// The resource could not be parsed.
    #[error("Invalid template resource {path}: {reason}")]
    Parse {
        /// Resource path.
        path: String,
        /// Parse error details.
        reason: String,
    },

    /// The resource could not be read.
    #[error("Failed to read template resource {path}: {reason}")]
    Io {
        /// Resource path.
        path: String,
        /// I/O error details.
        reason: String,
    },

    /// An instantiated fragment lacks an element the caller expected.
    #[error("Template {template_id} has no element {element_id}")]
    MissingElement {
        /// Template the fragment came from.
        template_id: String,
        /// Slot or action id that was looked up.
        element_id: String,
    },
}

/// Errors from the asynchronous dialog flows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// The dialog fragment could not be built.
    #[error("Failed to build dialog: {0}")]
    Template(#[from] TemplateError),

    /// The dialog went away without any of its actions being chosen.
    ///
    /// Happens when the dialog could not be shown because another modal
    /// was already open.
    #[error("Dialog dismissed without an answer")]
    Dismissed,
}

/// Errors raised while turning a data object into page content.
#[derive(Debug, Error)]
pub enum PageError {
    /// No registered page claims the data object.
    #[error("No page can display data object {id:?}")]
    NoOwner {
        /// The object's `id` field, if it had one.
        id: Option<String>,
    },

    /// The data object does not have the shape the page expects.
    #[error("Malformed data object for {page}: {source}")]
    Malformed {
        /// Page that tried to read the object.
        page: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The page template could not be instantiated.
    #[error("Page template error: {0}")]
    Template(#[from] TemplateError),
}
