//! Templating collaborator.
//!
//! Templates live in TOML resources. Each top-level table of a resource is
//! one template id:
//!
//! ```toml
//! [template-confirm-modal]
//! slots = { modal-title = "", modal-content = "" }
//! actions = [
//!     { id = "modal-confirm", label = "Confirm" },
//!     { id = "modal-cancel", label = "Cancel" },
//! ]
//! ```
//!
//! Instantiation is asynchronous because a resource may have to be read from
//! disk. A missing resource or template id fails the returned future; nothing
//! is retried.

mod fragment;

pub use fragment::{Action, ActionHandler, Fragment};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::model::TemplateError;

/// Resource holding the modal dialog templates.
pub const MODAL_TEMPLATE_PATH: &str = "templates/widgets/modal.toml";

/// Resource holding the search results page template.
pub const SEARCH_RESULTS_TEMPLATE_PATH: &str = "templates/pages/search-results-page.toml";

const BUILTIN_RESOURCES: [(&str, &str); 2] = [
    (
        MODAL_TEMPLATE_PATH,
        include_str!("../../assets/templates/widgets/modal.toml"),
    ),
    (
        SEARCH_RESULTS_TEMPLATE_PATH,
        include_str!("../../assets/templates/pages/search-results-page.toml"),
    ),
];

/// Something that can turn a (resource, template id) pair into a fragment.
///
/// Single-threaded: fragments carry `!Send` action handlers.
#[async_trait(?Send)]
pub trait TemplateSource {
    /// Instantiate a fresh fragment from the named template.
    async fn instantiate(&self, path: &str, template_id: &str) -> Result<Fragment, TemplateError>;
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateSpec {
    #[serde(default)]
    slots: BTreeMap<String, String>,
    #[serde(default)]
    actions: Vec<ActionSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionSpec {
    id: String,
    label: String,
}

/// Parse a resource and instantiate one template from it.
pub fn instantiate_from_str(
    path: &str,
    contents: &str,
    template_id: &str,
) -> Result<Fragment, TemplateError> {
    let mut resource: BTreeMap<String, TemplateSpec> =
        toml::from_str(contents).map_err(|e| TemplateError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    let spec = resource
        .remove(template_id)
        .ok_or_else(|| TemplateError::TemplateNotFound {
            path: path.to_string(),
            template_id: template_id.to_string(),
        })?;

    let fragment = spec
        .slots
        .into_iter()
        .fold(Fragment::new(template_id), |fragment, (id, text)| {
            fragment.with_slot(id, text)
        });

    Ok(spec.actions.into_iter().fold(fragment, |fragment, action| {
        fragment.with_action(Action::new(action.id, action.label))
    }))
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// Create the builtin template source.
    pub fn new() -> Self {
        Self
    }

    fn resource(path: &str) -> Option<&'static str> {
        BUILTIN_RESOURCES
            .iter()
            .find(|(resource_path, _)| *resource_path == path)
            .map(|(_, contents)| *contents)
    }
}

#[async_trait(?Send)]
impl TemplateSource for BuiltinTemplates {
    async fn instantiate(&self, path: &str, template_id: &str) -> Result<Fragment, TemplateError> {
        let contents = Self::resource(path).ok_or_else(|| TemplateError::ResourceNotFound {
            path: path.to_string(),
        })?;
        instantiate_from_str(path, contents, template_id)
    }
}

/// Templates read from a directory on disk, e.g. a user's customized copy.
///
/// Resource paths are resolved relative to the root directory and read on
/// every instantiation.
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait(?Send)]
impl TemplateSource for DirTemplates {
    async fn instantiate(&self, path: &str, template_id: &str) -> Result<Fragment, TemplateError> {
        let full_path = self.root.join(path);
        debug!(path = %full_path.display(), template_id, "Reading template resource");

        let contents = match tokio::fs::read_to_string(&full_path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplateError::ResourceNotFound {
                    path: path.to_string(),
                })
            }
            Err(e) => {
                return Err(TemplateError::Io {
                    path: path.to_string(),
                    reason: e.to_string(),
                })
            }
        };

        instantiate_from_str(path, &contents, template_id)
    }
}
