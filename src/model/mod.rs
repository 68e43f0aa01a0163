//! Domain model types (pure).

pub mod error;
pub mod grouping;
pub mod result_item;
pub mod type_tag;

// Re-export for convenience
pub use error::{InputError, ModalError, PageError, TemplateError};
pub use grouping::{group_items, group_results, ResultGroup};
pub use result_item::{ResultItem, SearchResults, SEARCH_RESULTS_ID};
pub use type_tag::{group_label_for, TypeTag, UNCLASSIFIED_LABEL};
