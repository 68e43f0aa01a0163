//! Search result records as delivered by the search backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Data object id that marks a search-results document.
pub const SEARCH_RESULTS_ID: &str = "search_results";

/// A single search hit.
///
/// Only `id` and `name` are interpreted by the viewer. Every other field is
/// kept verbatim in `fields` so detail views can show it.
///
/// A missing or `null` `id` or `name` deserializes to an empty string rather
/// than failing the whole document; such items end up in the catch-all group.
/// Numbers and booleans are kept in their string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Identifier whose prefix encodes the record type (e.g. `"facility_lab"`).
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,

    /// Display name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Remaining domain fields, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl ResultItem {
    /// Create an item with no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: Map::new(),
        }
    }

    /// Attach an extra domain field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// A search-results document: the query and its hits in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Data object id, always [`SEARCH_RESULTS_ID`] for documents produced by search.
    #[serde(default = "default_search_results_id")]
    pub id: String,

    /// The query string the user typed.
    #[serde(default)]
    pub query: String,

    /// Hits in the order the backend returned them.
    #[serde(default)]
    pub results: Vec<ResultItem>,
}

fn default_search_results_id() -> String {
    SEARCH_RESULTS_ID.to_string()
}

impl SearchResults {
    /// Create a search-results document.
    pub fn new(query: impl Into<String>, results: Vec<ResultItem>) -> Self {
        Self {
            id: default_search_results_id(),
            query: query.into(),
            results,
        }
    }

    /// Number of hits.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the search produced no hits.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
