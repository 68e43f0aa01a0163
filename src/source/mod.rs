//! Data object input.
//!
//! The viewer displays one JSON data object, read once at startup from a
//! file or from piped stdin.

use crate::model::error::InputError;
use serde_json::Value;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the data object comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Pick the source from an optional CLI path.
    pub fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Like [`InputSource::from_arg`], but refuses an interactive stdin.
    ///
    /// # Errors
    ///
    /// [`InputError::NoInput`] when no file is given and stdin is a terminal.
    pub fn detect(file: Option<PathBuf>) -> Result<Self, InputError> {
        if file.is_none() && std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_arg(file))
    }

    /// Human-readable origin for error messages.
    pub fn origin(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read and parse the data object.
    ///
    /// # Errors
    ///
    /// [`InputError::FileNotFound`] for a missing file, [`InputError::Io`] for
    /// read failures, [`InputError::Json`] for invalid JSON.
    pub fn load(&self) -> Result<Value, InputError> {
        let contents = match self {
            InputSource::File(path) => read_file(path)?,
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let value = parse_data_object(&self.origin(), &contents)?;
        info!(origin = %self.origin(), bytes = contents.len(), "Loaded data object");
        Ok(value)
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Detect the input source and load the data object from it.
///
/// # Errors
///
/// See [`InputSource::detect`] and [`InputSource::load`].
pub fn load_data_object(file: Option<PathBuf>) -> Result<Value, InputError> {
    InputSource::detect(file)?.load()
}

/// Parse JSON text into a data object.
///
/// # Errors
///
/// [`InputError::Json`] when `contents` is not valid JSON.
pub fn parse_data_object(origin: &str, contents: &str) -> Result<Value, InputError> {
    serde_json::from_str(contents).map_err(|source| InputError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Replace the `query` field of a search-results object.
///
/// Objects that are not JSON objects are returned unchanged.
pub fn override_query(mut data: Value, query: Option<String>) -> Value {
    if let (Some(query), Some(object)) = (query, data.as_object_mut()) {
        object.insert("query".to_string(), Value::String(query));
    }
    data
}
