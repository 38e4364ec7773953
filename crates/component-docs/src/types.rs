//! Core data types for field references and local documentation.

use serde::{Deserialize, Serialize};

/// Title given to a code example with no heading directly above it.
pub const DEFAULT_EXAMPLE_TITLE: &str = "Code Example";

/// Structured reference for one documentation page's subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// `None` means no property table or list was found on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyEntry>>,
    /// `None` means the page had no non-empty code blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExampleEntry>>,
}

/// One row of a property or method table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub name: String,
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl PropertyEntry {
    /// Build an entry, deriving `required` from the description text.
    pub fn new(
        name: String,
        description: String,
        type_name: Option<String>,
        default_value: Option<String>,
    ) -> Self {
        let required = description.to_lowercase().contains("required");
        Self {
            name,
            description,
            type_name,
            default_value,
            required,
        }
    }
}

/// A code example found on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub title: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of an entry in the local documentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

/// An immediate child of a directory in the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Errors that can occur in the documentation library.
#[derive(thiserror::Error, Debug)]
pub enum DocsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", fetch_failed_message(.status, .message))]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fetch_failed_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Fetch failed (HTTP {code}): {message}"),
        None => format!("Fetch failed: {message}"),
    }
}

/// Convenience result type.
pub type DocsResult<T> = Result<T, DocsError>;
