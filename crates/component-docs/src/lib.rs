//! Component docs: core library for local Markdown documentation trees and
//! field reference extraction from the live documentation site.

pub mod cache;
pub mod extract;
pub mod fetch;
pub mod service;
pub mod store;
pub mod types;

pub use cache::FieldCache;
pub use extract::extract_field;
pub use fetch::{
    field_url, normalize_subject, HttpPageSource, PageSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS,
};
pub use service::DocsService;
pub use store::DocStore;
pub use types::*;
