//! Local Markdown documentation tree.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use walkdir::WalkDir;

use crate::types::{DocEntry, DocsError, DocsResult, EntryKind};

/// Extension tried when a requested path does not exist as given.
const DEFAULT_EXTENSION: &str = "md";

/// Read-only view over a documentation directory with an in-memory content cache.
#[derive(Debug)]
pub struct DocStore {
    base_dir: PathBuf,
    contents: RwLock<HashMap<String, String>>,
}

impl DocStore {
    /// Open a store rooted at `base_dir`.
    pub fn open(base_dir: impl Into<PathBuf>) -> DocsResult<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_dir() {
            return Err(DocsError::NotFound(format!(
                "documentation directory {}",
                base_dir.display()
            )));
        }

        tracing::info!("Opened documentation directory: {}", base_dir.display());
        Ok(Self {
            base_dir,
            contents: RwLock::new(HashMap::new()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Immediate children of `sub_path`, sorted by name.
    pub fn list_entries(&self, sub_path: &str) -> DocsResult<Vec<DocEntry>> {
        let dir = self.resolve(sub_path)?;
        if !dir.is_dir() {
            return Err(DocsError::NotFound(format!("directory '{sub_path}'")));
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DocEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Read a file, trying `path` and then `path.md`.
    pub fn read_file(&self, path: &str) -> DocsResult<String> {
        if let Some(cached) = self
            .contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            return Ok(cached.clone());
        }

        let exact = self.resolve(path)?;
        let with_ext = PathBuf::from(format!("{}.{DEFAULT_EXTENSION}", exact.display()));
        let file = [exact, with_ext]
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| DocsError::NotFound(format!("document '{path}'")))?;

        let content = std::fs::read_to_string(&file)?;
        self.contents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), content.clone());
        Ok(content)
    }

    /// Relative paths of Markdown files containing `query` (case-insensitive), sorted.
    pub fn search_content(&self, query: &str) -> DocsResult<Vec<String>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(DocsError::InvalidArgument(
                "search query must not be empty".to_string(),
            ));
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(&self.base_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DEFAULT_EXTENSION) {
                continue;
            }

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {}: {e}", path.display());
                    continue;
                }
            };

            if content.to_lowercase().contains(&needle) {
                matches.push(self.relative(path));
            }
        }

        matches.sort();
        tracing::debug!(query, hits = matches.len(), "searched documentation");
        Ok(matches)
    }

    /// Number of cached file contents.
    pub fn cached_files(&self) -> usize {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Join a relative path onto the base, rejecting anything that could escape it.
    fn resolve(&self, path: &str) -> DocsResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches("./"));
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(DocsError::InvalidArgument(format!(
                        "path '{path}' must stay inside the documentation directory"
                    )));
                }
            }
        }
        Ok(self.base_dir.join(relative))
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
