//! Repository traversal and per-file dispatch
//!
//! Walks the tree in a stable order, hands recognized files to the grammar
//! registry and walker, and isolates every per-file failure so one bad file
//! never aborts a run.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{RepodocError, Result};

use super::registry::GrammarRegistry;
use super::walker::{self, DefinitionRecord};

/// One scanned source file with its definitions in pre-order
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub definitions: Vec<DefinitionRecord>,
}

/// Directory walker that drives extraction over a repository
pub struct RepoScanner<'a> {
    registry: &'a mut GrammarRegistry,
    max_file_size: usize,
}

impl<'a> RepoScanner<'a> {
    pub fn new(registry: &'a mut GrammarRegistry, max_file_size: usize) -> Self {
        Self {
            registry,
            max_file_size,
        }
    }

    /// Scan the repository rooted at `root`. Files come back in a
    /// deterministic order: lexicographic within each directory, depth-first.
    /// Unrecognized extensions are skipped silently; unreadable or
    /// unparsable files are logged and skipped.
    pub fn scan(&mut self, root: &Path) -> Result<Vec<ScannedFile>> {
        let mut scanned = Vec::new();

        let entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            });

        for entry in entries {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();

            let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
                continue;
            };
            if self.registry.resolve(extension).is_none() {
                // Most repository files are not source files; not an error
                continue;
            }

            match self.scan_file(path, extension) {
                Ok(file) => scanned.push(file),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        Ok(scanned)
    }

    fn scan_file(&mut self, path: &Path, extension: &str) -> Result<ScannedFile> {
        // Size check comes first so oversized files are never read into memory
        let metadata = std::fs::metadata(path).map_err(|e| RepodocError::ReadFailure {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        if metadata.len() > self.max_file_size as u64 {
            return Err(RepodocError::ReadFailure {
                path: path.to_path_buf(),
                detail: format!("exceeds maximum size of {} bytes", self.max_file_size),
            });
        }

        let bytes = std::fs::read(path).map_err(|e| RepodocError::ReadFailure {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        // Lenient decoding: invalid bytes degrade, they do not fail the file
        let source = String::from_utf8_lossy(&bytes).into_owned();

        let mut handle = self
            .registry
            .resolve_required(extension)?;
        let tree = handle.parse(&source, path)?;
        let definitions = walker::extract_definitions(&tree, &source, path, handle.spec);

        debug!(
            "Scanned {}: {} definition(s)",
            path.display(),
            definitions.len()
        );

        Ok(ScannedFile {
            path: path.to_path_buf(),
            definitions,
        })
    }
}
