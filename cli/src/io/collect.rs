//! Directory walk that gathers the files for a push.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::core::bundle::FileSet;

/// Collect every non-directory file under `root` whose path ends with
/// `suffix`, keyed by path relative to `root`.
///
/// A traversal error aborts the walk; an unreadable file is logged and
/// skipped. An empty map is a valid outcome, distinct from an error.
#[instrument(skip_all, fields(suffix))]
pub fn collect_files(root: &Path, suffix: &str) -> Result<FileSet> {
    let mut files = FileSet::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if !entry.path().to_string_lossy().ends_with(suffix) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
        let key = relative.to_string_lossy().into_owned();
        match fs::read(entry.path()) {
            Ok(content) => {
                files.insert(key, content);
            }
            Err(err) => {
                warn!(path = %entry.path().display(), err = %err, "skipping unreadable file");
            }
        }
    }
    debug!(count = files.len(), "collected files");
    Ok(files)
}
