//! Orchestration for `gnosync pull`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::qeval::parse_query_output;
use crate::io::gnokey::Signer;

/// Outcome of a successful pull, for CLI reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullOutcome {
    pub filename: String,
    pub bytes: usize,
}

/// Fetch `filename` from the realm and write it under `root`.
///
/// An empty query result means the remote has no such file: the pull fails
/// and the local file is left untouched. An existing local file is
/// overwritten on success.
pub fn pull_file(root: &Path, signer: &dyn Signer, filename: &str) -> Result<PullOutcome> {
    debug!(filename, "pulling file");
    let raw = signer.query_file(filename)?;
    let content = parse_query_output(&raw).context("parse query response")?;

    if content.is_empty() {
        bail!("file '{filename}' not found or empty");
    }

    let target = root.join(filename);
    fs::write(&target, &content).with_context(|| format!("write {}", target.display()))?;
    info!(filename, bytes = content.len(), "pulled file");
    Ok(PullOutcome {
        filename: filename.to_string(),
        bytes: content.len(),
    })
}
