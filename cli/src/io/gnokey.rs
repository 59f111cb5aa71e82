//! `gnokey` adapter: the signing/broadcast boundary.
//!
//! The [`Signer`] trait decouples the pull/push flows from the actual
//! `gnokey` subprocess, so tests drive the flows with scripted responses.
//! No timeout wraps the child; a push inherits this process's stdio so the
//! signer's passphrase prompt reaches the user.

use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::io::config::SyncConfig;

/// Abstraction over the remote signing binary.
pub trait Signer {
    /// Query the realm for a single file, returning raw stdout.
    fn query_file(&self, filename: &str) -> Result<String>;

    /// Broadcast a push transaction carrying `message` and the encoded bundle.
    fn push_bundle(&self, message: &str, bundle: &str) -> Result<()>;
}

/// Signer that spawns the `gnokey` binary.
#[derive(Debug, Clone)]
pub struct GnokeyClient {
    config: SyncConfig,
}

impl GnokeyClient {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }
}

impl Signer for GnokeyClient {
    #[instrument(skip_all, fields(filename))]
    fn query_file(&self, filename: &str) -> Result<String> {
        let call = format!("{}.Pull(\"{filename}\")", self.config.realm_path);
        debug!(call = %call, "querying realm");
        let output = Command::new("gnokey")
            .arg("query")
            .arg("vm/qeval")
            .arg("-data")
            .arg(&call)
            .arg("-remote")
            .arg(&self.config.remote)
            .output()
            .context("spawn gnokey query")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("gnokey query failed: {}", stderr.trim()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    #[instrument(skip_all, fields(bundle_bytes = bundle.len()))]
    fn push_bundle(&self, message: &str, bundle: &str) -> Result<()> {
        debug!("broadcasting push transaction");
        let status = Command::new("gnokey")
            .arg("maketx")
            .arg("call")
            .arg("-pkgpath")
            .arg(&self.config.realm_path)
            .arg("-func")
            .arg("Push")
            .arg("-args")
            .arg(message)
            .arg("-args")
            .arg(bundle)
            .arg("-gas-fee")
            .arg(&self.config.gas_fee)
            .arg("-gas-wanted")
            .arg(&self.config.gas_wanted)
            .arg("-send")
            .arg("")
            .arg("-broadcast")
            .arg("-chainid")
            .arg(&self.config.chain_id)
            .arg("-remote")
            .arg(&self.config.remote)
            .arg(&self.config.account)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context("spawn gnokey maketx")?;
        if !status.success() {
            return Err(anyhow!(
                "gnokey maketx failed with status {:?}",
                status.code()
            ));
        }
        Ok(())
    }
}
