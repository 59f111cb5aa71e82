//! Sync configuration stored in `.gnosync.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".gnosync.toml";

/// Connection and signing parameters for the `gnokey` calls (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to local devnet values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyncConfig {
    /// Realm package path holding the remote file store.
    pub realm_path: String,

    /// Remote node endpoint.
    pub remote: String,

    /// Chain id passed to `maketx`.
    pub chain_id: String,

    /// Gas fee for push transactions.
    pub gas_fee: String,

    /// Gas wanted for push transactions.
    pub gas_wanted: String,

    /// Signer account name known to `gnokey`.
    pub account: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            realm_path: "gno.land/r/example".to_string(),
            remote: "tcp://127.0.0.1:26657".to_string(),
            chain_id: "dev".to_string(),
            gas_fee: "1000000ugnot".to_string(),
            gas_wanted: "50000000".to_string(),
            account: "test".to_string(),
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("realm_path", &self.realm_path),
            ("remote", &self.remote),
            ("chain_id", &self.chain_id),
            ("gas_fee", &self.gas_fee),
            ("gas_wanted", &self.gas_wanted),
            ("account", &self.account),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SyncConfig::default()`.
pub fn load_config(path: &Path) -> Result<SyncConfig> {
    if !path.exists() {
        let cfg = SyncConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SyncConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
