//! Markdown-to-realm sync tool.
//!
//! `gnosync` bridges a local directory of Markdown files and a gno.land
//! realm reached through the external `gnokey` signing binary. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (bundle encoding, query-output
//!   parsing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (directory walks, config loading,
//!   `gnokey` subprocess calls). Isolated to enable mocking in tests.
//!
//! Orchestration modules ([`pull`], [`push`]) coordinate core logic with I/O
//! to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pull;
pub mod push;
