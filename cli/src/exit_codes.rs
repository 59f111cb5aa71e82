//! Stable exit codes for gnosync CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: bad arguments, filesystem, subprocess, or parse errors.
pub const FAILURE: i32 = 1;
