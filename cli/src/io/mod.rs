//! I/O helpers for gnosync commands.

pub mod collect;
pub mod config;
pub mod gnokey;
