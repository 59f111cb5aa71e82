//! Pure logic: bundle encoding/decoding and query-output parsing.
//!
//! Nothing in here performs I/O, so every rule is testable in isolation.

pub mod bundle;
pub mod qeval;
