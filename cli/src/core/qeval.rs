//! Parser for `gnokey query vm/qeval` output.
//!
//! The signer's stdout is free-form text and an unstable boundary, so the
//! matching rule lives behind this one function: raw text in, bytes out.
//! The payload line looks like either of:
//!
//! ```text
//! data: (nil []uint8)
//! data: (slice[0x48656c6c6f] []uint8)
//! ```

use anyhow::{Context, Result, anyhow};

const DATA_PREFIX: &str = "data: ";
const NIL_SLICE: &str = "(nil []uint8)";

/// Extract the queried file bytes from raw `qeval` output.
///
/// The nil-slice sentinel decodes to an empty vector: a valid "no content"
/// result, distinct from the parse and decode errors below.
pub fn parse_query_output(output: &str) -> Result<Vec<u8>> {
    use std::sync::LazyLock;
    static SLICE_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"slice\[0x([^\]]*)\]").unwrap());

    let data_line = output
        .lines()
        .find(|line| line.starts_with(DATA_PREFIX))
        .ok_or_else(|| anyhow!("no '{DATA_PREFIX}' line in query output"))?;

    if data_line.contains(NIL_SLICE) {
        return Ok(Vec::new());
    }

    let captures = SLICE_RE
        .captures(data_line)
        .ok_or_else(|| anyhow!("unrecognized query output: {data_line}"))?;
    let payload = &captures[1];
    hex::decode(payload).with_context(|| format!("invalid hex payload '{payload}'"))
}
