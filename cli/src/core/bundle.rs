//! Record format for pushing a set of files as one transaction argument.
//!
//! Each file becomes one `path|content` record terminated by a newline.
//! Backslash, pipe, and newline bytes inside path or content are escaped
//! (`\\`, `\|`, `\n`) so the two delimiters stay unambiguous and any byte
//! sequence survives [`decode`]`(`[`encode`]`(..))` unchanged.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};

/// Files keyed by relative path.
///
/// Ordered map, so the encoded blob is deterministic for a given set.
pub type FileSet = BTreeMap<String, Vec<u8>>;

/// Encode a file set into a single delimited blob.
pub fn encode(files: &FileSet) -> Vec<u8> {
    let mut blob = Vec::new();
    for (path, content) in files {
        escape_into(path.as_bytes(), &mut blob);
        blob.push(b'|');
        escape_into(content, &mut blob);
        blob.push(b'\n');
    }
    blob
}

/// Decode a blob produced by [`encode`] back into a file set.
///
/// Rejects dangling or unknown escapes, records without a `|` separator,
/// and records not terminated by a newline.
pub fn decode(blob: &[u8]) -> Result<FileSet> {
    let mut files = FileSet::new();
    let mut path: Option<String> = None;
    let mut field: Vec<u8> = Vec::new();
    let mut bytes = blob.iter().copied();

    while let Some(byte) = bytes.next() {
        match byte {
            b'\\' => match bytes.next() {
                Some(b'\\') => field.push(b'\\'),
                Some(b'|') => field.push(b'|'),
                Some(b'n') => field.push(b'\n'),
                Some(other) => bail!("unknown escape '\\{}' in bundle", other as char),
                None => bail!("dangling escape at end of bundle"),
            },
            b'|' => {
                if path.is_some() {
                    bail!("unescaped '|' in record content");
                }
                let raw = std::mem::take(&mut field);
                path = Some(String::from_utf8(raw).context("record path is not valid UTF-8")?);
            }
            b'\n' => {
                let Some(name) = path.take() else {
                    bail!("record without '|' separator");
                };
                files.insert(name, std::mem::take(&mut field));
            }
            other => field.push(other),
        }
    }

    if path.is_some() || !field.is_empty() {
        bail!("truncated record at end of bundle");
    }
    Ok(files)
}

fn escape_into(raw: &[u8], out: &mut Vec<u8>) {
    for &byte in raw {
        match byte {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'|' => out.extend_from_slice(b"\\|"),
            b'\n' => out.extend_from_slice(b"\\n"),
            other => out.push(other),
        }
    }
}
