//! Orchestration for `gnosync commit` (alias `push`).

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::bundle;
use crate::io::collect::collect_files;
use crate::io::gnokey::Signer;

/// Suffix selecting the files that participate in a push.
pub const PUSH_SUFFIX: &str = ".md";

/// Outcome of a successful push, for CLI reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// Relative paths of the files that were bundled, in blob order.
    pub files: Vec<String>,
}

/// Join raw message tokens into the transaction message.
///
/// Tokens are joined with single spaces and surrounding double quotes are
/// trimmed, matching how a shell-quoted message arrives.
pub fn join_message(tokens: &[String]) -> String {
    tokens.join(" ").trim_matches('"').to_string()
}

/// Bundle every Markdown file under `root` and broadcast it as one
/// transaction carrying `message`.
///
/// The file listing is printed before the broadcast so it is on screen when
/// the signer prompts for a passphrase.
pub fn push_files(root: &Path, signer: &dyn Signer, message: &str) -> Result<PushOutcome> {
    if message.is_empty() {
        bail!("commit message must not be empty");
    }

    let files = collect_files(root, PUSH_SUFFIX).context("collect files")?;
    if files.is_empty() {
        bail!("no {PUSH_SUFFIX} files found to commit");
    }

    println!("Files to commit: {}", files.len());
    for path in files.keys() {
        println!("  - {path}");
    }

    debug!(count = files.len(), "encoding bundle");
    let blob = bundle::encode(&files);
    let blob = String::from_utf8(blob).context("bundle contains non-UTF-8 file content")?;

    signer.push_bundle(message, &blob)?;
    info!(count = files.len(), "push broadcast");
    Ok(PushOutcome {
        files: files.into_keys().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;

    use crate::core::bundle::decode;

    /// Signer recording broadcast calls instead of spawning anything.
    #[derive(Default)]
    struct RecordingSigner {
        pushes: RefCell<Vec<(String, String)>>,
    }

    impl Signer for RecordingSigner {
        fn query_file(&self, _filename: &str) -> Result<String> {
            panic!("push must not query");
        }

        fn push_bundle(&self, message: &str, bundle: &str) -> Result<()> {
            self.pushes
                .borrow_mut()
                .push((message.to_string(), bundle.to_string()));
            Ok(())
        }
    }

    #[test]
    fn join_message_joins_tokens_and_trims_quotes() {
        let tokens = vec!["\"fix".to_string(), "the".to_string(), "docs\"".to_string()];
        assert_eq!(join_message(&tokens), "fix the docs");
        assert_eq!(join_message(&["plain".to_string()]), "plain");
    }

    #[test]
    fn broadcasts_bundle_with_message() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.md"), "alpha").expect("write");
        fs::write(temp.path().join("b.md"), "beta").expect("write");
        let signer = RecordingSigner::default();

        let outcome = push_files(temp.path(), &signer, "update docs").expect("push");
        assert_eq!(outcome.files, vec!["a.md", "b.md"]);

        let pushes = signer.pushes.borrow();
        assert_eq!(pushes.len(), 1);
        let (message, bundle) = &pushes[0];
        assert_eq!(message, "update docs");
        assert_eq!(bundle, "a.md|alpha\nb.md|beta\n");
    }

    #[test]
    fn bundle_round_trips_delimiter_heavy_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let content = b"first|row\nsecond\\row\n";
        fs::write(temp.path().join("a.md"), content).expect("write");
        let signer = RecordingSigner::default();

        push_files(temp.path(), &signer, "msg").expect("push");

        let pushes = signer.pushes.borrow();
        let (_, bundle) = &pushes[0];
        assert!(bundle.contains("\\|"));
        assert!(bundle.contains("\\n"));
        let decoded = decode(bundle.as_bytes()).expect("decode");
        assert_eq!(decoded["a.md"], content);
    }

    #[test]
    fn no_markdown_files_fails_without_broadcast() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("notes.txt"), "not markdown").expect("write");
        let signer = RecordingSigner::default();

        let err = push_files(temp.path(), &signer, "msg").expect_err("push should fail");
        assert!(err.to_string().contains("no .md files found"));
        assert!(signer.pushes.borrow().is_empty());
    }

    #[test]
    fn empty_message_fails_without_broadcast() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.md"), "alpha").expect("write");
        let signer = RecordingSigner::default();

        let err = push_files(temp.path(), &signer, "").expect_err("push should fail");
        assert!(err.to_string().contains("message must not be empty"));
        assert!(signer.pushes.borrow().is_empty());
    }

    #[test]
    fn broadcast_failure_propagates() {
        struct FailingSigner;

        impl Signer for FailingSigner {
            fn query_file(&self, _filename: &str) -> Result<String> {
                panic!("push must not query");
            }

            fn push_bundle(&self, _message: &str, _bundle: &str) -> Result<()> {
                bail!("gnokey maketx failed with status Some(1)");
            }
        }

        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.md"), "alpha").expect("write");

        let err = push_files(temp.path(), &FailingSigner, "msg").expect_err("push should fail");
        assert!(err.to_string().contains("gnokey maketx failed"));
    }
}
