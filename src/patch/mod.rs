pub mod template;

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::PageConfig;

/// Marker substring signalling the page already wires up an effect hook.
const EFFECT_MARKER: &str = "useEffect";

/// Marker substring signalling the fetch function is already defined.
const FETCH_FN_MARKER: &str = "fetchData";

/// The import fragment the rewrite anchors on. Must appear verbatim; the
/// substitution silently no-ops otherwise.
const IMPORT_FRAGMENT: &str = "import { useState }";
const IMPORT_REPLACEMENT: &str = "import { useState, useEffect }";

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Failed to read page file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to write page file: {0}")]
    FileWrite(std::io::Error),
}

/// Outcome of patching one page. Printed and discarded; nothing is
/// persisted about past runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The page needed fetch logic (the import line was extended where the
    /// anchor fragment was present).
    Changed,
    /// Both markers were already present, so the page was left alone.
    Skipped,
}

/// Decide what to do with a page's content, without touching the filesystem.
///
/// Returns the outcome and the (possibly rewritten) content. The skip check
/// is an idempotence guard, not a content-correctness check: it only tests
/// for the marker substrings, so unrelated text containing both markers
/// produces a false "already patched". When the anchor import fragment is
/// missing the rewrite is a silent no-op and the outcome is still Changed.
pub fn rewrite(content: &str) -> (PatchOutcome, String) {
    if content.contains(EFFECT_MARKER) && content.contains(FETCH_FN_MARKER) {
        return (PatchOutcome::Skipped, content.to_string());
    }

    let rewritten = if !content.contains(EFFECT_MARKER) {
        content.replace(IMPORT_FRAGMENT, IMPORT_REPLACEMENT)
    } else {
        content.to_string()
    };

    (PatchOutcome::Changed, rewritten)
}

/// Patch a single page file.
///
/// Reads the file, applies `rewrite`, and persists the result only when
/// `write` is set and the content actually changed. A read failure aborts
/// the whole run; there is no per-file isolation. The fetch calls and
/// state setters in the page config are never inserted here — only the
/// import line is touched.
#[instrument(skip(page), fields(path = %path.display()))]
pub fn patch_file(path: &Path, page: &PageConfig, write: bool) -> Result<PatchOutcome, PatchError> {
    let content = fs::read_to_string(path).map_err(PatchError::FileRead)?;
    debug!(bytes = content.len(), fetches = page.fetches.len(), "read page file");

    let (outcome, rewritten) = rewrite(&content);

    if write && outcome == PatchOutcome::Changed && rewritten != content {
        fs::write(path, &rewritten).map_err(PatchError::FileWrite)?;
        debug!("wrote import rewrite back to disk");
    }

    debug!(?outcome, "patched page");
    Ok(outcome)
}
