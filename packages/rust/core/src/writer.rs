//! Writes the enriched document back to disk.
//!
//! Output is 2-space indented JSON with non-ASCII characters written as-is.
//! The bytes go to a sibling temp file first, which is then renamed over the
//! target, so an interrupted run never leaves a truncated document.
//! The rename carries the target's existing permissions over, but a symlinked
//! target is replaced by a regular file rather than written through.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

use timeline_enrich_shared::{Result, TimelineDocument, TimelineError};

/// What a write did.
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    /// File that was written.
    pub path: PathBuf,
    /// Size of the serialized document.
    pub size_bytes: usize,
    /// SHA-256 of the serialized document (hex).
    pub sha256: String,
    /// The file already held exactly these bytes before the write.
    pub unchanged: bool,
}

/// Serialize a document the way it is stored on disk.
pub fn to_pretty_json(doc: &TimelineDocument) -> Result<String> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| TimelineError::validation(format!("JSON serialization failed: {e}")))
}

/// Serialize `doc` and overwrite `path` with it.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_timeline(path: &Path, doc: &TimelineDocument) -> Result<WriteOutcome> {
    let json = to_pretty_json(doc)?;
    let sha256 = content_hash(json.as_bytes());

    let unchanged = match std::fs::read(path) {
        Ok(previous) => content_hash(&previous) == sha256,
        Err(_) => false,
    };
    let permissions = std::fs::metadata(path).ok().map(|m| m.permissions());

    let temp = temp_path(path);
    if let Err(e) = std::fs::write(&temp, &json) {
        let _ = std::fs::remove_file(&temp);
        return Err(TimelineError::io(&temp, e));
    }
    if let Some(permissions) = permissions {
        if let Err(e) = std::fs::set_permissions(&temp, permissions) {
            let _ = std::fs::remove_file(&temp);
            return Err(TimelineError::io(&temp, e));
        }
    }
    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(TimelineError::io(path, e));
    }
    debug!(temp = %temp.display(), "renamed temp file over target");

    debug!(bytes = json.len(), unchanged, "wrote timeline document");

    Ok(WriteOutcome {
        path: path.to_path_buf(),
        size_bytes: json.len(),
        sha256,
        unchanged,
    })
}

/// `dir/.name.tmp` next to the target.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "timeline.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
