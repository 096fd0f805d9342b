//! Timeline document loader.

use std::path::Path;

use tracing::{debug, instrument};

use timeline_enrich_shared::{Result, TimelineDocument, TimelineError};

/// Read and parse a timeline document.
///
/// No schema validation happens here; shape problems surface later, when the
/// merger walks the document.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_timeline(path: &Path) -> Result<TimelineDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| TimelineError::io(path, e))?;

    let doc: TimelineDocument = serde_json::from_str(&content)
        .map_err(|e| TimelineError::parse(format!("invalid JSON in {}: {e}", path.display())))?;

    debug!(
        bytes = content.len(),
        decades = doc.decades().map(|d| d.len()).unwrap_or(0),
        "loaded timeline document"
    );
    Ok(doc)
}
