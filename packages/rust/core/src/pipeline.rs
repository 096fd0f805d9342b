//! End-to-end `enrich` pipeline: load → build content → merge → write → report.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info, instrument};

use timeline_enrich_shared::{EnrichConfig, Result};

use crate::content;
use crate::loader::load_timeline;
use crate::merge::{self, MergeStats};
use crate::report::EnrichmentReport;
use crate::writer::{self, WriteOutcome};

/// Result of the `enrich_timeline` pipeline.
#[derive(Debug)]
pub struct EnrichResult {
    /// Where the document was (or, on a dry run, would have been) written.
    pub output_path: PathBuf,
    /// Merge counters for this run.
    pub stats: MergeStats,
    /// Summary of the enriched document.
    pub report: EnrichmentReport,
    /// `None` on a dry run.
    pub write: Option<WriteOutcome>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new stage.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, result: &EnrichResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &EnrichResult) {}
}

/// Run the full `enrich` pipeline.
///
/// 1. Load the timeline document
/// 2. Install the curated biography
/// 3. Build decade summaries and work enhancements
/// 4. Merge them into the document
/// 5. Write the document (skipped on dry run)
#[instrument(skip_all, fields(timeline = %config.timeline_path.display(), dry_run = config.dry_run))]
pub fn enrich_timeline(
    config: &EnrichConfig,
    progress: &dyn ProgressReporter,
) -> Result<EnrichResult> {
    let start = Instant::now();

    progress.phase("Loading timeline data...");
    let mut doc = load_timeline(&config.timeline_path)?;

    progress.phase("Creating enhanced biography...");
    merge::set_biography(&mut doc, &content::biography())?;

    progress.phase("Creating decade summaries...");
    let summaries = content::decade_summaries();

    progress.phase("Creating work enhancements...");
    let enhancements = content::work_enhancements();

    progress.phase("Applying enhancements...");
    let stats = merge::apply_enhancements(&mut doc, &summaries, &enhancements, &config.corpus_source)?;

    let write = if config.dry_run {
        debug!("dry run, not writing output");
        None
    } else {
        progress.phase(&format!(
            "Writing enhanced timeline to {}...",
            config.output_path.display()
        ));
        Some(writer::write_timeline(&config.output_path, &doc)?)
    };

    let result = EnrichResult {
        output_path: config.output_path.clone(),
        stats,
        report: EnrichmentReport::from_document(&doc),
        write,
        elapsed: start.elapsed(),
    };

    // Progress output owns the terminal until `done`; log only after it.
    progress.done(&result);
    info!(
        works_enhanced = result.report.works_enhanced,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "enrich pipeline complete"
    );

    Ok(result)
}
