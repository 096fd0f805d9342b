//! Core pipeline and domain logic for timeline-enrich.
//!
//! This crate ties together loading, the curated content builders, the
//! merger and the writer into the end-to-end `enrich_timeline` workflow.

pub mod content;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod report;
pub mod writer;
