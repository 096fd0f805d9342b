//! Shared types, error model, and configuration for timeline-enrich.
//!
//! This crate is the foundation depended on by the other timeline-enrich crates.
//! It provides:
//! - [`TimelineError`], the unified error type
//! - Domain types ([`TimelineDocument`], [`Biography`], [`DecadeSummary`], [`WorkEnhancement`])
//! - Configuration ([`AppConfig`], [`EnrichConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, EnrichConfig, EnrichmentSettings, PathsConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{Result, TimelineError};
pub use types::{
    Award, Biography, DecadeSummary, TimelineDocument, TimelineHighlight, WorkEnhancement, fields,
    json_kind,
};
