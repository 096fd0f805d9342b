//! Core domain types for timeline documents and their curated enhancements.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TimelineError};

/// JSON field names of the timeline document.
pub mod fields {
    pub const DECADES: &str = "decades";
    pub const BIOGRAPHY: &str = "biography";
    pub const CATEGORIES: &str = "categories";
    pub const SUMMARY: &str = "summary";
    pub const KEY_ACHIEVEMENTS: &str = "key_achievements";
    pub const TITLE: &str = "title";
    pub const ENHANCED_DESCRIPTION: &str = "enhanced_description";
    pub const RELATED_THEMES: &str = "related_themes";
    pub const CORPUS_SOURCES: &str = "corpus_sources";
    pub const TIMELINE_HIGHLIGHTS: &str = "timeline_highlights";
}

// ---------------------------------------------------------------------------
// TimelineDocument
// ---------------------------------------------------------------------------

/// A loaded `timeline-data.json` document.
///
/// Kept as an untyped JSON value so unknown fields and key order survive a
/// load/write cycle. Accessors check the shape lazily and report a
/// [`TimelineError::Shape`] on mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimelineDocument(pub Value);

impl TimelineDocument {
    /// Wrap an already-parsed JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level object, mutable.
    pub fn root_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let kind = json_kind(&self.0);
        self.0
            .as_object_mut()
            .ok_or_else(|| TimelineError::shape(format!("document root must be an object, found {kind}")))
    }

    /// The `decades` mapping, if present and an object.
    pub fn decades(&self) -> Option<&Map<String, Value>> {
        self.0.get(fields::DECADES).and_then(Value::as_object)
    }

    /// The `decades` mapping, mutable. Missing or mistyped `decades` is a shape error.
    pub fn decades_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let root = self.root_mut()?;
        match root.get_mut(fields::DECADES) {
            Some(Value::Object(decades)) => Ok(decades),
            Some(other) => Err(TimelineError::shape(format!(
                "`decades` must be an object, found {}",
                json_kind(other)
            ))),
            None => Err(TimelineError::shape("document has no `decades` field")),
        }
    }

    /// The top-level `biography` object, if any.
    pub fn biography(&self) -> Option<&Map<String, Value>> {
        self.0.get(fields::BIOGRAPHY).and_then(Value::as_object)
    }
}

/// Human-readable JSON type name for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Curated content
// ---------------------------------------------------------------------------

/// Biography record stored under the document's `biography` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Biography {
    pub name: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    #[serde(rename = "birthYear")]
    pub birth_year: u16,
    #[serde(rename = "careerStart")]
    pub career_start: u16,
    #[serde(rename = "totalWorks")]
    pub total_works: &'static str,
    pub bio: &'static str,
    pub personal_background: &'static str,
    pub timeline_highlights: Vec<TimelineHighlight>,
    pub awards: Vec<Award>,
}

/// A dated event in the biography.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineHighlight {
    pub year: u16,
    pub event: &'static str,
}

/// An award with year and a short citation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub year: u16,
    pub award: &'static str,
    pub description: &'static str,
}

/// Replacement `summary`/`key_achievements` for one decade.
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeSummary {
    /// Decade label, matched exactly against the keys of `decades`.
    pub decade: &'static str,
    pub summary: &'static str,
    pub key_achievements: Vec<&'static str>,
}

/// Extra description and themes for works whose title contains `match_key`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkEnhancement {
    /// Lowercase substring looked up in the lowercased work title.
    pub match_key: &'static str,
    pub enhanced_description: &'static str,
    pub related_themes: Vec<&'static str>,
}
