//! Human-readable summary of what a document contains after enrichment.
//!
//! Purely informational: odd or missing fields count as zero instead of
//! failing.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use timeline_enrich_shared::{TimelineDocument, fields};

/// Per-decade summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeReport {
    pub decade: String,
    /// Summary length in characters.
    pub summary_chars: usize,
    pub key_achievements: usize,
}

/// Enrichment counts for a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Entries in `biography.timeline_highlights`.
    pub highlights: usize,
    /// One entry per decade, in document order.
    pub decades: Vec<DecadeReport>,
    /// Works carrying an `enhanced_description`.
    pub works_enhanced: usize,
}

impl EnrichmentReport {
    pub fn from_document(doc: &TimelineDocument) -> Self {
        let highlights = doc
            .biography()
            .and_then(|bio| bio.get(fields::TIMELINE_HIGHLIGHTS))
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        let mut decades = Vec::new();
        let mut works_enhanced = 0;

        for (label, decade) in doc.decades().into_iter().flatten() {
            let summary_chars = decade
                .get(fields::SUMMARY)
                .and_then(Value::as_str)
                .map_or(0, |s| s.chars().count());
            let key_achievements = decade
                .get(fields::KEY_ACHIEVEMENTS)
                .and_then(Value::as_array)
                .map_or(0, Vec::len);
            decades.push(DecadeReport {
                decade: label.clone(),
                summary_chars,
                key_achievements,
            });

            let works = decade
                .get(fields::CATEGORIES)
                .and_then(Value::as_object)
                .into_iter()
                .flat_map(|categories| categories.values())
                .filter_map(Value::as_array)
                .flatten();
            works_enhanced += works
                .filter(|work| work.get(fields::ENHANCED_DESCRIPTION).is_some())
                .count();
        }

        Self {
            highlights,
            decades,
            works_enhanced,
        }
    }
}

impl fmt::Display for EnrichmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Enhancement Summary ===")?;
        writeln!(
            f,
            "Biography: Added personal_background and {} timeline highlights",
            self.highlights
        )?;
        for decade in &self.decades {
            writeln!(
                f,
                "{}: {} chars summary, {} key achievements",
                decade.decade, decade.summary_chars, decade.key_achievements
            )?;
        }
        writeln!(f)?;
        write!(f, "Works enhanced: {}", self.works_enhanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_enriched_document() {
        let doc = TimelineDocument::new(json!({
            "biography": { "timeline_highlights": [{ "year": 1934, "event": "Born" }, { "year": 1968, "event": "UCR" }] },
            "decades": {
                "1970s": {
                    "summary": "Pionero años",
                    "key_achievements": ["a", "b"],
                    "categories": {
                        "Articles": [{ "title": "x", "enhanced_description": "d" }, { "title": "y" }],
                        "Books - Scholarly": [{ "title": "z", "enhanced_description": "d" }]
                    }
                },
                "1980s": {}
            }
        }));

        let report = EnrichmentReport::from_document(&doc);
        assert_eq!(report.highlights, 2);
        assert_eq!(report.works_enhanced, 2);
        assert_eq!(
            report.decades,
            vec![
                DecadeReport { decade: "1970s".into(), summary_chars: 12, key_achievements: 2 },
                DecadeReport { decade: "1980s".into(), summary_chars: 0, key_achievements: 0 },
            ]
        );
    }

    #[test]
    fn odd_shapes_count_as_zero() {
        let doc = TimelineDocument::new(json!({
            "biography": "n/a",
            "decades": { "1990s": { "summary": 42, "categories": { "Videos": "none" } } }
        }));
        let report = EnrichmentReport::from_document(&doc);
        assert_eq!(report.highlights, 0);
        assert_eq!(report.works_enhanced, 0);
        assert_eq!(report.decades[0].summary_chars, 0);

        let empty = EnrichmentReport::from_document(&TimelineDocument::new(json!([])));
        assert!(empty.decades.is_empty());
    }

    #[test]
    fn display_matches_console_layout() {
        let report = EnrichmentReport {
            highlights: 14,
            decades: vec![DecadeReport {
                decade: "1970s".into(),
                summary_chars: 900,
                key_achievements: 5,
            }],
            works_enhanced: 3,
        };
        let text = report.to_string();
        assert_eq!(
            text,
            "=== Enhancement Summary ===\n\
             Biography: Added personal_background and 14 timeline highlights\n\
             1970s: 900 chars summary, 5 key achievements\n\
             \n\
             Works enhanced: 3"
        );
    }
}
