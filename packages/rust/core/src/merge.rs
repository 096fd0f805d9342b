//! Merge curated content into a loaded timeline document.
//!
//! Decade summaries match decade labels exactly. Work enhancements match
//! by substring: the lowercased work title is checked against each
//! enhancement key in declaration order and only the first hit is applied.
//! Fields are only ever inserted or overwritten, never removed.

use std::fmt::Display;

use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use timeline_enrich_shared::{
    Biography, DecadeSummary, Result, TimelineDocument, TimelineError, WorkEnhancement, fields,
    json_kind,
};

/// Counters from a merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Decades whose summary and achievements were replaced.
    pub decades_updated: usize,
    /// Summary labels with no matching decade in the document.
    pub decades_missing: usize,
    /// Work records visited.
    pub works_seen: usize,
    /// Work records that received an enhancement in this pass.
    pub works_enhanced: usize,
}

/// Apply decade summaries and work enhancements in one pass.
#[instrument(skip_all, fields(summaries = summaries.len(), enhancements = enhancements.len()))]
pub fn apply_enhancements(
    doc: &mut TimelineDocument,
    summaries: &[DecadeSummary],
    enhancements: &[WorkEnhancement],
    corpus_source: &str,
) -> Result<MergeStats> {
    let mut stats = MergeStats::default();
    apply_decade_summaries(doc, summaries, &mut stats)?;
    apply_work_enhancements(doc, enhancements, corpus_source, &mut stats)?;

    debug!(
        decades_updated = stats.decades_updated,
        decades_missing = stats.decades_missing,
        works_seen = stats.works_seen,
        works_enhanced = stats.works_enhanced,
        "merge complete"
    );
    Ok(stats)
}

/// Install the biography under the top-level `biography` key.
///
/// When a biography object already exists its fields are overwritten one by
/// one, so fields the curated record does not know about are kept.
pub fn set_biography(doc: &mut TimelineDocument, biography: &Biography) -> Result<()> {
    let Value::Object(curated) = serde_json::to_value(biography)
        .map_err(|e| TimelineError::validation(format!("biography serialization failed: {e}")))?
    else {
        return Err(TimelineError::validation("biography did not serialize to an object"));
    };

    let root = doc.root_mut()?;
    match root.get_mut(fields::BIOGRAPHY) {
        Some(Value::Object(existing)) => {
            debug!(existing_fields = existing.len(), "updating existing biography");
            existing.extend(curated);
        }
        _ => {
            root.insert(fields::BIOGRAPHY.into(), Value::Object(curated));
        }
    }
    Ok(())
}

/// Find the enhancement for a work title: the first key, in slice order,
/// contained in the lowercased title.
pub fn find_enhancement<'a>(
    title: &str,
    enhancements: &'a [WorkEnhancement],
) -> Option<&'a WorkEnhancement> {
    let lowered = title.to_lowercase();
    enhancements.iter().find(|e| lowered.contains(e.match_key))
}

fn apply_decade_summaries(
    doc: &mut TimelineDocument,
    summaries: &[DecadeSummary],
    stats: &mut MergeStats,
) -> Result<()> {
    let decades = doc.decades_mut()?;

    for summary in summaries {
        let record = match decades.get_mut(summary.decade) {
            Some(Value::Object(record)) => record,
            Some(other) => {
                return Err(shape_at(
                    format_args!("decades.{}", summary.decade),
                    "an object",
                    other,
                ));
            }
            None => {
                debug!(decade = summary.decade, "decade not in document, skipping summary");
                stats.decades_missing += 1;
                continue;
            }
        };

        record.insert(fields::SUMMARY.into(), Value::from(summary.summary));
        record.insert(
            fields::KEY_ACHIEVEMENTS.into(),
            json!(summary.key_achievements),
        );
        stats.decades_updated += 1;
        debug!(
            decade = summary.decade,
            achievements = summary.key_achievements.len(),
            "decade summary applied"
        );
    }
    Ok(())
}

fn apply_work_enhancements(
    doc: &mut TimelineDocument,
    enhancements: &[WorkEnhancement],
    corpus_source: &str,
    stats: &mut MergeStats,
) -> Result<()> {
    let decades = doc.decades_mut()?;

    for (label, decade) in decades.iter_mut() {
        let decade = match decade {
            Value::Object(decade) => decade,
            other => return Err(shape_at(format_args!("decades.{label}"), "an object", other)),
        };
        let categories = match decade.get_mut(fields::CATEGORIES) {
            Some(Value::Object(categories)) => categories,
            Some(other) => {
                return Err(shape_at(
                    format_args!("decades.{label}.categories"),
                    "an object",
                    other,
                ));
            }
            None => continue,
        };

        for (category, works) in categories.iter_mut() {
            let works = match works {
                Value::Array(works) => works,
                other => {
                    return Err(shape_at(
                        format_args!("decades.{label}.categories.{category}"),
                        "an array",
                        other,
                    ));
                }
            };

            for (index, work) in works.iter_mut().enumerate() {
                let work = match work {
                    Value::Object(work) => work,
                    other => {
                        return Err(shape_at(
                            format_args!("decades.{label}.categories.{category}[{index}]"),
                            "an object",
                            other,
                        ));
                    }
                };
                stats.works_seen += 1;

                let title = work_title(work).map_err(|found| {
                    TimelineError::shape(format!(
                        "decades.{label}.categories.{category}[{index}].title must be a string, found {found}"
                    ))
                })?;
                let Some(enhancement) = find_enhancement(title, enhancements) else {
                    continue;
                };
                debug!(
                    decade = %label,
                    title,
                    key = enhancement.match_key,
                    "work enhancement applied"
                );

                work.insert(
                    fields::ENHANCED_DESCRIPTION.into(),
                    Value::from(enhancement.enhanced_description),
                );
                work.insert(
                    fields::RELATED_THEMES.into(),
                    json!(enhancement.related_themes),
                );
                work.insert(fields::CORPUS_SOURCES.into(), json!([corpus_source]));
                stats.works_enhanced += 1;
            }
        }
    }
    Ok(())
}

/// A work's title. A missing title reads as empty and matches nothing.
fn work_title(work: &Map<String, Value>) -> std::result::Result<&str, &'static str> {
    match work.get(fields::TITLE) {
        Some(Value::String(title)) => Ok(title),
        Some(other) => Err(json_kind(other)),
        None => Ok(""),
    }
}

fn shape_at(path: impl Display, expected: &str, found: &Value) -> TimelineError {
    TimelineError::shape(format!(
        "{path} must be {expected}, found {}",
        json_kind(found)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    const SOURCE: &str = "dr-cortes-rag-corpus/extracted/blog_posts/";

    fn merge(doc: &mut TimelineDocument) -> MergeStats {
        apply_enhancements(
            doc,
            &content::decade_summaries(),
            &content::work_enhancements(),
            SOURCE,
        )
        .expect("merge")
    }

    fn doc_with_works(titles: &[&str]) -> TimelineDocument {
        let works: Vec<Value> = titles
            .iter()
            .map(|t| json!({ "title": t, "year": 2000 }))
            .collect();
        TimelineDocument::new(json!({
            "decades": { "2000s": { "categories": { "Articles": works } } }
        }))
    }

    fn work(doc: &TimelineDocument, index: usize) -> &Value {
        &doc.as_value()["decades"]["2000s"]["categories"]["Articles"][index]
    }

    #[test]
    fn empty_decade_gets_summary_and_achievements() {
        let mut doc = TimelineDocument::new(json!({ "decades": { "1970s": {} } }));
        let stats = merge(&mut doc);

        let summaries = content::decade_summaries();
        let seventies = &doc.as_value()["decades"]["1970s"];
        assert_eq!(seventies["summary"], summaries[0].summary);
        assert_eq!(seventies["key_achievements"].as_array().unwrap().len(), 5);
        assert_eq!(stats.decades_updated, 1);
        assert_eq!(stats.decades_missing, 5);
    }

    #[test]
    fn every_shared_decade_gets_builder_summary() {
        let mut doc = TimelineDocument::new(json!({
            "decades": {
                "1970s": { "summary": "old" },
                "1980s": { "summary": "old" },
                "1990s": {},
                "2000s": {},
                "2010s": {},
                "2020s": {}
            }
        }));
        merge(&mut doc);

        for summary in content::decade_summaries() {
            let decade = &doc.as_value()["decades"][summary.decade];
            assert_eq!(decade["summary"], summary.summary);
            assert_eq!(decade["key_achievements"], json!(summary.key_achievements));
        }
    }

    #[test]
    fn unknown_decades_are_untouched() {
        let original = json!({
            "decades": {
                "1960s": {
                    "summary": "Graduate school years",
                    "key_achievements": ["PhD"],
                    "theme": "Beginnings"
                }
            }
        });
        let mut doc = TimelineDocument::new(original.clone());
        let stats = merge(&mut doc);
        assert_eq!(doc.as_value(), &original);
        assert_eq!(stats.decades_updated, 0);
    }

    #[test]
    fn rose_hill_gets_memoir_theme() {
        let mut doc = doc_with_works(&["Rose Hill: An Intermarriage before Its Time"]);
        merge(&mut doc);

        let work = work(&doc, 0);
        let themes = work["related_themes"].as_array().unwrap();
        assert!(themes.contains(&json!("memoir")));
        assert_eq!(work["corpus_sources"], json!([SOURCE]));
        assert!(work["enhanced_description"].as_str().unwrap().starts_with("This memoir"));
    }

    #[test]
    fn unmatched_work_is_unchanged() {
        let mut doc = doc_with_works(&["Unrelated Essay"]);
        let before = work(&doc, 0).clone();
        let stats = merge(&mut doc);
        assert_eq!(work(&doc, 0), &before);
        assert_eq!(stats.works_seen, 1);
        assert_eq!(stats.works_enhanced, 0);
    }

    #[test]
    fn first_declared_key_wins() {
        // Contains both "chicano history" (1st) and "ethnic studies" (6th).
        let mut doc = doc_with_works(&["Ethnic Studies and Chicano History"]);
        merge(&mut doc);

        let themes = &work(&doc, 0)["related_themes"];
        assert_eq!(
            themes,
            &json!(["ethnic studies", "curriculum innovation", "inclusive pedagogy"])
        );
    }

    #[test]
    fn find_enhancement_respects_slice_order() {
        let broad = WorkEnhancement {
            match_key: "dora",
            enhanced_description: "broad",
            related_themes: vec!["broad"],
        };
        let narrow = WorkEnhancement {
            match_key: "dora the explorer",
            enhanced_description: "narrow",
            related_themes: vec!["narrow"],
        };

        let ordered = [broad.clone(), narrow.clone()];
        let hit = find_enhancement("Dora the Explorer", &ordered).unwrap();
        assert_eq!(hit.match_key, "dora");

        let reversed = [narrow, broad];
        let hit = find_enhancement("Dora the Explorer", &reversed).unwrap();
        assert_eq!(hit.match_key, "dora the explorer");
    }

    #[test]
    fn title_match_ignores_case() {
        let enhancements = content::work_enhancements();
        let hit = find_enhancement("THE CHILDREN ARE WATCHING: How the Media Teach", &enhancements);
        assert_eq!(hit.map(|e| e.match_key), Some("children are watching"));
    }

    #[test]
    fn accented_title_does_not_match_plain_key() {
        let enhancements = content::work_enhancements();
        assert!(find_enhancement("Gaúcho Politics in Brazil", &enhancements).is_none());
        assert!(find_enhancement("Gaucho Politics in Brazil", &enhancements).is_some());
    }

    #[test]
    fn existing_work_fields_survive() {
        let mut doc = TimelineDocument::new(json!({
            "decades": { "2020s": { "categories": { "Consulting Projects": [
                { "title": "The Cheech", "year": 2022, "url": "https://thecheech.org", "related_themes": ["old"] }
            ] } } }
        }));
        merge(&mut doc);

        let work = &doc.as_value()["decades"]["2020s"]["categories"]["Consulting Projects"][0];
        assert_eq!(work["year"], 2022);
        assert_eq!(work["url"], "https://thecheech.org");
        assert!(work["related_themes"].as_array().unwrap().contains(&json!("Chicano art")));
        let keys: Vec<&str> = work.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["title", "year", "url", "related_themes", "enhanced_description", "corpus_sources"]
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let mut doc = TimelineDocument::new(json!({
            "decades": {
                "1970s": { "categories": { "Articles": [{ "title": "Teaching Chicano History" }] } },
                "2010s": { "categories": { "Biography/Memoir": [{ "title": "Rose Hill" }] } }
            }
        }));
        merge(&mut doc);
        let once = doc.clone();
        merge(&mut doc);
        assert_eq!(doc, once);
    }

    #[test]
    fn work_without_title_is_skipped() {
        let mut doc = TimelineDocument::new(json!({
            "decades": { "1990s": { "categories": { "Videos": [{ "year": 1995 }] } } }
        }));
        let stats = merge(&mut doc);
        assert_eq!(stats.works_seen, 1);
        assert_eq!(stats.works_enhanced, 0);
        assert_eq!(doc.as_value()["decades"]["1990s"]["categories"]["Videos"][0], json!({ "year": 1995 }));
    }

    #[test]
    fn decade_without_categories_is_fine() {
        let mut doc = TimelineDocument::new(json!({ "decades": { "1980s": { "theme": "Leader" } } }));
        let stats = merge(&mut doc);
        assert_eq!(stats.works_seen, 0);
        assert_eq!(doc.as_value()["decades"]["1980s"]["theme"], "Leader");
    }

    #[test]
    fn missing_decades_is_shape_error() {
        let mut doc = TimelineDocument::new(json!({ "biography": {} }));
        let result = apply_enhancements(&mut doc, &[], &[], SOURCE);
        assert!(matches!(result, Err(TimelineError::Shape { .. })));
    }

    #[test]
    fn non_object_work_is_shape_error() {
        let mut doc = TimelineDocument::new(json!({
            "decades": { "2000s": { "categories": { "Articles": ["just a string"] } } }
        }));
        let err = apply_enhancements(&mut doc, &[], &content::work_enhancements(), SOURCE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "shape error: decades.2000s.categories.Articles[0] must be an object, found a string"
        );
    }

    #[test]
    fn numeric_title_is_shape_error() {
        let mut doc = TimelineDocument::new(json!({
            "decades": { "2000s": { "categories": { "Articles": [{ "title": 2000 }] } } }
        }));
        let err = apply_enhancements(&mut doc, &[], &content::work_enhancements(), SOURCE).unwrap_err();
        assert!(err.to_string().contains("title must be a string, found a number"));
    }

    #[test]
    fn non_object_decade_with_summary_is_shape_error() {
        let mut doc = TimelineDocument::new(json!({ "decades": { "1970s": [] } }));
        let result = apply_enhancements(&mut doc, &content::decade_summaries(), &[], SOURCE);
        assert!(matches!(result, Err(TimelineError::Shape { .. })));
    }

    #[test]
    fn biography_is_inserted() {
        let mut doc = TimelineDocument::new(json!({ "decades": {} }));
        set_biography(&mut doc, &content::biography()).unwrap();

        let bio = doc.biography().unwrap();
        assert_eq!(bio["name"], "Dr. Carlos E. Cortés");
        assert_eq!(bio["timeline_highlights"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn biography_merge_keeps_unknown_fields() {
        let mut doc = TimelineDocument::new(json!({
            "biography": { "photo": "cortes.jpg", "bio": "short bio" },
            "decades": {}
        }));
        set_biography(&mut doc, &content::biography()).unwrap();

        let bio = doc.biography().unwrap();
        assert_eq!(bio["photo"], "cortes.jpg");
        assert_ne!(bio["bio"], "short bio");
        assert_eq!(bio.keys().next().map(String::as_str), Some("photo"));
    }
}
