//! Lexical confidence scoring for accepted mappings.

use rapidfuzz::fuzz::{partial_ratio, ratio};

use colnorm_model::{CanonicalMapping, ConfidenceRecord};

/// Scores each mapping entry by lexical similarity between the canonical
/// key and the original header.
///
/// Both strings are normalized the same way (lowercase, underscores
/// removed, trimmed), then the better of a best-substring-alignment ratio
/// and a whole-string ratio is taken. A mapped header can be a near-exact
/// substring of the key (or vice versa) while the whole strings differ,
/// and the other way round for near-identical strings with extra
/// characters; the max rewards either signal.
///
/// Scores are in `[0, 1]`, rounded to three decimals. One record per
/// entry, in mapping order. Pure function.
pub fn confidence(mapping: &CanonicalMapping) -> Vec<ConfidenceRecord> {
    mapping
        .iter()
        .map(|entry| {
            let key = normalize(&entry.key);
            let header = normalize(&entry.header);
            let best = partial_ratio(key.chars(), header.chars())
                .max(ratio(key.chars(), header.chars()));
            ConfidenceRecord {
                key: entry.key.clone(),
                value: entry.header.clone(),
                score: round3(best / 100.0),
            }
        })
        .collect()
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('_', "").trim().to_string()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(key: &str, header: &str) -> f64 {
        let mapping: CanonicalMapping = [(key.to_string(), header.to_string())]
            .into_iter()
            .collect();
        confidence(&mapping)[0].score
    }

    #[test]
    fn exact_match_scores_one() {
        assert_eq!(single("color", "color"), 1.0);
    }

    #[test]
    fn case_and_underscores_are_ignored() {
        let upper = single("style_id", "STYLE_ID");
        let compact = single("style_id", "styleid");
        assert_eq!(upper, 1.0);
        assert_eq!(compact, 1.0);
    }

    #[test]
    fn substring_match_beats_whole_string_ratio() {
        // "id" aligns perfectly inside "styleid" even though the whole
        // strings differ in length.
        let score = single("id", "style id");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn unrelated_strings_score_low() {
        assert!(single("color", "2024-12-05") < 0.5);
    }

    #[test]
    fn scores_are_bounded_and_rounded() {
        let mapping: CanonicalMapping = [
            ("style_id".to_string(), "SID".to_string()),
            ("color".to_string(), "shade".to_string()),
            ("2024-06-06".to_string(), "June 06".to_string()),
        ]
        .into_iter()
        .collect();

        let records = confidence(&mapping);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!((0.0..=1.0).contains(&record.score));
            let scaled = record.score * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn output_follows_mapping_order() {
        let mapping: CanonicalMapping = [
            ("color".to_string(), "CLR".to_string()),
            ("style_id".to_string(), "ID".to_string()),
        ]
        .into_iter()
        .collect();

        let records = confidence(&mapping);
        assert_eq!(records[0].key, "color");
        assert_eq!(records[1].key, "style_id");
    }
}
