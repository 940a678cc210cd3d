//! Edit-distance thresholds and best-candidate selection.
//!
//! Distances are Levenshtein distances between folded keys
//! ([`normalize_fuzzy_key`]), so diacritics never count as edits.

use rapidfuzz::distance::levenshtein;
use regionfix_common::{char_len, normalize_for_match, normalize_fuzzy_key};

/// Largest accepted edit distance for an input of `len` characters.
pub fn max_distance(len: usize) -> usize {
    match len {
        0..=3 => 1,
        4..=6 => 2,
        _ => 3,
    }
}

/// Levenshtein distance in characters.
pub fn edit_distance(left: &str, right: &str) -> usize {
    levenshtein::distance(left.chars(), right.chars())
}

/// Picks the candidate closest to `input` within the length threshold.
///
/// Only a strictly smaller distance replaces the current best, so ties keep
/// the earliest candidate. Blank input never matches.
pub fn best_fuzzy<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized = normalize_for_match(input);
    if normalized.is_empty() {
        return None;
    }
    let threshold = max_distance(char_len(&normalized));
    let key = normalize_fuzzy_key(input);

    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let distance = edit_distance(&key, &normalize_fuzzy_key(candidate));
        if distance > threshold {
            continue;
        }
        if best.is_none_or(|(_, current)| distance < current) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_by_length() {
        assert_eq!(max_distance(0), 1);
        assert_eq!(max_distance(3), 1);
        assert_eq!(max_distance(4), 2);
        assert_eq!(max_distance(6), 2);
        assert_eq!(max_distance(7), 3);
        assert_eq!(max_distance(40), 3);
    }

    #[test]
    fn distance_counts_characters() {
        assert_eq!(edit_distance("ANAKRA", "ANKARA"), 2);
        assert_eq!(edit_distance("KADIKÖY", "KADIKOY"), 1);
        assert_eq!(edit_distance("", "ABC"), 3);
    }

    #[test]
    fn picks_closest_candidate() {
        let candidates = ["ADANA", "ANKARA", "ANTALYA"];
        assert_eq!(best_fuzzy("Anakra", candidates), Some("ANKARA"));
        assert_eq!(best_fuzzy("Antalia", candidates), Some("ANTALYA"));
    }

    #[test]
    fn folded_keys_ignore_diacritics() {
        assert_eq!(best_fuzzy("Kadıköy", ["KADIKOY"]), Some("KADIKOY"));
        assert_eq!(best_fuzzy("KADIKOY", ["KADIKÖY"]), Some("KADIKÖY"));
    }

    #[test]
    fn ties_keep_first_candidate() {
        assert_eq!(best_fuzzy("KONAX", ["KONAK", "KONAY"]), Some("KONAK"));
    }

    #[test]
    fn rejects_beyond_threshold_and_blank() {
        assert_eq!(best_fuzzy("XxxYyyZzz", ["ADANA", "ANKARA"]), None);
        assert_eq!(best_fuzzy("   ", ["ADANA"]), None);
        assert_eq!(best_fuzzy("ADANA", std::iter::empty()), None);
    }
}
