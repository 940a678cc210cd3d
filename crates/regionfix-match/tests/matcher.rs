#![allow(missing_docs)]

use std::path::PathBuf;

use proptest::prelude::*;
use regionfix_common::{char_len, normalize_for_match, normalize_fuzzy_key};
use regionfix_match::{MatchKind, Matcher, RegionMatch, edit_distance, max_distance};
use regionfix_reference::{DatasetLayout, ReferenceIndex, dataset_path};

fn sample_index() -> ReferenceIndex {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ReferenceIndex::load(&dataset_path(&dir), &DatasetLayout::default())
        .expect("load sample dataset")
}

#[test]
fn every_reference_pair_matches_itself() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    for pair in index.pairs() {
        assert_eq!(
            matcher.find_province_exact(&pair.province),
            Some(pair.province.as_str())
        );
        assert_eq!(
            matcher.find_district_exact_in_province(&pair.province, &pair.district),
            Some(pair.district.as_str())
        );
        assert_eq!(
            matcher.find_province_by_district_pair(&pair.province, &pair.district),
            Some(pair.province.as_str())
        );
    }
}

#[test]
fn misspelled_province_resolves_fuzzily() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    let found = matcher.match_province("Anakra").expect("fuzzy province");
    assert_eq!(found.value, "ANKARA");
    assert_eq!(found.kind, MatchKind::Fuzzy);
    assert_eq!(matcher.find_province_fuzzy("izmir"), Some("IZMIR"));
    assert_eq!(matcher.find_province_fuzzy("XxxYyyZzz"), None);
}

#[test]
fn turkish_spelling_matches_ascii_reference() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    assert_eq!(
        matcher.find_district_fuzzy_in_province("ISTANBUL", "Kadıköy"),
        Some("KADIKOY")
    );
    assert_eq!(
        matcher.find_province_and_district_by_district_fuzzy("Kadıköy"),
        Some(RegionMatch::new("ISTANBUL", "KADIKOY"))
    );
}

#[test]
fn shared_district_names_need_a_province() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    assert_eq!(
        matcher.find_province_and_district_by_district_fuzzy("MERKEZ"),
        None
    );
    assert_eq!(
        matcher.find_province_and_district_by_district_fuzzy("Yenişehir"),
        None
    );
    assert_eq!(
        matcher.find_district_fuzzy_in_province("MERSIN", "Yenişehir"),
        Some("YENISEHIR")
    );
}

#[test]
fn long_text_and_address_search() {
    let index = sample_index();
    let matcher = Matcher::new(&index);
    assert_eq!(
        matcher.extract_province_district_from_long_text(
            "Alsancak Mah. 1453 Sok. No:7 D:2 Konak/IZMIR"
        ),
        Some(RegionMatch::new("IZMIR", "KONAK"))
    );
    assert_eq!(
        matcher.resolve_district_from_free_address("Caferağa Mah. Moda Cd. Kadıköy", "ISTANBUL"),
        Some("KADIKOY")
    );
}

proptest! {
    #[test]
    fn fuzzy_province_stays_within_threshold(input in "[A-Za-zÇĞİÖŞÜçğıöşü]{1,12}") {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        if let Some(found) = matcher.match_province(&input) {
            let threshold = max_distance(char_len(&normalize_for_match(&input)));
            let distance = edit_distance(&normalize_fuzzy_key(&input), &normalize_fuzzy_key(found.value));
            prop_assert!(found.is_exact() || distance <= threshold);
        }
    }
}
