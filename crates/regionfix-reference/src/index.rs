//! In-memory lookup indices over the reference dataset.
//!
//! All keys are normalized with [`normalize_for_match`] (structural keys) or
//! [`normalize_fuzzy_key`] (folded keys); all values hold the reference
//! spelling. Districts that occur under more than one province are pruned
//! from the unique-district lookups while the index is being built, and a
//! pruned name is never re-admitted by a later province.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::time::Instant;

use regionfix_common::{normalize_for_match, normalize_fuzzy_key};
use regionfix_model::RegionPair;
use tracing::info;

use crate::error::ReferenceError;
use crate::loader::{DatasetLayout, visit_region_pairs};

/// Builds the composite key used by the pair lookup.
pub fn pair_key(province_key: &str, district_key: &str) -> String {
    format!("{province_key}|{district_key}")
}

/// Immutable set of lookup structures built from the reference dataset.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// Normalized province key to first-seen reference spelling.
    province_by_key: HashMap<String, String>,
    /// Reference province spellings in first-seen order.
    provinces: Vec<String>,
    /// Normalized province key to de-duplicated reference district spellings.
    districts_by_province: HashMap<String, Vec<String>>,
    /// Normalized district key to province, for districts unique across the dataset.
    province_by_unique_district: HashMap<String, String>,
    /// `province|district` normalized key to reference province spelling.
    province_by_pair: HashMap<String, String>,
    /// Every distinct pair in reference spelling, first-seen order.
    pairs: Vec<RegionPair>,
    /// Folded district key to pair, for districts unique across the dataset.
    pair_by_folded_district: HashMap<String, RegionPair>,
}

impl ReferenceIndex {
    /// Loads and indexes the dataset at `path`.
    pub fn load(path: &Path, layout: &DatasetLayout) -> Result<Self, ReferenceError> {
        let start = Instant::now();
        let mut builder = ReferenceIndexBuilder::new();
        visit_region_pairs(path, layout, |pair| {
            builder.push(&pair.province, &pair.district);
        })?;
        let index = builder.build();
        info!(
            path = %path.display(),
            provinces = index.province_count(),
            pairs = index.pair_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "reference index built"
        );
        Ok(index)
    }

    /// Indexes an in-memory sequence of pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = RegionPair>) -> Self {
        let mut builder = ReferenceIndexBuilder::new();
        for pair in pairs {
            builder.push(&pair.province, &pair.district);
        }
        builder.build()
    }

    /// Reference province spellings in dataset order.
    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    /// Every distinct (province, district) pair in dataset order.
    pub fn pairs(&self) -> &[RegionPair] {
        &self.pairs
    }

    pub fn province_count(&self) -> usize {
        self.provinces.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains_province_key(&self, province_key: &str) -> bool {
        self.province_by_key.contains_key(province_key)
    }

    /// Reference spelling for a normalized province key.
    pub fn province_for_key(&self, province_key: &str) -> Option<&str> {
        self.province_by_key.get(province_key).map(String::as_str)
    }

    /// Districts of a province, looked up by normalized province key.
    ///
    /// Unknown provinces yield an empty slice.
    pub fn districts_of(&self, province_key: &str) -> &[String] {
        self.districts_by_province
            .get(province_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Province of an exact (normalized) pair.
    pub fn province_for_pair(&self, province_key: &str, district_key: &str) -> Option<&str> {
        self.province_by_pair
            .get(&pair_key(province_key, district_key))
            .map(String::as_str)
    }

    /// Province owning a district name that occurs under exactly one province.
    pub fn province_for_unique_district(&self, district_key: &str) -> Option<&str> {
        self.province_by_unique_district
            .get(district_key)
            .map(String::as_str)
    }

    /// Pair owning a folded district key that occurs under exactly one province.
    pub fn pair_for_folded_district(&self, folded_key: &str) -> Option<&RegionPair> {
        self.pair_by_folded_district.get(folded_key)
    }
}

/// Uniqueness slot used while building the unique-district lookups.
#[derive(Debug)]
enum Slot<T> {
    Unique { province_key: String, value: T },
    Ambiguous,
}

impl<T> Slot<T> {
    fn into_unique(self) -> Option<T> {
        match self {
            Slot::Unique { value, .. } => Some(value),
            Slot::Ambiguous => None,
        }
    }
}

/// Records `value` under `key` unless another province already claimed it.
///
/// The first value seen for a province wins; a second province turns the
/// slot ambiguous for good.
fn claim<T>(slots: &mut HashMap<String, Slot<T>>, key: String, province_key: &str, value: T) {
    match slots.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(Slot::Unique {
                province_key: province_key.to_string(),
                value,
            });
        }
        Entry::Occupied(mut entry) => {
            let conflict = matches!(
                entry.get(),
                Slot::Unique { province_key: owner, .. } if owner != province_key
            );
            if conflict {
                entry.insert(Slot::Ambiguous);
            }
        }
    }
}

/// Incremental builder for [`ReferenceIndex`].
#[derive(Debug, Default)]
pub struct ReferenceIndexBuilder {
    index: ReferenceIndex,
    unique_district: HashMap<String, Slot<String>>,
    folded_district: HashMap<String, Slot<RegionPair>>,
}

impl ReferenceIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one dataset row. Blank names and repeated pairs are ignored.
    pub fn push(&mut self, province: &str, district: &str) {
        let province = province.trim();
        let district = district.trim();
        let province_key = normalize_for_match(province);
        let district_key = normalize_for_match(district);
        if province_key.is_empty() || district_key.is_empty() {
            return;
        }

        let key = pair_key(&province_key, &district_key);
        if self.index.province_by_pair.contains_key(&key) {
            return;
        }
        self.index
            .province_by_pair
            .insert(key, province.to_string());

        if let Entry::Vacant(entry) = self.index.province_by_key.entry(province_key.clone()) {
            entry.insert(province.to_string());
            self.index.provinces.push(province.to_string());
        }

        self.index
            .districts_by_province
            .entry(province_key.clone())
            .or_default()
            .push(district.to_string());

        let canonical = RegionPair::new(province, district);
        claim(
            &mut self.unique_district,
            district_key,
            &province_key,
            province.to_string(),
        );
        claim(
            &mut self.folded_district,
            normalize_fuzzy_key(district),
            &province_key,
            canonical.clone(),
        );
        self.index.pairs.push(canonical);
    }

    pub fn build(self) -> ReferenceIndex {
        let mut index = self.index;
        index.province_by_unique_district = self
            .unique_district
            .into_iter()
            .filter_map(|(key, slot)| slot.into_unique().map(|value| (key, value)))
            .collect();
        index.pair_by_folded_district = self
            .folded_district
            .into_iter()
            .filter_map(|(key, slot)| slot.into_unique().map(|value| (key, value)))
            .collect();
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(rows: &[(&str, &str)]) -> ReferenceIndex {
        ReferenceIndex::from_pairs(rows.iter().map(|(p, d)| RegionPair::new(*p, *d)))
    }

    #[test]
    fn duplicate_pairs_collapse() {
        let idx = index(&[("ADANA", "CEYHAN"), ("ADANA", "CEYHAN"), ("ADANA", "SEYHAN")]);
        assert_eq!(idx.pair_count(), 2);
        assert_eq!(idx.districts_of("ADANA"), ["CEYHAN", "SEYHAN"]);
        assert_eq!(idx.provinces(), ["ADANA"]);
    }

    #[test]
    fn conflicting_district_is_pruned() {
        let idx = index(&[("BOLU", "MERKEZ"), ("DUZCE", "MERKEZ")]);
        assert_eq!(idx.province_for_unique_district("MERKEZ"), None);
        assert!(idx.pair_for_folded_district("MERKEZ").is_none());
        assert_eq!(idx.province_for_pair("BOLU", "MERKEZ"), Some("BOLU"));
    }

    #[test]
    fn third_province_cannot_readmit_pruned_district() {
        let idx = index(&[("BOLU", "MERKEZ"), ("DUZCE", "MERKEZ"), ("KARS", "MERKEZ")]);
        assert_eq!(idx.province_for_unique_district("MERKEZ"), None);
        assert!(idx.pair_for_folded_district("MERKEZ").is_none());
    }

    #[test]
    fn folded_key_keeps_first_spelling_within_province() {
        let idx = index(&[("İSTANBUL", "KADIKÖY"), ("İSTANBUL", "KADIKOY")]);
        let pair = idx.pair_for_folded_district("KADIKOY").expect("unique folded district");
        assert_eq!(pair.district, "KADIKÖY");
        assert_eq!(idx.districts_of("İSTANBUL").len(), 2);
    }

    #[test]
    fn folded_collision_across_provinces_is_pruned() {
        let idx = index(&[("BURSA", "YENİŞEHİR"), ("MERSİN", "YENISEHIR")]);
        assert!(idx.pair_for_folded_district("YENISEHIR").is_none());
        assert_eq!(idx.province_for_unique_district("YENİŞEHİR"), Some("BURSA"));
        assert_eq!(idx.province_for_unique_district("YENISEHIR"), Some("MERSİN"));
    }

    #[test]
    fn keys_are_normalized_values_are_canonical() {
        let idx = index(&[(" Ankara ", "Çankaya")]);
        assert!(idx.contains_province_key("ANKARA"));
        assert_eq!(idx.province_for_key("ANKARA"), Some("Ankara"));
        assert_eq!(idx.districts_of("ANKARA"), ["Çankaya"]);
        assert_eq!(idx.pairs()[0], RegionPair::new("Ankara", "Çankaya"));
    }

    #[test]
    fn blank_rows_are_ignored() {
        let idx = index(&[("", "CEYHAN"), ("ADANA", "  ")]);
        assert!(idx.is_empty());
        assert_eq!(idx.province_count(), 0);
    }

    #[test]
    fn unknown_province_has_no_districts() {
        let idx = index(&[("ADANA", "CEYHAN")]);
        assert!(idx.districts_of("ANKARA").is_empty());
    }
}
