//! Exact and fuzzy name lookups against the reference index.

use std::collections::HashSet;

use regionfix_common::{char_len, normalize_for_match, normalize_fuzzy_key};
use regionfix_model::options::DEFAULT_MIN_ADDRESS_DISTRICT_LEN;
use regionfix_reference::ReferenceIndex;

use crate::distance::{best_fuzzy, edit_distance, max_distance};

/// How a name was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// A reference spelling together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'a> {
    pub value: &'a str,
    pub kind: MatchKind,
}

impl<'a> Matched<'a> {
    fn exact(value: &'a str) -> Self {
        Self {
            value,
            kind: MatchKind::Exact,
        }
    }

    fn fuzzy(value: &'a str) -> Self {
        Self {
            value,
            kind: MatchKind::Fuzzy,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

/// A (province, district) pair borrowed from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMatch<'a> {
    pub province: &'a str,
    pub district: &'a str,
}

impl<'a> RegionMatch<'a> {
    pub fn new(province: &'a str, district: &'a str) -> Self {
        Self { province, district }
    }
}

/// Lookup primitives over one [`ReferenceIndex`].
///
/// Province arguments may be given in any spelling that normalizes to the
/// province key; districts are always looked up inside that province.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a ReferenceIndex,
    pub(crate) min_address_district_len: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a ReferenceIndex) -> Self {
        Self {
            index,
            min_address_district_len: DEFAULT_MIN_ADDRESS_DISTRICT_LEN,
        }
    }

    /// Sets the shortest district name considered by
    /// [`resolve_district_from_free_address`](Self::resolve_district_from_free_address).
    pub fn with_min_address_district_len(mut self, len: usize) -> Self {
        self.min_address_district_len = len;
        self
    }

    pub fn index(&self) -> &'a ReferenceIndex {
        self.index
    }

    pub fn find_province_exact(&self, province: &str) -> Option<&'a str> {
        let key = normalize_for_match(province);
        if key.is_empty() {
            return None;
        }
        self.index.province_for_key(&key)
    }

    /// Exact match first, then the closest province by edit distance.
    pub fn find_province_fuzzy(&self, province: &str) -> Option<&'a str> {
        self.match_province(province).map(|m| m.value)
    }

    /// Like [`find_province_fuzzy`](Self::find_province_fuzzy), reporting
    /// whether the exact or the fuzzy rule matched.
    pub fn match_province(&self, province: &str) -> Option<Matched<'a>> {
        if let Some(found) = self.find_province_exact(province) {
            return Some(Matched::exact(found));
        }
        best_fuzzy(province, self.index.provinces().iter().map(String::as_str))
            .map(Matched::fuzzy)
    }

    pub fn find_district_exact_in_province(
        &self,
        province: &str,
        district: &str,
    ) -> Option<&'a str> {
        let key = normalize_for_match(district);
        if key.is_empty() {
            return None;
        }
        self.districts(province)
            .iter()
            .map(String::as_str)
            .find(|candidate| normalize_for_match(candidate) == key)
    }

    /// Exact match first, then the closest district of that province.
    pub fn find_district_fuzzy_in_province(
        &self,
        province: &str,
        district: &str,
    ) -> Option<&'a str> {
        self.match_district_in_province(province, district)
            .map(|m| m.value)
    }

    pub fn match_district_in_province(
        &self,
        province: &str,
        district: &str,
    ) -> Option<Matched<'a>> {
        if let Some(found) = self.find_district_exact_in_province(province, district) {
            return Some(Matched::exact(found));
        }
        best_fuzzy(district, self.districts(province).iter().map(String::as_str))
            .map(Matched::fuzzy)
    }

    /// Province of an exactly matching (province, district) pair.
    pub fn find_province_by_district_pair(&self, province: &str, district: &str) -> Option<&'a str> {
        let province_key = normalize_for_match(province);
        let district_key = normalize_for_match(district);
        if province_key.is_empty() || district_key.is_empty() {
            return None;
        }
        self.index.province_for_pair(&province_key, &district_key)
    }

    /// Province owning a district name found under exactly one province.
    pub fn find_province_by_unique_district(&self, district: &str) -> Option<&'a str> {
        let key = normalize_for_match(district);
        if key.is_empty() {
            return None;
        }
        self.index.province_for_unique_district(&key)
    }

    /// Resolves a district without any province context.
    ///
    /// Tries the unique-district lookup, then the folded-key lookup, then a
    /// sweep over every pair. The sweep only answers when all candidates
    /// within the distance threshold belong to one province; ambiguous names
    /// such as `MERKEZ` resolve to `None`.
    pub fn find_province_and_district_by_district_fuzzy(
        &self,
        district: &str,
    ) -> Option<RegionMatch<'a>> {
        let key = normalize_for_match(district);
        if key.is_empty() {
            return None;
        }

        if let Some(province) = self.index.province_for_unique_district(&key)
            && let Some(canonical) = self.find_district_exact_in_province(province, district)
        {
            return Some(RegionMatch::new(province, canonical));
        }

        let folded = normalize_fuzzy_key(district);
        if let Some(pair) = self.index.pair_for_folded_district(&folded) {
            return Some(RegionMatch::new(&pair.province, &pair.district));
        }

        let threshold = max_distance(char_len(&key));
        let mut seen = HashSet::new();
        let mut matches: Vec<(String, RegionMatch<'a>)> = Vec::new();
        for pair in self.index.pairs() {
            let candidate = normalize_fuzzy_key(&pair.district);
            if edit_distance(&folded, &candidate) > threshold {
                continue;
            }
            let province_key = normalize_for_match(&pair.province);
            if !seen.insert(format!("{province_key}|{candidate}")) {
                continue;
            }
            matches.push((
                province_key,
                RegionMatch::new(&pair.province, &pair.district),
            ));
        }

        let (first_key, first) = matches.first()?;
        if matches.iter().all(|(province_key, _)| province_key == first_key) {
            Some(*first)
        } else {
            None
        }
    }

    fn districts(&self, province: &str) -> &'a [String] {
        self.index.districts_of(&normalize_for_match(province))
    }
}

#[cfg(test)]
mod tests {
    use regionfix_model::RegionPair;

    use super::*;

    fn index() -> ReferenceIndex {
        ReferenceIndex::from_pairs(
            [
                ("ADANA", "CEYHAN"),
                ("ANKARA", "ÇANKAYA"),
                ("İSTANBUL", "KADIKÖY"),
                ("İSTANBUL", "ŞİŞLİ"),
                ("BOLU", "MERKEZ"),
                ("KARS", "MERKEZ"),
            ]
            .map(|(p, d)| RegionPair::new(p, d)),
        )
    }

    #[test]
    fn province_exact_returns_reference_spelling() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(matcher.find_province_exact("istanbul"), Some("İSTANBUL"));
        assert_eq!(matcher.find_province_exact("ISTANBUL"), None);
        assert_eq!(matcher.find_province_exact(""), None);
    }

    #[test]
    fn province_fuzzy_reports_kind() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.match_province("adana"),
            Some(Matched::exact("ADANA"))
        );
        assert_eq!(
            matcher.match_province("ISTANBUL"),
            Some(Matched::fuzzy("İSTANBUL"))
        );
        assert_eq!(matcher.find_province_fuzzy("Anakra"), Some("ANKARA"));
    }

    #[test]
    fn district_lookups_stay_inside_province() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.find_district_exact_in_province("ankara", "çankaya"),
            Some("ÇANKAYA")
        );
        assert_eq!(
            matcher.find_district_exact_in_province("ankara", "Cankaya"),
            None
        );
        assert_eq!(
            matcher.find_district_fuzzy_in_province("ankara", "Cankaya"),
            Some("ÇANKAYA")
        );
        assert_eq!(
            matcher.find_district_fuzzy_in_province("adana", "Kadıköy"),
            None
        );
    }

    #[test]
    fn pair_and_unique_lookups() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.find_province_by_district_pair("bolu", "merkez"),
            Some("BOLU")
        );
        assert_eq!(matcher.find_province_by_district_pair("bolu", ""), None);
        assert_eq!(matcher.find_province_by_unique_district("MERKEZ"), None);
        assert_eq!(
            matcher.find_province_by_unique_district("ceyhan"),
            Some("ADANA")
        );
    }

    #[test]
    fn district_without_province() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.find_province_and_district_by_district_fuzzy("Kadıköy"),
            Some(RegionMatch::new("İSTANBUL", "KADIKÖY"))
        );
        assert_eq!(
            matcher.find_province_and_district_by_district_fuzzy("Sisli"),
            Some(RegionMatch::new("İSTANBUL", "ŞİŞLİ"))
        );
        assert_eq!(
            matcher.find_province_and_district_by_district_fuzzy("Ceyhn"),
            Some(RegionMatch::new("ADANA", "CEYHAN"))
        );
        assert_eq!(
            matcher.find_province_and_district_by_district_fuzzy("merkez"),
            None
        );
        assert_eq!(
            matcher.find_province_and_district_by_district_fuzzy("  "),
            None
        );
    }
}
