//! Lookups that search free text rather than a single name field.

use std::sync::LazyLock;

use regex::Regex;
use regionfix_common::{char_len, normalize_for_match, normalize_fuzzy_key};

use crate::matcher::{Matcher, RegionMatch};

/// `<district> / <province>` written inside an address line.
static DISTRICT_SLASH_PROVINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*/\s*(\w+)").expect("Invalid district/province regex"));

impl<'a> Matcher<'a> {
    /// Finds the first `<district>/<province>` token in `text` naming a real
    /// pair.
    ///
    /// The province token must match a province exactly; the district token
    /// is then matched inside that province, exactly or fuzzily.
    pub fn extract_province_district_from_long_text(&self, text: &str) -> Option<RegionMatch<'a>> {
        for caps in DISTRICT_SLASH_PROVINCE.captures_iter(text) {
            let (Some(district), Some(province)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(province) = self.find_province_exact(province.as_str()) else {
                continue;
            };
            if let Some(district) = self.find_district_fuzzy_in_province(province, district.as_str())
            {
                return Some(RegionMatch::new(province, district));
            }
        }
        None
    }

    /// Looks for one of the province's district names inside a full address.
    ///
    /// Longer names are tried first so that a district whose name contains
    /// another district's name wins. Names shorter than the configured
    /// minimum are never matched.
    pub fn resolve_district_from_free_address(
        &self,
        address: &str,
        province: &str,
    ) -> Option<&'a str> {
        let normalized = normalize_for_match(address);
        if normalized.is_empty() {
            return None;
        }
        let folded = normalize_fuzzy_key(address);

        let mut districts: Vec<&'a str> = self
            .index()
            .districts_of(&normalize_for_match(province))
            .iter()
            .map(String::as_str)
            .collect();
        districts.sort_by_key(|district| std::cmp::Reverse(char_len(district)));

        districts.into_iter().find(|district| {
            char_len(district) >= self.min_address_district_len
                && (normalized.contains(&normalize_for_match(district))
                    || folded.contains(&normalize_fuzzy_key(district)))
        })
    }
}

#[cfg(test)]
mod tests {
    use regionfix_model::RegionPair;
    use regionfix_reference::ReferenceIndex;

    use super::*;

    fn index() -> ReferenceIndex {
        ReferenceIndex::from_pairs(
            [
                ("İSTANBUL", "KADIKÖY"),
                ("İSTANBUL", "ŞİŞLİ"),
                ("İSTANBUL", "ADA"),
                ("İSTANBUL", "AD"),
                ("ANKARA", "YENİMAHALLE"),
                ("ANKARA", "MAHALLE"),
            ]
            .map(|(p, d)| RegionPair::new(p, d)),
        )
    }

    #[test]
    fn extracts_first_valid_pair() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        let text = "Moda Caddesi No 12 Daire 3 FOO/BAR Kadikoy / İstanbul";
        assert_eq!(
            matcher.extract_province_district_from_long_text(text),
            Some(RegionMatch::new("İSTANBUL", "KADIKÖY"))
        );
    }

    #[test]
    fn extraction_requires_exact_province() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.extract_province_district_from_long_text("Kadıköy/Istanbul"),
            None
        );
        assert_eq!(
            matcher.extract_province_district_from_long_text("no slash here"),
            None
        );
    }

    #[test]
    fn address_search_prefers_longer_names() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.resolve_district_from_free_address("Ostim yenimahalle sokak", "Ankara"),
            Some("YENİMAHALLE")
        );
    }

    #[test]
    fn address_search_matches_folded_text() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.resolve_district_from_free_address("Mecidiyekoy, Sisli", "istanbul"),
            Some("ŞİŞLİ")
        );
    }

    #[test]
    fn address_search_skips_short_names() {
        let idx = index();
        let matcher = Matcher::new(&idx);
        assert_eq!(
            matcher.resolve_district_from_free_address("AD 5", "istanbul"),
            None
        );
        assert_eq!(
            matcher.resolve_district_from_free_address("ADA sokak", "istanbul"),
            Some("ADA")
        );
        assert_eq!(
            matcher
                .with_min_address_district_len(4)
                .resolve_district_from_free_address("ADA sokak", "istanbul"),
            None
        );
    }
}
