//! Country-name detection for the province field.

use crate::normalize::normalize_for_match;

/// Known country spellings, as produced by [`normalize_for_match`].
const COUNTRY_NAMES: [&str; 5] = ["TURKIYE", "TURKİYE", "TURKEY", "TÜRKIYE", "TÜRKİYE"];

/// Returns true when the value is a known spelling of the country name.
///
/// Used to detect records where the province field holds the country and
/// the real province was shifted into the district field.
///
/// # Examples
///
/// ```
/// use regionfix_common::is_country_name;
///
/// assert!(is_country_name(" Türkiye "));
/// assert!(is_country_name("turkey"));
/// assert!(!is_country_name("Ankara"));
/// assert!(!is_country_name(""));
/// ```
pub fn is_country_name(value: &str) -> bool {
    let key = normalize_for_match(value);
    !key.is_empty() && COUNTRY_NAMES.contains(&key.as_str())
}
