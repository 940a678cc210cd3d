//! Province and district name normalization.
//!
//! Two comparison forms are produced from raw input:
//!
//! - **Match key** ([`normalize_for_match`]): trimmed and uppercased under
//!   `tr-TR` casing rules. Turkish letters are preserved, so `Kadıköy`
//!   becomes `KADIKÖY` and `istanbul` becomes `İSTANBUL`.
//! - **Fuzzy key** ([`normalize_fuzzy_key`]): trimmed, Turkish letters folded
//!   to their ASCII counterparts, then uppercased. `Kadıköy` and `Kadikoy`
//!   both become `KADIKOY`.
//!
//! Neither form is ever returned to callers as a result; successful matches
//! always answer with the reference spelling.

/// Uppercases a string following `tr-TR` casing.
///
/// Differs from [`str::to_uppercase`] for the dotted/dotless pair only:
/// `i` maps to `İ` and `ı` maps to `I`.
///
/// # Examples
///
/// ```
/// use regionfix_common::turkish_uppercase;
///
/// assert_eq!(turkish_uppercase("istanbul"), "İSTANBUL");
/// assert_eq!(turkish_uppercase("ığdır"), "IĞDIR");
/// ```
pub fn turkish_uppercase(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            other => out.extend(other.to_uppercase()),
        }
    }
    out
}

/// Trims whitespace and uppercases under `tr-TR` casing.
///
/// Empty or whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```
/// use regionfix_common::normalize_for_match;
///
/// assert_eq!(normalize_for_match("  ankara  "), "ANKARA");
/// assert_eq!(normalize_for_match("Kadıköy"), "KADIKÖY");
/// assert_eq!(normalize_for_match("   "), "");
/// ```
pub fn normalize_for_match(value: &str) -> String {
    turkish_uppercase(value.trim())
}

/// Maps the Turkish-specific letters to their nearest ASCII letter.
///
/// Case is preserved; uppercasing happens afterwards.
fn fold_turkish(ch: char) -> char {
    match ch {
        'İ' => 'I',
        'ı' => 'i',
        'Ğ' => 'G',
        'ğ' => 'g',
        'Ü' => 'U',
        'ü' => 'u',
        'Ş' => 'S',
        'ş' => 's',
        'Ö' => 'O',
        'ö' => 'o',
        'Ç' => 'C',
        'ç' => 'c',
        other => other,
    }
}

/// Builds the diacritic-insensitive comparison key.
///
/// # Examples
///
/// ```
/// use regionfix_common::normalize_fuzzy_key;
///
/// assert_eq!(normalize_fuzzy_key("Kadıköy"), "KADIKOY");
/// assert_eq!(normalize_fuzzy_key("İstanbul"), "ISTANBUL");
/// assert_eq!(normalize_fuzzy_key(" Çankaya "), "CANKAYA");
/// ```
pub fn normalize_fuzzy_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(fold_turkish)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Length in characters, the unit used for distance thresholds and
/// minimum-length checks.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_key_trims_and_uppercases() {
        assert_eq!(normalize_for_match("  ankara  "), "ANKARA");
        assert_eq!(normalize_for_match("İstanbul"), "İSTANBUL");
        assert_eq!(normalize_for_match("Kadıköy"), "KADIKÖY");
        assert_eq!(normalize_for_match("  ankara   \t  "), "ANKARA");
    }

    #[test]
    fn match_key_empty() {
        assert_eq!(normalize_for_match(""), "");
        assert_eq!(normalize_for_match("   "), "");
    }

    #[test]
    fn match_key_keeps_turkish_letters() {
        assert_eq!(normalize_for_match("şığıüöç"), "ŞIĞIÜÖÇ");
        assert_eq!(normalize_for_match("ı"), "I");
        assert_eq!(normalize_for_match("i"), "İ");
    }

    #[test]
    fn fuzzy_key_folds_to_ascii() {
        assert_eq!(normalize_fuzzy_key("Kadıköy"), "KADIKOY");
        assert_eq!(normalize_fuzzy_key("Çankaya"), "CANKAYA");
        assert_eq!(normalize_fuzzy_key("İstanbul"), "ISTANBUL");
        assert_eq!(normalize_fuzzy_key("Kadikoy"), "KADIKOY");
        assert_eq!(normalize_fuzzy_key("Şişli"), "SISLI");
        assert_eq!(normalize_fuzzy_key("Beşiktaş"), "BESIKTAS");
        assert_eq!(normalize_fuzzy_key("Çengelköy"), "CENGELKOY");
        assert_eq!(normalize_fuzzy_key("Göztepe"), "GOZTEPE");
    }

    #[test]
    fn fuzzy_key_trims() {
        assert_eq!(normalize_fuzzy_key("  ADANA  "), "ADANA");
        assert_eq!(normalize_fuzzy_key(""), "");
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len("KADIKÖY"), 7);
        assert_eq!(char_len("İ"), 1);
    }
}
