//! Type-safe enumerations for correction results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How a corrected province/district pair was obtained.
///
/// - **Exact**: every supplied name matched the reference spelling after
///   normalization.
/// - **Fuzzy**: at least one name needed an edit-distance match, or the
///   province was re-derived from a district found elsewhere.
/// - **Resolved**: the district was derived from the full address text or
///   the province was inferred from a district alone.
/// - **Unknown**: nothing could be resolved; the input is returned as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Exact,
    Fuzzy,
    Resolved,
    Unknown,
}

impl Confidence {
    /// All levels, strongest first.
    pub const ALL: [Confidence; 4] = [
        Confidence::Exact,
        Confidence::Fuzzy,
        Confidence::Resolved,
        Confidence::Unknown,
    ];

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Exact => "exact",
            Confidence::Fuzzy => "fuzzy",
            Confidence::Resolved => "resolved",
            Confidence::Unknown => "unknown",
        }
    }

    /// Returns true unless the pair could not be resolved at all.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Confidence::Unknown)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ModelError;

    /// Parses a confidence name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Confidence::Exact),
            "fuzzy" => Ok(Confidence::Fuzzy),
            "resolved" => Ok(Confidence::Resolved),
            "unknown" => Ok(Confidence::Unknown),
            _ => Err(ModelError::ParseConfidence(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Exact".parse::<Confidence>().unwrap(), Confidence::Exact);
        assert_eq!(" FUZZY ".parse::<Confidence>().unwrap(), Confidence::Fuzzy);
        assert!("certain".parse::<Confidence>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for level in Confidence::ALL {
            assert_eq!(level.to_string(), level.as_str());
            assert_eq!(level.as_str().parse::<Confidence>().unwrap(), level);
        }
    }

    #[test]
    fn only_unknown_is_unresolved() {
        assert!(Confidence::Resolved.is_resolved());
        assert!(!Confidence::Unknown.is_resolved());
    }
}
