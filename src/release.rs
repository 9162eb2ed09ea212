//! Release severity ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Semantic-version bump categories, ordered by severity.
///
/// Declaration order is the severity order: `Prerelease` is the weakest bump,
/// `Major` the strongest. `Ord` derives from that order, so comparing two
/// release types compares their severity ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Prerelease,
    Prepatch,
    Patch,
    Preminor,
    Minor,
    Premajor,
    Major,
}

impl ReleaseType {
    /// All release types, weakest to strongest.
    pub const ALL: [ReleaseType; 7] = [
        ReleaseType::Prerelease,
        ReleaseType::Prepatch,
        ReleaseType::Patch,
        ReleaseType::Preminor,
        ReleaseType::Minor,
        ReleaseType::Premajor,
        ReleaseType::Major,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Prerelease => "prerelease",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Patch => "patch",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Minor => "minor",
            ReleaseType::Premajor => "premajor",
            ReleaseType::Major => "major",
        }
    }

    /// Whether this is the strongest release type (`major`).
    pub fn is_max(&self) -> bool {
        matches!(self, ReleaseType::Major)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prerelease" => Ok(Self::Prerelease),
            "prepatch" => Ok(Self::Prepatch),
            "patch" => Ok(Self::Patch),
            "preminor" => Ok(Self::Preminor),
            "minor" => Ok(Self::Minor),
            "premajor" => Ok(Self::Premajor),
            "major" => Ok(Self::Major),
            _ => Err(AnalyzerError::InvalidReleaseType(s.to_string())),
        }
    }
}

/// Pick the higher-severity of two optional release types.
///
/// `None` ranks below every known type. When both sides have the same rank
/// (only possible when `a == b`) the left side is returned; callers must not
/// generalize that tie-break to any richer equality notion.
pub fn higher_of(a: Option<ReleaseType>, b: Option<ReleaseType>) -> Option<ReleaseType> {
    if a >= b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_canonical_sequence() {
        for window in ReleaseType::ALL.windows(2) {
            assert!(window[0] < window[1], "{} should rank below {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_higher_of_all_pairs() {
        for (i, a) in ReleaseType::ALL.iter().enumerate() {
            for (j, b) in ReleaseType::ALL.iter().enumerate() {
                let expected = if i >= j { *a } else { *b };
                assert_eq!(higher_of(Some(*a), Some(*b)), Some(expected));
            }
        }
    }

    #[test]
    fn test_higher_of_equal_returns_left() {
        for t in ReleaseType::ALL {
            assert_eq!(higher_of(Some(t), Some(t)), Some(t));
        }
    }

    #[test]
    fn test_higher_of_none_is_identity() {
        for t in ReleaseType::ALL {
            assert_eq!(higher_of(None, Some(t)), Some(t));
            assert_eq!(higher_of(Some(t), None), Some(t));
        }
        assert_eq!(higher_of(None, None), None);
    }

    #[test]
    fn test_is_max_only_for_major() {
        assert!(ReleaseType::Major.is_max());
        for t in ReleaseType::ALL.iter().filter(|t| **t != ReleaseType::Major) {
            assert!(!t.is_max());
        }
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("minor".parse::<ReleaseType>().unwrap(), ReleaseType::Minor);
        for t in ReleaseType::ALL {
            assert_eq!(t.as_str().parse::<ReleaseType>().unwrap(), t);
        }
    }

    #[test]
    fn test_from_str_invalid_names_offending_value() {
        let err = "invalid-type".parse::<ReleaseType>().unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidReleaseType(ref v) if v == "invalid-type"));
        assert_eq!(err.to_string(), "invalid release type \"invalid-type\"");
    }

    #[test]
    fn test_from_str_rejects_cased_variants() {
        assert!("Major".parse::<ReleaseType>().is_err());
        assert!("MAJOR".parse::<ReleaseType>().is_err());
    }
}
