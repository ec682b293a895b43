use std::cmp::Ordering;
use std::fmt;

/// Rank given to a missing version or the literal `Unknown` placeholder.
pub const UNKNOWN_RANK: u64 = 0;

/// Rank given to a version string with no usable digits.
pub const MALFORMED_RANK: u64 = 999_999;

const UNKNOWN_PLACEHOLDER: &str = "Unknown";
const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Numeric sort key derived from a raw Java version string.
///
/// `"1.8.0_442"` becomes `(1, 8, 0, 442)` and `"17.0.1"` becomes `(17, 0, 1)`.
/// Keys compare component by component; when one key is a prefix of the
/// other, the shorter key sorts first.
///
/// Missing data sorts before every real version while garbage sorts after
/// every real version:
///
/// ```
/// use jartender::version::VersionKey;
///
/// assert!(VersionKey::parse(None) < VersionKey::from("1.8.0_442"));
/// assert!(VersionKey::from("9") < VersionKey::from("17.0.1"));
/// assert!(VersionKey::from("17.0.1") < VersionKey::from("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    components: Vec<u64>,
}

impl VersionKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::unknown(),
            Some(raw) if raw.is_empty() || raw == UNKNOWN_PLACEHOLDER => Self::unknown(),
            Some(raw) => Self::parse_components(raw.trim()).unwrap_or_else(Self::malformed),
        }
    }

    /// Leading digit run of every separator-delimited segment.
    ///
    /// Returns `None` when no segment starts with a digit or a run overflows.
    fn parse_components(raw: &str) -> Option<Self> {
        let mut components = Vec::new();
        for segment in raw.split(SEPARATORS) {
            let end = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            if end == 0 {
                continue;
            }
            components.push(segment[..end].parse::<u64>().ok()?);
        }

        if components.is_empty() {
            None
        } else {
            Some(Self { components })
        }
    }

    pub fn unknown() -> Self {
        Self {
            components: vec![UNKNOWN_RANK],
        }
    }

    pub fn malformed() -> Self {
        Self {
            components: vec![MALFORMED_RANK],
        }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl From<&str> for VersionKey {
    fn from(raw: &str) -> Self {
        Self::parse(Some(raw))
    }
}

impl From<Option<&str>> for VersionKey {
    fn from(raw: Option<&str>) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// Compare two raw version strings by their [`VersionKey`].
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    VersionKey::from(a).cmp(&VersionKey::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(components: &[u64]) -> Vec<u64> {
        components.to_vec()
    }

    #[test]
    fn test_parse_legacy_version() {
        assert_eq!(
            VersionKey::from("1.8.0_442").components(),
            key(&[1, 8, 0, 442])
        );
    }

    #[test]
    fn test_parse_modern_versions() {
        assert_eq!(VersionKey::from("17.0.1").components(), key(&[17, 0, 1]));
        assert_eq!(VersionKey::from("11.0.1").components(), key(&[11, 0, 1]));
        assert_eq!(VersionKey::from("21").components(), key(&[21]));
    }

    #[test]
    fn test_parse_mixed_suffixes() {
        // Each segment contributes its leading digit run only
        assert_eq!(
            VersionKey::from("21.0.5+11-LTS").components(),
            key(&[21, 0, 5])
        );
        assert_eq!(VersionKey::from("17-ea").components(), key(&[17]));
        assert_eq!(
            VersionKey::from("1.7.0_80-b15").components(),
            key(&[1, 7, 0, 80])
        );
        assert_eq!(VersionKey::from("  11.0.9 \n").components(), key(&[11, 0, 9]));
    }

    #[test]
    fn test_segments_without_leading_digits_are_skipped() {
        assert_eq!(VersionKey::from("v17.0.1").components(), key(&[0, 1]));
        assert_eq!(VersionKey::from("ea.17").components(), key(&[17]));
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(VersionKey::parse(None).components(), key(&[UNKNOWN_RANK]));
        assert_eq!(VersionKey::from("").components(), key(&[UNKNOWN_RANK]));
        assert_eq!(VersionKey::from("Unknown").components(), key(&[UNKNOWN_RANK]));
        assert_eq!(VersionKey::from(""), VersionKey::parse(None));
    }

    #[test]
    fn test_malformed_inputs() {
        assert_eq!(VersionKey::from("abc").components(), key(&[MALFORMED_RANK]));
        assert_eq!(VersionKey::from("   ").components(), key(&[MALFORMED_RANK]));
        assert_eq!(VersionKey::from("unknown").components(), key(&[MALFORMED_RANK]));
        assert_eq!(
            VersionKey::from("99999999999999999999999").components(),
            key(&[MALFORMED_RANK])
        );
    }

    #[test]
    fn test_ordering() {
        let unknown = VersionKey::from("Unknown");
        let legacy = VersionKey::from("1.8.0_442");
        let modern = VersionKey::from("17.0.1");
        let garbage = VersionKey::from("abc");

        assert!(unknown < legacy);
        assert!(legacy < modern);
        assert!(modern < garbage);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert!(VersionKey::from("9") < VersionKey::from("17"));
        assert!(VersionKey::from("11.0.9") < VersionKey::from("11.0.10"));
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert!(VersionKey::from("17") < VersionKey::from("17.0"));
        assert!(VersionKey::from("17.0") < VersionKey::from("17.0.0"));
        assert_eq!(compare_versions("17.0.1", "17.0.1"), Ordering::Equal);
        assert_eq!(compare_versions("21", "1.8.0_442"), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionKey::from("1.8.0_442").to_string(), "(1, 8, 0, 442)");
        assert_eq!(VersionKey::unknown().to_string(), "(0)");
    }
}
