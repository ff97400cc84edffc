//! Version precedence comparison

use std::cmp::Ordering;

use crate::Version;

/// Comparator implementing SemVer 2.0.0 precedence
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) == Ordering::Greater
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) != Ordering::Less
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) == Ordering::Less
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) != Ordering::Greater
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) == Ordering::Equal
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, version2) != Ordering::Equal
    }

    /// Compare two version strings, parsing both leniently
    pub fn compare(version1: &str, version2: &str) -> Ordering {
        Self::compare_versions(&Version::parse(version1), &Version::parse(version2))
    }

    /// Compare two versions by precedence.
    ///
    /// Major, minor and patch are compared in turn, and only when all three
    /// are equal do the prerelease identifiers decide. Metadata is ignored.
    pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| {
                Self::compare_prerelease(a.prerelease_identifiers(), b.prerelease_identifiers())
            })
    }

    fn compare_prerelease(a: &[String], b: &[String]) -> Ordering {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => Ordering::Equal,
            // A release outranks any of its pre-releases
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for (left, right) in a.iter().zip(b) {
                    match Self::compare_identifiers(left, right) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                a.len().cmp(&b.len())
            }
        }
    }

    /// Compare two prerelease identifiers.
    ///
    /// Numeric identifiers compare as integers of any width and always sort
    /// below alphanumeric ones. Alphanumeric identifiers compare in ASCII order.
    pub fn compare_identifiers(left: &str, right: &str) -> Ordering {
        match (numeric_digits(left), numeric_digits(right)) {
            (Some(l), Some(r)) => l.len().cmp(&r.len()).then_with(|| l.cmp(r)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.as_bytes().cmp(right.as_bytes()),
        }
    }
}

/// Significant digits of a purely numeric identifier, or `None` if it is not numeric
pub(crate) fn numeric_digits(identifier: &str) -> Option<&str> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = identifier.trim_start_matches('0');
    if trimmed.is_empty() {
        Some("0")
    } else {
        Some(trimmed)
    }
}
