//! Semver facade providing version list operations

use crate::Version;

/// Facade for operations over lists of version strings
pub struct Semver;

impl Semver {
    /// Sort versions in ascending order of precedence
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order of precedence (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| (Version::parse(v), i))
            .collect();

        // Stable, so versions of equal precedence keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp(b);

            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return the input strings in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
