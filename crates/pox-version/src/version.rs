//! The `Version` value type

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::{numeric_digits, Comparator};
use crate::version_parser::{VersionParser, VersionParserError};

/// A Semantic Versioning 2.0.0 version.
///
/// Equality, ordering and hashing follow SemVer precedence: build metadata is
/// carried along for display but never takes part in comparisons.
#[derive(Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<String>,
    metadata: Vec<String>,
}

impl Version {
    /// Create a release version from its numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Create a version with prerelease and metadata identifiers.
    ///
    /// Identifiers are normalized the way the parser would read them back:
    /// each is split on `.`, prerelease identifiers are also split on `+`,
    /// and empty identifiers are dropped.
    pub fn with_identifiers<P, M>(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: P,
        metadata: M,
    ) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Version {
            major,
            minor,
            patch,
            prerelease: collect_identifiers(prerelease, &['.', '+']),
            metadata: collect_identifiers(metadata, &['.']),
        }
    }

    /// Parse a version leniently.
    ///
    /// This never fails: a numeric core that cannot be understood becomes
    /// `0.0.0`. See [`VersionParser::parse`] for the exact rules.
    pub fn parse(version: &str) -> Self {
        VersionParser::new().parse(version)
    }

    /// Parse a version, rejecting anything outside the SemVer 2.0.0 grammar
    pub fn parse_strict(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse_strict(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Dot-separated identifiers following `-`, in source order
    pub fn prerelease_identifiers(&self) -> &[String] {
        &self.prerelease
    }

    /// Dot-separated identifiers following `+`, in source order
    pub fn metadata_identifiers(&self) -> &[String] {
        &self.metadata
    }

    /// Check if this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

fn collect_identifiers<I>(identifiers: I, separators: &[char]) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut collected = Vec::new();
    for identifier in identifiers {
        let identifier: String = identifier.into();
        collected.extend(
            identifier
                .split(separators)
                .filter(|part| !part.is_empty())
                .map(str::to_string),
        );
    }
    collected
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata.join("."))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Version: major {}, minor {}, patch {}",
            self.major, self.minor, self.patch
        )?;
        if !self.prerelease.is_empty() {
            write!(f, ", prereleaseIdentifiers: {:?}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, ", metadataIdentifiers: {:?}", self.metadata)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare_versions(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare_versions(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.len().hash(state);
        // "01" and "1" are equal, so numeric identifiers hash without leading zeros
        for identifier in &self.prerelease {
            numeric_digits(identifier).unwrap_or(identifier.as_str()).hash(state);
        }
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Version::parse(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Version::parse(&version)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}
