//! Version parsing module

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

/// Error type for strict version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid version string \"{version}\": {component} version does not fit in 64 bits")]
    ComponentOverflow {
        version: String,
        component: &'static str,
    },
}

lazy_static! {
    // Reference grammar from semver.org, with \d spelled out since Rust's \d is Unicode-aware
    static ref SEMVER_RE: Regex = Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )).unwrap();
}

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// Parser turning version text into [`Version`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse a version leniently. This never fails.
    ///
    /// - Metadata is everything after the first `+`.
    /// - A prerelease starts after the first `-` that precedes the metadata
    ///   marker and runs up to that marker.
    /// - The numeric core before both markers is split on `.`, segments that
    ///   are not unsigned integers are dropped, and the remaining one to three
    ///   numbers fill major, minor and patch. Any other count yields `0.0.0`.
    /// - Empty prerelease or metadata identifiers are dropped.
    pub fn parse(&self, version: &str) -> Version {
        let (core, prerelease, metadata) = split_segments(version);
        let (major, minor, patch) = parse_core(version, core);

        Version::with_identifiers(
            major,
            minor,
            patch,
            split_identifiers(prerelease),
            split_identifiers(metadata),
        )
    }

    /// Parse a version, accepting only the SemVer 2.0.0 grammar.
    ///
    /// On success the result is identical to [`VersionParser::parse`].
    pub fn parse_strict(&self, version: &str) -> Result<Version, VersionParserError> {
        let captures = SEMVER_RE
            .captures(version)
            .ok_or_else(|| VersionParserError::InvalidVersion(version.to_string()))?;

        for (index, component) in COMPONENT_NAMES.into_iter().enumerate() {
            captures[index + 1]
                .parse::<u64>()
                .map_err(|_| VersionParserError::ComponentOverflow {
                    version: version.to_string(),
                    component,
                })?;
        }

        Ok(self.parse(version))
    }
}

/// Split version text into its numeric core, prerelease and metadata parts
fn split_segments(version: &str) -> (&str, Option<&str>, Option<&str>) {
    let plus = version.find('+');
    // A '-' inside the metadata does not start a prerelease
    let dash = version
        .find('-')
        .filter(|&dash| plus.map_or(true, |plus| dash < plus));

    let metadata = plus.map(|plus| &version[plus + 1..]);
    let prerelease = dash.map(|dash| &version[dash + 1..plus.unwrap_or(version.len())]);
    let core_end = dash.or(plus).unwrap_or(version.len());

    (&version[..core_end], prerelease, metadata)
}

fn parse_core(version: &str, core: &str) -> (u64, u64, u64) {
    let components: Vec<u64> = core
        .split('.')
        .filter_map(|segment| match segment.parse::<u64>() {
            Ok(number) => Some(number),
            Err(_) => {
                log::trace!("Dropping segment \"{}\" of version \"{}\"", segment, version);
                None
            }
        })
        .collect();

    match components.as_slice() {
        [major] => (*major, 0, 0),
        [major, minor] => (*major, *minor, 0),
        [major, minor, patch] => (*major, *minor, *patch),
        _ => {
            log::debug!(
                "Version \"{}\" has {} numeric components, using 0.0.0",
                version,
                components.len()
            );
            (0, 0, 0)
        }
    }
}

fn split_identifiers(segment: Option<&str>) -> Vec<&str> {
    segment
        .map(|segment| segment.split('.').filter(|id| !id.is_empty()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(version: &str) -> Version {
        VersionParser::new().parse(version)
    }

    fn assert_core(version: &Version, major: u64, minor: u64, patch: u64) {
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            (major, minor, patch),
            "{:?}",
            version
        );
    }

    #[test]
    fn test_parse_components() {
        assert_core(&parse("10"), 10, 0, 0);
        assert_core(&parse("10.1"), 10, 1, 0);
        assert_core(&parse("0.1.5"), 0, 1, 5);
        assert_core(&parse("2.12.35"), 2, 12, 35);
        assert_core(&parse("18446744073709551615.0.1"), u64::MAX, 0, 1);
    }

    #[test]
    fn test_parse_prerelease() {
        let version = parse("10.1.5-alpha.1");
        assert_core(&version, 10, 1, 5);
        assert_eq!(version.prerelease_identifiers(), ["alpha", "1"]);
        assert!(version.metadata_identifiers().is_empty());
    }

    #[test]
    fn test_parse_metadata() {
        let version = parse("10.1.5-alpha.1+m1");
        assert_core(&version, 10, 1, 5);
        assert_eq!(version.prerelease_identifiers(), ["alpha", "1"]);
        assert_eq!(version.metadata_identifiers(), ["m1"]);

        let version = parse("1.0.0+20130313144700");
        assert!(version.prerelease_identifiers().is_empty());
        assert_eq!(version.metadata_identifiers(), ["20130313144700"]);
    }

    #[test]
    fn test_parse_hyphenated_identifiers() {
        let version = parse("1.0.0-x-y-z.--");
        assert_eq!(version.prerelease_identifiers(), ["x-y-z", "--"]);

        let version = parse("1.0.0-rc.1+build-7.exp");
        assert_eq!(version.prerelease_identifiers(), ["rc", "1"]);
        assert_eq!(version.metadata_identifiers(), ["build-7", "exp"]);
    }

    #[test]
    fn test_parse_dash_after_plus_belongs_to_metadata() {
        let version = parse("1.0.0+build-1");
        assert_core(&version, 1, 0, 0);
        assert!(version.prerelease_identifiers().is_empty());
        assert_eq!(version.metadata_identifiers(), ["build-1"]);
    }

    #[test]
    fn test_parse_malformed_falls_back_to_zero() {
        for input in ["Hello", "", "1.2.3.4", "a.b.c", ".", "-alpha", "+meta"] {
            assert_core(&parse(input), 0, 0, 0);
        }

        let version = parse("Hello");
        assert!(version.prerelease_identifiers().is_empty());
        assert!(version.metadata_identifiers().is_empty());

        let version = parse("-alpha");
        assert_eq!(version.prerelease_identifiers(), ["alpha"]);
    }

    #[test]
    fn test_parse_drops_unparseable_segments() {
        assert_core(&parse("1.x.3"), 1, 3, 0);
        assert_core(&parse("v1.2.3"), 2, 3, 0);
        assert_core(&parse("99999999999999999999.1.2"), 1, 2, 0);
        assert_core(&parse("1..2"), 1, 2, 0);
    }

    #[test]
    fn test_parse_drops_empty_identifiers() {
        let version = parse("1.0.0-alpha..1.+.meta.");
        assert_eq!(version.prerelease_identifiers(), ["alpha", "1"]);
        assert_eq!(version.metadata_identifiers(), ["meta"]);

        let version = parse("1.0.0-+");
        assert!(!version.is_prerelease());
        assert!(version.metadata_identifiers().is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let inputs = [
            "1.2.3",
            "0.0.0",
            "10.1.5-alpha.1",
            "10.1.5-alpha.1+m1",
            "1.0.0+20130313144700",
            "1.0.0-x.7.z.92",
            "1.0.0-0.3.7",
        ];
        for input in inputs {
            let rendered = parse(input).to_string();
            assert_eq!(rendered, input);
            assert_eq!(parse(&rendered).to_string(), rendered);
        }

        assert_eq!(parse("10").to_string(), "10.0.0");
        assert_eq!(parse("10.1").to_string(), "10.1.0");
        assert_eq!(parse("Hello").to_string(), "0.0.0");
    }

    #[test]
    fn test_parse_strict_valid() {
        let valid = [
            "0.0.4",
            "1.2.3",
            "10.20.30",
            "1.1.2-prerelease+meta",
            "1.1.2+meta-valid",
            "1.0.0-alpha",
            "1.0.0-alpha.beta.1",
            "1.0.0-alpha0.valid",
            "1.0.0-rc.1+build.1",
            "1.0.0-0A.is.legal",
            "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
            "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
            "18446744073709551615.0.0",
        ];
        let parser = VersionParser::new();
        for input in valid {
            let version = parser.parse_strict(input);
            assert_eq!(version, Ok(parser.parse(input)), "{}", input);
        }
    }

    #[test]
    fn test_parse_strict_invalid() {
        let invalid = [
            "1",
            "1.2",
            "Hello",
            "1.2.3-0123",
            "1.2.3-0123.0123",
            "1.1.2+.123",
            "+invalid",
            "-invalid",
            "alpha.beta",
            "01.1.1",
            "1.01.1",
            "1.1.01",
            "1.2.3.DEV",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-alpha_beta",
            "1.2.3-alpha..1",
            "v1.2.3",
            " 1.2.3",
            "1.2.3\n",
            "١.٢.٣",
        ];
        let parser = VersionParser::new();
        for input in invalid {
            assert_eq!(
                parser.parse_strict(input),
                Err(VersionParserError::InvalidVersion(input.to_string())),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_strict_overflow() {
        let parser = VersionParser::new();
        assert_eq!(
            parser.parse_strict("18446744073709551616.0.0"),
            Err(VersionParserError::ComponentOverflow {
                version: "18446744073709551616.0.0".to_string(),
                component: "major",
            })
        );
        assert_eq!(
            parser.parse_strict("1.0.99999999999999999999-rc"),
            Err(VersionParserError::ComponentOverflow {
                version: "1.0.99999999999999999999-rc".to_string(),
                component: "patch",
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VersionParserError::InvalidVersion("1.2".to_string()).to_string(),
            "Invalid version string \"1.2\""
        );
        assert_eq!(
            VersionParserError::ComponentOverflow {
                version: "1.99999999999999999999.0".to_string(),
                component: "minor",
            }
            .to_string(),
            "Invalid version string \"1.99999999999999999999.0\": minor version does not fit in 64 bits"
        );
    }
}
