//! Semantic Versioning 2.0.0 version value type
//!
//! This crate provides a lenient version parser, normalized rendering,
//! SemVer precedence ordering and serde support for a single `Version` type.
//!
//! ```
//! use pox_version::Version;
//!
//! let release = Version::parse("1.0.0");
//! let alpha = Version::parse("1.0.0-alpha.1+build.5");
//!
//! assert!(release > alpha);
//! assert_eq!(alpha.to_string(), "1.0.0-alpha.1+build.5");
//! assert_eq!(Version::parse("Hello"), Version::new(0, 0, 0));
//! ```

mod comparator;
mod semver;
mod serialization;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionParser, VersionParserError};
