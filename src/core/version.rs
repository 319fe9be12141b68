//! Version identities of this build.
//! Speedb carries its own version plus the RocksDB version it derives from;
//! both are fixed by the build script from `[package.metadata.speedb]`.

use crate::core::build_consts::{
    ROCKSDB_MAJOR, ROCKSDB_MINOR, ROCKSDB_PATCH, SPDB_BUILD_TAG, SPEEDB_MAJOR, SPEEDB_MINOR,
    SPEEDB_PATCH,
};
use crate::core::property::FAILURE_MARKER;
use serde::Serialize;
use std::fmt;

/// Speedb release version
pub const SPEEDB_VERSION: VersionTriple =
    VersionTriple::new(SPEEDB_MAJOR, SPEEDB_MINOR, SPEEDB_PATCH);

/// Upstream RocksDB version
pub const ROCKSDB_VERSION: VersionTriple =
    VersionTriple::new(ROCKSDB_MAJOR, ROCKSDB_MINOR, ROCKSDB_PATCH);

/// Build tag of this build (empty for release builds)
pub const BUILD_TAG: BuildTag = BuildTag::new(SPDB_BUILD_TAG);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Free-text suffix marking a non-release build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTag(&'static str);

impl BuildTag {
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Version suffix for this tag: nothing for an empty tag, `-?` when the
    /// tag substitution failed, `-{tag}` otherwise.
    pub fn suffix(&self) -> String {
        if self.0.is_empty() {
            String::new()
        } else if self.0.starts_with(FAILURE_MARKER) {
            "-?".to_string()
        } else {
            format!("-{}", self.0)
        }
    }
}

impl Serialize for BuildTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.starts_with(FAILURE_MARKER) {
            serializer.serialize_str("?")
        } else {
            serializer.serialize_str(self.0)
        }
    }
}

/// Format `major.minor`, or `major.minor.patch` when `with_patch` is set
pub fn format_version(version: VersionTriple, with_patch: bool) -> String {
    if with_patch {
        version.to_string()
    } else {
        format!("{}.{}", version.major, version.minor)
    }
}

/// Like [`format_version`], with the build tag suffix appended to the patch form
pub fn format_derived_version(version: VersionTriple, tag: BuildTag, with_patch: bool) -> String {
    let mut formatted = format_version(version, with_patch);
    if with_patch {
        formatted.push_str(&tag.suffix());
    }
    formatted
}

/// Upstream RocksDB version string
pub fn rocksdb_version_string(with_patch: bool) -> String {
    format_version(ROCKSDB_VERSION, with_patch)
}

/// Speedb version string, tagged for non-release builds
pub fn speedb_version_string(with_patch: bool) -> String {
    format_derived_version(SPEEDB_VERSION, BUILD_TAG, with_patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V260: VersionTriple = VersionTriple::new(2, 6, 0);

    #[test]
    fn test_format_version() {
        assert_eq!(format_version(V260, false), "2.6");
        assert_eq!(format_version(V260, true), "2.6.0");
        assert_eq!(format_version(VersionTriple::new(8, 1, 11), true), "8.1.11");
    }

    #[test]
    fn test_derived_version_release() {
        let tag = BuildTag::new("");
        assert_eq!(format_derived_version(V260, tag, false), "2.6");
        assert_eq!(format_derived_version(V260, tag, true), "2.6.0");
    }

    #[test]
    fn test_derived_version_failed_tag() {
        let tag = BuildTag::new("@rc1");
        assert_eq!(format_derived_version(V260, tag, true), "2.6.0-?");
    }

    #[test]
    fn test_derived_version_tagged() {
        let tag = BuildTag::new("beta");
        assert_eq!(format_derived_version(V260, tag, true), "2.6.0-beta");
    }

    #[test]
    fn test_tag_ignored_without_patch() {
        assert_eq!(format_derived_version(V260, BuildTag::new("beta"), false), "2.6");
        assert_eq!(format_derived_version(V260, BuildTag::new("@x"), false), "2.6");
    }

    #[test]
    fn test_build_version_strings_are_stable() {
        assert_eq!(speedb_version_string(true), speedb_version_string(true));
        assert_eq!(rocksdb_version_string(false), rocksdb_version_string(false));
        assert!(speedb_version_string(true).starts_with(&speedb_version_string(false)));
        assert_eq!(
            rocksdb_version_string(true),
            format!(
                "{}.{}.{}",
                ROCKSDB_VERSION.major, ROCKSDB_VERSION.minor, ROCKSDB_VERSION.patch
            )
        );
    }

    #[test]
    fn test_build_tag_serializes_failed_substitution_as_question_mark() {
        assert_eq!(serde_json::to_string(&BuildTag::new("@tag")).unwrap(), "\"?\"");
        assert_eq!(serde_json::to_string(&BuildTag::new("rc2")).unwrap(), "\"rc2\"");
    }
}
