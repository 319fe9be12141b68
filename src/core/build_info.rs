//! Build information report
//!
//! Combines program name, version strings and the property sets into the
//! text printed by `--version` style flags and startup log lines.

use crate::core::properties::{build_properties, debug_properties, PropertyMap};
use crate::core::version::{
    format_derived_version, format_version, BuildTag, VersionTriple, BUILD_TAG, ROCKSDB_VERSION,
    SPEEDB_VERSION,
};
use serde::Serialize;

/// Brand name shown between program name and version
pub const BRAND_NAME: &str = "Speedb";

/// Snapshot of everything that identifies a build
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo<'a> {
    pub speedb_version: VersionTriple,
    pub rocksdb_version: VersionTriple,
    pub build_tag: BuildTag,
    pub properties: &'a PropertyMap,
    pub debug_properties: &'a PropertyMap,
}

impl BuildInfo<'static> {
    /// Build information of the running binary
    pub fn current() -> Self {
        Self {
            speedb_version: SPEEDB_VERSION,
            rocksdb_version: ROCKSDB_VERSION,
            build_tag: BUILD_TAG,
            properties: build_properties(),
            debug_properties: debug_properties(),
        }
    }
}

impl BuildInfo<'_> {
    /// `{program} (Speedb) {speedb} ({rocksdb})`, followed in verbose mode by
    /// one indented line per build property and the debug properties summary.
    ///
    /// Property lines follow the map's iteration order, which is unspecified.
    pub fn render(&self, program: &str, verbose: bool) -> String {
        let mut info = format!(
            "{} ({}) {} ({})",
            program,
            BRAND_NAME,
            format_derived_version(self.speedb_version, self.build_tag, true),
            format_version(self.rocksdb_version, true)
        );
        if verbose {
            for (name, value) in self.properties.iter() {
                info.push_str("\n    ");
                info.push_str(name);
                info.push_str(": ");
                info.push_str(value);
            }
            info.push_str("\n Build properties:");
            info.push_str(&format_properties_summary(self.debug_properties));
        }
        info
    }

    /// JSON document with the versions. Verbose mode adds both property
    /// sets, matching what [`BuildInfo::render`] prints.
    pub fn to_json(&self, program: &str, verbose: bool) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Report<'r> {
            program: &'r str,
            brand: &'static str,
            version: String,
            speedb_version: VersionTriple,
            rocksdb_version: VersionTriple,
            build_tag: BuildTag,
            #[serde(skip_serializing_if = "Option::is_none")]
            properties: Option<&'r PropertyMap>,
            #[serde(skip_serializing_if = "Option::is_none")]
            debug_properties: Option<&'r PropertyMap>,
        }

        serde_json::to_string_pretty(&Report {
            program,
            brand: BRAND_NAME,
            version: format_derived_version(self.speedb_version, self.build_tag, true),
            speedb_version: self.speedb_version,
            rocksdb_version: self.rocksdb_version,
            build_tag: self.build_tag,
            properties: verbose.then_some(self.properties),
            debug_properties: verbose.then_some(self.debug_properties),
        })
    }
}

/// ` name=value` for every entry, concatenated in iteration order
pub fn format_properties_summary(props: &PropertyMap) -> String {
    let mut summary = String::new();
    for (name, value) in props.iter() {
        summary.push(' ');
        summary.push_str(name);
        summary.push('=');
        summary.push_str(value);
    }
    summary
}

/// Build information string for `program`
pub fn build_info_string(program: &str, verbose: bool) -> String {
    BuildInfo::current().render(program, verbose)
}

/// Single-line summary of the debug configuration properties
pub fn debug_properties_summary() -> String {
    format_properties_summary(debug_properties())
}
