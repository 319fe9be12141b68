//! Parsing of build-time substituted `name:value` properties
//!
//! The build script writes every property as a single `name:value` string.
//! When a value could not be determined the value is left starting with the
//! failure marker (`@`), and such properties are treated as unavailable.

use std::collections::HashMap;

/// Separator between property name and value
pub const PROPERTY_SEPARATOR: char = ':';

/// First byte of a value whose build-time substitution did not run
pub const FAILURE_MARKER: char = '@';

/// A classified `name:value` property string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawProperty<'a> {
    /// Name and value were both substituted
    Resolved { name: &'a str, value: &'a str },

    /// The value still carries the failure marker
    Unresolved { name: &'a str },

    /// No separator, or an empty name
    Malformed,
}

impl<'a> RawProperty<'a> {
    /// Classify a raw property string.
    ///
    /// Grammar: `name := [^:]+`, `sep := ':'`, `value := .*`, where a value
    /// beginning with `@` marks a failed substitution. An empty value is valid.
    pub fn parse(raw: &'a str) -> Self {
        let Some((name, value)) = raw.split_once(PROPERTY_SEPARATOR) else {
            return RawProperty::Malformed;
        };
        if name.is_empty() {
            return RawProperty::Malformed;
        }
        if value.starts_with(FAILURE_MARKER) {
            RawProperty::Unresolved { name }
        } else {
            RawProperty::Resolved { name, value }
        }
    }

    /// Name of the property, if one could be read
    pub fn name(&self) -> Option<&'a str> {
        match self {
            RawProperty::Resolved { name, .. } | RawProperty::Unresolved { name } => Some(*name),
            RawProperty::Malformed => None,
        }
    }
}

/// Parse `raw` and insert it into `props` if it resolved.
///
/// Returns true when an entry was written. Malformed and unresolved
/// properties are skipped without touching the map; a repeated name
/// overwrites the earlier value.
pub fn add_property(props: &mut HashMap<String, String>, raw: &str) -> bool {
    match RawProperty::parse(raw) {
        RawProperty::Resolved { name, value } => {
            props.insert(name.to_string(), value.to_string());
            true
        }
        RawProperty::Unresolved { name } => {
            log::trace!("Skipping property '{}': build-time substitution failed", name);
            false
        }
        RawProperty::Malformed => {
            log::trace!("Skipping malformed property {:?}", raw);
            false
        }
    }
}
