//! Lazily built property sets
//!
//! Two independent maps are exposed: release identity (git sha, git tag,
//! build date, build tag) and debug configuration (RTTI, debug level,
//! portability). Each is parsed once on first access and cached for the
//! lifetime of the process.

use crate::core::build_consts::{RAW_BUILD_PROPERTIES, RAW_DEBUG_PROPERTIES};
use crate::core::property::add_property;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

static BUILD_PROPERTIES: OnceLock<PropertyMap> = OnceLock::new();
static DEBUG_PROPERTIES: OnceLock<PropertyMap> = OnceLock::new();

/// Immutable name to value mapping of build properties.
///
/// Iteration order is unspecified. Use [`PropertyMap::sorted`] when a
/// stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: HashMap<String, String>,
}

impl PropertyMap {
    /// Build a map from raw `name:value` strings, skipping any that fail to parse
    pub fn from_raw<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = HashMap::new();
        for property in raw {
            add_property(&mut entries, property);
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries ordered by name
    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

fn load_property_map(kind: &str, raw: &[&str]) -> PropertyMap {
    let props = PropertyMap::from_raw(raw.iter().copied());
    log::debug!("Loaded {} of {} {} properties", props.len(), raw.len(), kind);
    props
}

/// Release identity properties of this build
pub fn build_properties() -> &'static PropertyMap {
    BUILD_PROPERTIES.get_or_init(|| load_property_map("build", RAW_BUILD_PROPERTIES))
}

/// Debug configuration properties of this build
pub fn debug_properties() -> &'static PropertyMap {
    DEBUG_PROPERTIES.get_or_init(|| load_property_map("debug", RAW_DEBUG_PROPERTIES))
}
