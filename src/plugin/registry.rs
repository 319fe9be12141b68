//! Builtin Plugin Registry
//!
//! Process-wide table binding a plugin family name to the registrar function
//! that loads that family's factories into an [`ObjectLibrary`]. The table is
//! built once on first use: this crate's own `speedb` family is inserted
//! first, then any families submitted by other modules through
//! [`builtin_registrar!`](crate::builtin_registrar). Submission order across
//! modules is unspecified, so duplicates are resolved by keeping the binding
//! that was inserted first.

use crate::plugin::builtin::api::get_all_builtin_registrars;
use crate::plugin::builtin::speedb::{register_speedb_plugins, SPEEDB_FAMILY};
use crate::plugin::error::{RegistryError, RegistryResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Signature of a family registrar. Returns the number of factories added.
pub type RegistrarFn = fn(&mut ObjectLibrary, &str) -> usize;

static BUILTINS: OnceLock<BuiltinRegistry> = OnceLock::new();

/// Named collection of factory registrations filled in by registrars
#[derive(Debug, Clone, Default)]
pub struct ObjectLibrary {
    id: String,
    /// Map of factory kind (e.g. `FilterPolicy`) to registered names
    factories: HashMap<String, Vec<String>>,
}

impl ObjectLibrary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            factories: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a factory name under `kind`. Returns false if it was already present.
    pub fn add_factory(&mut self, kind: &str, name: &str) -> bool {
        let names = self.factories.entry(kind.to_string()).or_default();
        if names.iter().any(|n| n == name) {
            return false;
        }
        names.push(name.to_string());
        true
    }

    /// Check whether a factory is registered under `kind`
    pub fn has_factory(&self, kind: &str, name: &str) -> bool {
        self.factories
            .get(kind)
            .is_some_and(|names| names.iter().any(|n| n == name))
    }

    /// Registered names for `kind`, sorted
    pub fn factory_names(&self, kind: &str) -> Vec<String> {
        let mut names = self.factories.get(kind).cloned().unwrap_or_default();
        names.sort();
        names
    }

    /// Total number of registered factories
    pub fn factory_count(&self) -> usize {
        self.factories.values().map(Vec::len).sum()
    }
}

/// Family name to registrar table
#[derive(Clone, Default)]
pub struct BuiltinRegistry {
    bindings: HashMap<String, RegistrarFn>,
}

impl std::fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinRegistry")
            .field("families", &self.families())
            .finish()
    }
}

impl BuiltinRegistry {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `family` to `registrar` unless the family is already bound
    pub fn insert_if_absent(&mut self, family: &str, registrar: RegistrarFn) -> RegistryResult<()> {
        if family.is_empty() {
            return Err(RegistryError::EmptyFamily);
        }
        if self.bindings.contains_key(family) {
            return Err(RegistryError::DuplicateFamily {
                family: family.to_string(),
            });
        }
        self.bindings.insert(family.to_string(), registrar);
        Ok(())
    }

    /// Registrar bound to `family`
    pub fn registrar(&self, family: &str) -> Option<RegistrarFn> {
        self.bindings.get(family).copied()
    }

    pub fn has_family(&self, family: &str) -> bool {
        self.bindings.contains_key(family)
    }

    /// Bound family names, sorted
    pub fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self.bindings.keys().cloned().collect();
        families.sort();
        families
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run the registrar of a single family against `library`
    pub fn load_family(&self, family: &str, library: &mut ObjectLibrary) -> RegistryResult<usize> {
        let registrar = self
            .registrar(family)
            .ok_or_else(|| RegistryError::FamilyNotFound {
                family: family.to_string(),
            })?;
        let added = registrar(library, family);
        log::debug!(
            "Family '{}' registered {} factories into library '{}'",
            family,
            added,
            library.id()
        );
        Ok(added)
    }

    /// Run every registrar against `library` in family-name order.
    /// Returns the number of factories added per family.
    pub fn register_all(&self, library: &mut ObjectLibrary) -> BTreeMap<String, usize> {
        let ordered: BTreeMap<&String, &RegistrarFn> = self.bindings.iter().collect();
        ordered
            .into_iter()
            .map(|(family, registrar)| {
                let added = registrar(library, family);
                log::debug!("Family '{}' registered {} factories", family, added);
                (family.clone(), added)
            })
            .collect()
    }
}

/// Build the builtin table: the `speedb` family first, then submitted families
fn load_builtins() -> BuiltinRegistry {
    let mut registry = BuiltinRegistry::new();
    if let Err(e) = registry.insert_if_absent(SPEEDB_FAMILY, register_speedb_plugins) {
        log::warn!("Could not bind builtin family: {}", e);
    }

    for entry in get_all_builtin_registrars() {
        if let Err(e) = registry.insert_if_absent(entry.family, entry.registrar) {
            log::warn!("Ignoring builtin registrar: {}", e);
        }
    }

    log::debug!("Builtin plugin families: {:?}", registry.families());
    registry
}

/// Process-wide builtin registrar table
pub fn builtin_registry() -> &'static BuiltinRegistry {
    BUILTINS.get_or_init(load_builtins)
}
