//! Public API for the plugin registry
//!
//! External modules should import from here rather than directly from internal modules.

// Registry and libraries
pub use crate::plugin::registry::{builtin_registry, BuiltinRegistry, ObjectLibrary, RegistrarFn};

// Error handling
pub use crate::plugin::error::{RegistryError, RegistryResult};

// Builtin submission
pub use crate::plugin::builtin::api::{get_all_builtin_registrars, BuiltinRegistrarEntry};

// Speedb family
pub use crate::plugin::builtin::speedb::{register_speedb_plugins, SPEEDB_FACTORIES, SPEEDB_FAMILY};
