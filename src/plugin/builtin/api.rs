//! API for builtin registrar submission and discovery
//!
//! Modules contribute a plugin family with the `builtin_registrar!` macro.
//! Submissions are collected at link time and merged into the builtin
//! registry on first use; their relative order is unspecified.

use crate::plugin::registry::RegistrarFn;

/// Entry binding a plugin family to its registrar
pub struct BuiltinRegistrarEntry {
    pub family: &'static str,
    pub registrar: RegistrarFn,
}

// Collect all builtin registrar entries
inventory::collect!(BuiltinRegistrarEntry);

/// Macro for submitting a builtin plugin family registrar
///
#[macro_export]
macro_rules! builtin_registrar {
    ($family:expr, $registrar:expr) => {
        $crate::inventory::submit!($crate::plugin::api::BuiltinRegistrarEntry {
            family: $family,
            registrar: $registrar
        });
    };
}

/// Get all submitted builtin registrars
pub fn get_all_builtin_registrars() -> Vec<&'static BuiltinRegistrarEntry> {
    inventory::iter::<BuiltinRegistrarEntry>().collect()
}
