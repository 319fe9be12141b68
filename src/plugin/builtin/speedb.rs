//! Speedb plugin family
//!
//! Registers the factories Speedb adds on top of RocksDB. The factory
//! implementations live in the engine; only their names are bound here.

use crate::plugin::registry::ObjectLibrary;

/// Family name the engine's extension loader resolves for Speedb
pub const SPEEDB_FAMILY: &str = "speedb";

/// Factories contributed by the Speedb family, as (kind, name)
pub const SPEEDB_FACTORIES: &[(&str, &str)] = &[
    ("FilterPolicy", "speedb.PairedBloomFilter"),
    ("MemTableRepFactory", "speedb.HashSpdRepFactory"),
];

/// Registrar for the `speedb` family. Returns the number of factories added.
pub fn register_speedb_plugins(library: &mut ObjectLibrary, arg: &str) -> usize {
    let added = SPEEDB_FACTORIES
        .iter()
        .filter(|(kind, name)| library.add_factory(kind, name))
        .count();
    log::trace!(
        "Registered {} Speedb factories for '{}' into '{}'",
        added,
        arg,
        library.id()
    );
    added
}
