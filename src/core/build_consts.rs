//! Constants substituted by the build script.
//! The generated build_version.rs is included here so the rest of the crate
//! reads build metadata from a single place.

include!(concat!(env!("OUT_DIR"), "/build_version.rs"));
