pub mod app;
pub mod core;
pub mod plugin;

#[doc(hidden)]
pub use inventory;

pub use crate::core::build_info::{build_info_string, debug_properties_summary, BuildInfo};
pub use crate::core::properties::{build_properties, debug_properties, PropertyMap};
pub use crate::core::version::{rocksdb_version_string, speedb_version_string, VersionTriple};
