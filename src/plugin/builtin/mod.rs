//! Built-in Plugin Families
//!
//! Registrars for the plugin families that ship with the engine, and the
//! submission API other modules use to contribute their own.

pub mod api;
pub mod speedb;
