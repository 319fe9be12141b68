//! Plugin Registry Module
//!
//! Binds plugin family names to the registrar functions the engine's
//! extension loader runs at startup.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod registry;

// Public API module - the only public interface for the plugin system
pub mod api;
