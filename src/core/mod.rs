//! Core build identity services

pub mod build_consts;
pub mod build_info;
pub mod error_handling;
pub mod logging;
pub mod properties;
pub mod property;
pub mod version;
