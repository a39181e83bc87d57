//! Core library components.
//!
//! This module contains the reusable resolution logic: property file loading,
//! secret lookup, signing identity assembly, and manifest placeholders.

pub mod build;
pub mod constants;
pub mod manifest;
pub mod properties;
pub mod secret;
pub mod settings;
pub mod signing;
pub mod types;
