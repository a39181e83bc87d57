//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret resolved from a property file.
///
/// Empty when the key or the file is absent.
pub type ResolvedSecret = String;

/// Manifest placeholder name to substituted value.
pub type Placeholders = std::collections::BTreeMap<String, String>;
