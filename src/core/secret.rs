//! Secret lookup.
//!
//! Secrets such as the maps API key come from local, non-committed property
//! files. A missing key or file resolves to an empty string.

use crate::core::properties::PropertyFile;
use crate::core::types::ResolvedSecret;

/// Resolve `key` from a property file, falling back to `""`.
pub fn resolve_secret(file: &PropertyFile, key: &str) -> ResolvedSecret {
    file.get(key).unwrap_or_default().to_string()
}

/// Mask a secret for display, keeping a short prefix.
///
/// Values of four characters or fewer are fully masked.
pub fn mask(secret: &str) -> String {
    const VISIBLE: usize = 4;

    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= VISIBLE {
        return "*".repeat(count);
    }

    let prefix: String = secret.chars().take(VISIBLE).collect();
    format!("{}{}", prefix, "*".repeat(count - VISIBLE))
}
