//! Check command.
//!
//! Verifies that each build variant can be signed. Every variant is checked
//! even when an earlier one fails.

use crate::cli::output;
use crate::core::build::{BuildConfig, BuildVariant};
use crate::core::settings::Settings;
use crate::error::{Error, Result, SigningError};

/// Verify signing material for one variant, or all of them.
pub fn execute(settings: &Settings, variant: Option<BuildVariant>) -> Result<()> {
    let config = BuildConfig::resolve(settings)?;

    let results = match variant {
        Some(v) => vec![(v, config.sign(v))],
        None => config.check_all(),
    };

    output::section("Signing check");

    let mut failed = Vec::new();
    let mut missing_material = true;
    for (variant, result) in &results {
        match result {
            Ok(material) => output::success(&format!(
                "{}: {} ({}) sha256:{}",
                variant,
                material.identity().key_alias(),
                material.store_file().display(),
                &material.fingerprint()[..12]
            )),
            Err(e) => {
                output::error(&format!("{}: {}", variant, e));
                failed.push(variant.name());
                missing_material &= matches!(
                    e,
                    Error::Signing(SigningError::MissingSigningMaterial { .. })
                );
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(SigningError::VariantsFailed {
            variants: failed.join(", "),
            missing_material,
        }
        .into())
    }
}
