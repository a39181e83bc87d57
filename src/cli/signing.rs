//! Signing command.
//!
//! Prints the signing identity. Passwords are only ever reported as set or
//! not set.

use crate::cli::output;
use crate::core::build::BuildConfig;
use crate::core::constants;
use crate::core::settings::Settings;
use crate::core::signing::SigningIdentity;
use crate::error::Result;

/// Show the signing identity.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let config = BuildConfig::resolve(settings)?;
    let identity = config.signing_identity();

    if json {
        output::data(&serde_json::to_string_pretty(&to_json(identity))?);
    } else {
        print_identity(identity);
    }

    Ok(())
}

/// JSON view of an identity with passwords redacted.
pub fn to_json(identity: &SigningIdentity) -> serde_json::Value {
    serde_json::json!({
        "config": constants::SIGNING_CONFIG_NAME,
        "keyAlias": identity.key_alias(),
        "keyPassword": !identity.key_password().is_empty(),
        "storeFile": identity.store_file().map(|p| p.display().to_string()),
        "storePassword": !identity.store_password().is_empty(),
    })
}

/// Print an identity section with passwords redacted.
pub fn print_identity(identity: &SigningIdentity) {
    output::section(&format!("Signing ({})", constants::SIGNING_CONFIG_NAME));
    output::kv("alias", identity.key_alias());
    output::kv(
        "store file",
        identity
            .store_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    output::kv("key password", password_status(identity.key_password()));
    output::kv("store password", password_status(identity.store_password()));
}

fn password_status(password: &str) -> &'static str {
    if password.is_empty() {
        "(not set)"
    } else {
        "set"
    }
}
