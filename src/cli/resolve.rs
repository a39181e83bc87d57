//! Resolve command.
//!
//! Shows everything the build would consume: manifest placeholders, the
//! signing identity and per-variant settings.

use crate::cli::output;
use crate::core::build::{BuildConfig, BuildVariant};
use crate::core::constants;
use crate::core::secret;
use crate::core::settings::Settings;
use crate::error::Result;

/// Show the resolved build configuration.
pub fn execute(settings: &Settings, json: bool, reveal: bool) -> Result<()> {
    let config = BuildConfig::resolve(settings)?;

    let shown = |name: &str, value: &str| -> String {
        if reveal || name == constants::APPLICATION_ID_PLACEHOLDER {
            value.to_string()
        } else {
            secret::mask(value)
        }
    };

    if json {
        let placeholders: serde_json::Map<String, serde_json::Value> = config
            .placeholders()
            .iter()
            .map(|(name, value)| {
                let display = shown(name.as_str(), value.as_str());
                (name.clone(), serde_json::Value::String(display))
            })
            .collect();
        let variants: Vec<_> = BuildVariant::ALL
            .iter()
            .map(|&v| config.variant(v))
            .collect();

        let result = serde_json::json!({
            "project": config.project_root().display().to_string(),
            "placeholders": placeholders,
            "signing": super::signing::to_json(config.signing_identity()),
            "variants": variants,
        });
        output::data(&serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::section("Build configuration");
    output::kv("project", config.project_root().display());
    output::kv("local", settings.local_properties_path().display());
    output::kv("signing", settings.signing_properties_path().display());

    output::section("Manifest placeholders");
    for (name, value) in config.placeholders() {
        let value = shown(name.as_str(), value.as_str());
        output::kv(name, if value.is_empty() { "(not set)".to_string() } else { value });
    }

    super::signing::print_identity(config.signing_identity());

    output::section("Variants");
    for variant in BuildVariant::ALL {
        let v = config.variant(variant);
        output::kv(
            variant.name(),
            format!(
                "\"{}\" signing={} minify={} shrink={}",
                v.app_name, v.signing_config, v.minify, v.shrink_resources
            ),
        );
    }

    if config.maps_api_key().is_empty() {
        println!();
        output::warn(&format!(
            "{} is not set in {}",
            constants::GOOGLE_MAPS_API_KEY,
            constants::LOCAL_PROPERTIES
        ));
        output::hint(&format!(
            "run {}",
            output::cmd("ecomap-config set GOOGLE_MAPS_API_KEY <key>")
        ));
    }

    Ok(())
}
