//! Manifest command.

use std::path::Path;

use crate::cli::output;
use crate::core::build::BuildConfig;
use crate::core::manifest;
use crate::core::settings::Settings;
use crate::error::Result;

/// Inject the resolved placeholders into a manifest template.
///
/// Relative template and output paths are taken from the current directory.
pub fn execute(settings: &Settings, template: &Path, out: Option<&Path>) -> Result<()> {
    let config = BuildConfig::resolve(settings)?;
    let rendered = manifest::inject_file(template, config.placeholders())?;

    match out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            output::success(&format!("wrote {}", path.display()));
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
