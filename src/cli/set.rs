//! Set command.
//!
//! Writes a single key into `local.properties` or `key.properties`. Comments
//! and every other line are written back as they were.

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::cli::{output, Target};
use crate::core::properties::{self, PropertyFile};
use crate::core::settings::Settings;
use crate::error::{Error, Result};

/// Set a property value, prompting for it when not given.
pub fn execute(settings: &Settings, key: &str, value: Option<String>, target: Target) -> Result<()> {
    properties::validate_key(key)?;

    let value = match value {
        Some(v) => Zeroizing::new(v),
        None => Zeroizing::new(
            Password::new()
                .with_prompt(key)
                .allow_empty_password(true)
                .interact()
                .map_err(|e| Error::Other(format!("failed to read value: {}", e)))?,
        ),
    };

    let path = target.path(settings);
    let mut file = PropertyFile::load(&path)?;
    file.set(key, value.as_str());

    match target {
        Target::Local => file.save(&path)?,
        Target::Signing => file.save_private(&path)?,
    }

    output::success(&format!("set {} in {}", key, path.display()));
    Ok(())
}
