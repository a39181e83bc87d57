//! Secret command.

use crate::cli::{output, Target};
use crate::core::properties::PropertyFile;
use crate::core::secret::resolve_secret;
use crate::core::settings::Settings;
use crate::error::Result;

/// Print a single resolved secret. Prints an empty line when unset.
pub fn execute(settings: &Settings, key: &str, target: Target) -> Result<()> {
    let file = PropertyFile::load(target.path(settings))?;
    let value = zeroize::Zeroizing::new(resolve_secret(&file, key));

    output::data(&value);
    Ok(())
}
