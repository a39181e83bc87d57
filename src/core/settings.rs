//! Tool settings.
//!
//! Reads the optional `.ecomap.toml` from the project root. Every field has a
//! default, so an absent file means "use the standard file names".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip)]
    project_root: PathBuf,
    /// Property file locations, relative to the project root
    #[serde(default)]
    pub files: FileSettings,
}

/// Property file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// Local developer overrides
    pub local: PathBuf,
    /// Signing credentials
    pub signing: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            local: PathBuf::from(constants::LOCAL_PROPERTIES),
            signing: PathBuf::from(constants::KEY_PROPERTIES),
        }
    }
}

impl Settings {
    /// Default settings rooted at `project_root`.
    pub fn with_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            files: FileSettings::default(),
        }
    }

    /// Load settings for a project.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ProjectRoot` if the directory does not exist,
    /// `ConfigError::ReadFile` or `ConfigError::Parse` if `.ecomap.toml`
    /// exists but cannot be read or parsed.
    pub fn load(project_root: impl Into<PathBuf>) -> Result<Self> {
        let project_root = project_root.into();
        if !project_root.is_dir() {
            return Err(ConfigError::ProjectRoot { path: project_root }.into());
        }

        let path = Self::settings_path(&project_root);
        if !path.exists() {
            debug!(root = %project_root.display(), "no settings file, using defaults");
            return Ok(Self::with_root(project_root));
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let mut settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        settings.project_root = project_root;

        debug!(
            local = %settings.files.local.display(),
            signing = %settings.files.signing.display(),
            "settings loaded"
        );

        Ok(settings)
    }

    /// Path to `.ecomap.toml` under `project_root`
    pub fn settings_path(project_root: &Path) -> PathBuf {
        project_root.join(constants::SETTINGS_FILE)
    }

    /// Project root directory
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path of the local properties file
    pub fn local_properties_path(&self) -> PathBuf {
        self.project_root.join(&self.files.local)
    }

    /// Path of the signing properties file
    pub fn signing_properties_path(&self) -> PathBuf {
        self.project_root.join(&self.files.signing)
    }
}
