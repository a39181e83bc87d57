//! Build resolution.
//!
//! Combines `local.properties` and `key.properties` into the view the build
//! consumes: manifest placeholders, the shared signing identity, and the
//! per-variant settings.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::properties::PropertyFile;
use crate::core::secret::resolve_secret;
use crate::core::settings::Settings;
use crate::core::signing::{self, resolve_signing_identity, SigningIdentity, SigningMaterial};
use crate::core::types::Placeholders;
use crate::error::Result;

/// A build variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    Debug,
    Release,
}

impl BuildVariant {
    /// Every variant, in build order.
    pub const ALL: [BuildVariant; 2] = [BuildVariant::Debug, BuildVariant::Release];

    /// Lowercase variant name
    pub fn name(self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed settings of one build variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantConfig {
    pub variant: BuildVariant,
    /// `app_name` string resource
    pub app_name: &'static str,
    pub minify: bool,
    pub shrink_resources: bool,
    /// Name of the signing configuration this variant signs with
    pub signing_config: &'static str,
}

impl VariantConfig {
    /// Settings for `variant`.
    ///
    /// Both variants sign with the unified configuration; release never falls
    /// back to debug signing.
    pub fn for_variant(variant: BuildVariant) -> Self {
        match variant {
            BuildVariant::Debug => Self {
                variant,
                app_name: "Ecomap Debug",
                minify: false,
                shrink_resources: false,
                signing_config: constants::SIGNING_CONFIG_NAME,
            },
            BuildVariant::Release => Self {
                variant,
                app_name: "Ecomap",
                minify: true,
                shrink_resources: true,
                signing_config: constants::SIGNING_CONFIG_NAME,
            },
        }
    }
}

/// Resolved build configuration.
///
/// Built once per invocation and passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    project_root: PathBuf,
    placeholders: Placeholders,
    signing: SigningIdentity,
}

impl BuildConfig {
    /// Load both property files named by `settings` and resolve them.
    ///
    /// Absent files resolve to defaults.
    ///
    /// # Errors
    ///
    /// Returns `PropertyError::Read` if a property file exists but cannot be read.
    pub fn resolve(settings: &Settings) -> Result<Self> {
        let local_path = settings.local_properties_path();
        let signing_path = settings.signing_properties_path();

        let local = PropertyFile::load(&local_path)?;
        let signing_file = PropertyFile::load(&signing_path)?;
        if signing_path.exists() {
            signing::warn_if_exposed(&signing_path);
        }

        Ok(Self::from_files(settings.project_root(), &local, &signing_file))
    }

    /// Resolve from already loaded property files.
    pub fn from_files(project_root: &Path, local: &PropertyFile, signing: &PropertyFile) -> Self {
        let maps_key = resolve_secret(local, constants::GOOGLE_MAPS_API_KEY);
        if maps_key.is_empty() {
            warn!(
                key = constants::GOOGLE_MAPS_API_KEY,
                "maps API key not set, placeholder will be empty"
            );
        }

        let mut placeholders = Placeholders::new();
        placeholders.insert(
            constants::APPLICATION_ID_PLACEHOLDER.to_string(),
            constants::APPLICATION_ID.to_string(),
        );
        placeholders.insert(constants::GOOGLE_MAPS_API_KEY.to_string(), maps_key);

        debug!(placeholders = placeholders.len(), "build configuration resolved");

        Self {
            project_root: project_root.to_path_buf(),
            placeholders,
            signing: resolve_signing_identity(signing, project_root),
        }
    }

    /// Project root the configuration was resolved against
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Manifest placeholders, by name
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Resolved maps API key (empty when unset)
    pub fn maps_api_key(&self) -> &str {
        self.placeholders
            .get(constants::GOOGLE_MAPS_API_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The unified signing identity
    pub fn signing_identity(&self) -> &SigningIdentity {
        &self.signing
    }

    /// Settings of one variant
    pub fn variant(&self, variant: BuildVariant) -> VariantConfig {
        VariantConfig::for_variant(variant)
    }

    /// Signing material for one variant.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingSigningMaterial` if the key store is not
    /// usable. The failure concerns this variant only.
    pub fn sign(&self, variant: BuildVariant) -> Result<SigningMaterial<'_>> {
        debug!(%variant, "resolving signing material");

        self.signing.signing_material().map_err(|e| {
            warn!(%variant, error = %e, "variant cannot be signed");
            e
        })
    }

    /// Check every variant independently.
    pub fn check_all(&self) -> Vec<(BuildVariant, Result<SigningMaterial<'_>>)> {
        BuildVariant::ALL
            .iter()
            .map(|&variant| (variant, self.sign(variant)))
            .collect()
    }
}
