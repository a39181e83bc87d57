//! Error types.
//!
//! One top-level [`Error`] wraps a focused error enum per concern so callers
//! can match on the failure they care about.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Tool settings errors (`.ecomap.toml` and project root).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("project directory not found: {}", .path.display())]
    ProjectRoot { path: PathBuf },

    #[error("failed to read settings file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Property file errors.
///
/// A missing file is never one of these; it resolves to an empty mapping.
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid property key: {0:?}")]
    InvalidKey(String),
}

/// Signing errors.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("missing signing material: {reason}")]
    MissingSigningMaterial { reason: String },

    #[error("failed to read key store {}: {source}", .path.display())]
    KeyStoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `missing_material` is set when every failure was
    /// [`SigningError::MissingSigningMaterial`].
    #[error("signing check failed for: {variants}")]
    VariantsFailed {
        variants: String,
        missing_material: bool,
    },
}

/// Manifest placeholder errors.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("unresolved manifest placeholders: {}", placeholder_list(.0))]
    UnresolvedPlaceholders(Vec<String>),

    #[error("failed to read manifest template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn placeholder_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("${{{}}}", name))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// A suggested next step for the user, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Signing(SigningError::MissingSigningMaterial { .. })
            | Error::Signing(SigningError::VariantsFailed {
                missing_material: true,
                ..
            }) => Some(
                "set storeFile in key.properties: ecomap-config set storeFile <path> --file signing",
            ),
            Error::Signing(SigningError::KeyStoreRead { .. })
            | Error::Signing(SigningError::VariantsFailed { .. }) => {
                Some("check that the key store is readable by the current user")
            }
            Error::Config(ConfigError::ProjectRoot { .. }) => {
                Some("pass the Android project directory with --project-dir")
            }
            Error::Config(ConfigError::Parse(_)) => Some("fix or remove .ecomap.toml"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
