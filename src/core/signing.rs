//! Signing identity.
//!
//! Assembles the credentials used to sign build artifacts from
//! `key.properties`. Resolution never fails; the key store is only checked
//! when a variant is actually signed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::properties::PropertyFile;
use crate::error::{Result, SigningError};

/// Credentials for signing an artifact.
///
/// Immutable once resolved. Passwords are wiped from memory on drop and
/// never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    key_alias: String,
    key_password: Zeroizing<String>,
    store_file: Option<PathBuf>,
    store_password: Zeroizing<String>,
}

/// Resolve a signing identity from a property file.
///
/// Missing keys take their defaults: alias `ecomap`, empty passwords and no
/// key store. A relative `storeFile` is resolved against `project_root`; the
/// path is stored as-is without checking that it exists.
pub fn resolve_signing_identity(file: &PropertyFile, project_root: &Path) -> SigningIdentity {
    let store_file = file.get(constants::STORE_FILE).map(|p| project_root.join(p));

    let identity = SigningIdentity {
        key_alias: file
            .get_or(constants::KEY_ALIAS, constants::DEFAULT_KEY_ALIAS)
            .to_string(),
        key_password: Zeroizing::new(file.get_or(constants::KEY_PASSWORD, "").to_string()),
        store_file,
        store_password: Zeroizing::new(file.get_or(constants::STORE_PASSWORD, "").to_string()),
    };

    debug!(
        alias = %identity.key_alias,
        store_file = ?identity.store_file,
        "signing identity resolved"
    );

    identity
}

impl SigningIdentity {
    /// Key alias inside the key store
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Password of the key
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Key store path, if configured
    pub fn store_file(&self) -> Option<&Path> {
        self.store_file.as_deref()
    }

    /// Password of the key store
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Check the key store and hand out the material needed to sign.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::MissingSigningMaterial` when no key store is
    /// configured, or the configured path is missing, empty, or not a file.
    /// Returns `SigningError::KeyStoreRead` if the key store cannot be read.
    pub fn signing_material(&self) -> Result<SigningMaterial<'_>> {
        let store_file = self.store_file.as_deref().ok_or_else(|| {
            SigningError::MissingSigningMaterial {
                reason: format!("{} is not set in {}", constants::STORE_FILE, constants::KEY_PROPERTIES),
            }
        })?;

        match fs::metadata(store_file) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(SigningError::MissingSigningMaterial {
                    reason: format!("key store {} is not a file", store_file.display()),
                }
                .into())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SigningError::MissingSigningMaterial {
                    reason: format!("key store not found at {}", store_file.display()),
                }
                .into())
            }
            Err(source) => {
                return Err(SigningError::KeyStoreRead {
                    path: store_file.to_path_buf(),
                    source,
                }
                .into())
            }
        }

        let bytes = fs::read(store_file).map_err(|source| SigningError::KeyStoreRead {
            path: store_file.to_path_buf(),
            source,
        })?;

        if bytes.is_empty() {
            return Err(SigningError::MissingSigningMaterial {
                reason: format!("key store {} is empty", store_file.display()),
            }
            .into());
        }

        let fingerprint = format!("{:x}", Sha256::digest(&bytes));
        debug!(path = %store_file.display(), %fingerprint, "key store verified");

        Ok(SigningMaterial {
            identity: self,
            store_file,
            fingerprint,
        })
    }
}

impl Default for SigningIdentity {
    fn default() -> Self {
        resolve_signing_identity(&PropertyFile::new(), Path::new(""))
    }
}

impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .finish()
    }
}

/// A signing identity whose key store has been verified.
#[derive(Debug)]
pub struct SigningMaterial<'a> {
    identity: &'a SigningIdentity,
    store_file: &'a Path,
    fingerprint: String,
}

impl<'a> SigningMaterial<'a> {
    /// The identity this material came from
    pub fn identity(&self) -> &'a SigningIdentity {
        self.identity
    }

    /// Verified key store path
    pub fn store_file(&self) -> &'a Path {
        self.store_file
    }

    /// SHA-256 of the key store contents, lowercase hex
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Warn when a credentials file is readable by group or others.
#[cfg(unix)]
pub fn warn_if_exposed(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let mode = metadata.permissions().mode() & 0o777;

    if mode & 0o077 != 0 {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", mode),
            "insecure credentials file permissions"
        );
    }
}

#[cfg(not(unix))]
pub fn warn_if_exposed(_path: &Path) {}
