//! ecomap-config - Build configuration resolver for the Ecomap Android app.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Show the resolved configuration
//! │   ├── secret        # Print a single resolved secret
//! │   ├── signing       # Show the signing identity
//! │   ├── check         # Verify signing material per build variant
//! │   ├── manifest      # Inject manifest placeholders
//! │   ├── set           # Write a key into a property file
//! │   ├── info          # SDK constants and declared dependencies
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # key=value property files
//!     ├── secret        # Secret lookup with empty fallback
//!     ├── signing       # Signing identity and key store checks
//!     ├── build         # Build variants and the resolved build view
//!     ├── manifest      # ${NAME} placeholder substitution
//!     ├── settings      # .ecomap.toml tool settings
//!     └── constants     # File names, keys, defaults
//! ```
//!
//! # Features
//!
//! - Permissive `.properties` parsing (absent file = empty, malformed lines skipped)
//! - Signing identity with defaults and sign-time key store validation
//! - Per-variant signing checks that fail independently
//! - Manifest placeholder injection

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::build::{BuildConfig, BuildVariant};
pub use crate::core::properties::PropertyFile;
pub use crate::core::secret::resolve_secret;
pub use crate::core::settings::Settings;
pub use crate::core::signing::{resolve_signing_identity, SigningIdentity, SigningMaterial};
