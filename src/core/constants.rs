//! Constants used throughout ecomap-config.
//!
//! Centralizes file names, recognized keys and the fixed build settings of
//! the Ecomap Android app.

/// Local developer overrides, never committed.
pub const LOCAL_PROPERTIES: &str = "local.properties";

/// Signing credentials, never committed.
pub const KEY_PROPERTIES: &str = "key.properties";

/// Optional tool settings file in the project root.
pub const SETTINGS_FILE: &str = ".ecomap.toml";

/// Maps API key in `local.properties`, also the manifest placeholder name.
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// Signing keys recognized in `key.properties`.
pub const KEY_ALIAS: &str = "keyAlias";
pub const KEY_PASSWORD: &str = "keyPassword";
pub const STORE_FILE: &str = "storeFile";
pub const STORE_PASSWORD: &str = "storePassword";

/// Key alias used when `keyAlias` is not set.
pub const DEFAULT_KEY_ALIAS: &str = "ecomap";

/// Name of the signing configuration shared by every build variant.
pub const SIGNING_CONFIG_NAME: &str = "unified";

/// Placeholder the manifest merger always provides.
pub const APPLICATION_ID_PLACEHOLDER: &str = "applicationId";

pub const APPLICATION_ID: &str = "com.koudatek.ecomap";
pub const NAMESPACE: &str = "com.koudatek.ecomap";
pub const COMPILE_SDK: u32 = 35;
pub const TARGET_SDK: u32 = 35;
pub const MIN_SDK: u32 = 24;
pub const NDK_VERSION: &str = "27.0.12077973";
pub const JAVA_VERSION: u32 = 17;
pub const VERSION_CODE: u32 = 1;
pub const VERSION_NAME: &str = "1.0.0";

/// Declared dependency coordinates as `(configuration, coordinate)`.
///
/// Opaque to the resolver; handed to the dependency resolution step as-is.
pub const DEPENDENCIES: &[(&str, &str)] = &[
    (
        "coreLibraryDesugaring",
        "com.android.tools:desugar_jdk_libs:2.0.4",
    ),
    (
        "implementation",
        "platform(com.google.firebase:firebase-bom:33.0.0)",
    ),
    ("implementation", "com.google.firebase:firebase-analytics"),
    ("implementation", "com.google.firebase:firebase-auth"),
];
