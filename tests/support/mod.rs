//! Test support utilities for ecomap-config integration tests.
//!
//! Provides reusable project setup and helper commands.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// Child processes get the directory through `--project-dir`, so no
/// process-global state is touched and tests can run in parallel.
pub struct Test {
    /// Temporary Android project directory
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project with `local.properties` content.
    pub fn with_local(content: &str) -> Self {
        let t = Self::new();
        t.write("local.properties", content);
        t
    }

    /// Create a project with a key store and a matching `key.properties`.
    pub fn with_key_store() -> Self {
        let t = Self::new();
        t.write("upload.jks", KEY_STORE_BYTES);
        t.write("key.properties", SIGNING_PROPERTIES);
        t
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write fixture");
        path
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }
}
