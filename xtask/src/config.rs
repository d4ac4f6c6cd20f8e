// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Build configuration document (`.build.config.json` at the repository root).
//!
//! ```json
//! { "qt_install_dir": "C:\\Qt\\5.9\\msvc2017_64", "generator": "Visual Studio 15 2017" }
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BuildError, Result};
use crate::toolchain::Platform;

pub const CONFIG_FILE_NAME: &str = ".build.config.json";

pub const QT_INSTALL_DIR: &str = "qt_install_dir";
pub const GENERATOR: &str = "generator";

/// Config document as read from disk; required keys may still be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOptions {
    pub qt_install_dir: Option<PathBuf>,
    pub generator: Option<String>,

    #[serde(skip)]
    path: PathBuf,
}

/// Config options checked against the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub qt_install_dir: PathBuf,
    pub generator: String,
}

impl ConfigOptions {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BuildError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path)?;
        let mut options = Self::parse(&contents).map_err(|source| BuildError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        })?;
        options.path = path.to_path_buf();

        debug!(path = %path.display(), ?options, "loaded config");
        Ok(options)
    }

    /// The document must be a JSON object; arrays are rejected even when
    /// their elements would line up with the fields.
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let document: Map<String, Value> = serde_json::from_str(contents)?;
        serde_json::from_value(Value::Object(document))
    }

    pub fn validate(self, platform: Platform) -> Result<BuildConfig> {
        let qt_install_dir = self.qt_install_dir.ok_or_else(|| BuildError::MissingOption {
            option: QT_INSTALL_DIR,
            path: self.path.clone(),
        })?;
        let generator = self.generator.ok_or_else(|| BuildError::MissingOption {
            option: GENERATOR,
            path: self.path.clone(),
        })?;

        if !platform.accepts_generator(&generator) {
            return Err(BuildError::UnsupportedGenerator {
                generator,
                platform: platform.name(),
                expected: platform.generator_family(),
            });
        }

        Ok(BuildConfig {
            qt_install_dir,
            generator,
        })
    }
}
