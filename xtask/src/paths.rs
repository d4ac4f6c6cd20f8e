// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Repository layout.
//!
//! Pure path composition; nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::toolchain::{Architecture, Configuration};

pub const PRODUCT: &str = "Cursor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// `<root>/out`
    pub fn output_root(&self) -> PathBuf {
        self.root.join("out")
    }

    /// `<root>/out/<arch>`
    pub fn output_dir(&self, architecture: Architecture) -> PathBuf {
        self.output_root().join(architecture.as_str())
    }

    pub fn solution_file(&self, architecture: Architecture) -> PathBuf {
        self.output_dir(architecture).join(format!("{}.sln", PRODUCT))
    }

    /// `<root>/out/<arch>/Cursor/<Config>/Cursor<exe_suffix>`
    pub fn executable(
        &self,
        architecture: Architecture,
        configuration: Configuration,
        exe_suffix: &str,
    ) -> PathBuf {
        self.output_dir(architecture)
            .join(PRODUCT)
            .join(configuration.dir_name())
            .join(format!("{}{}", PRODUCT, exe_suffix))
    }

    pub fn open_solution_script(&self) -> PathBuf {
        self.root.join("build").join("open-vs-solution.js")
    }

    pub fn close_solution_script(&self) -> PathBuf {
        self.root.join("build").join("close-vs-solution.js")
    }
}

/// Qt's `bin` directory under the configured installation directory.
pub fn qt_bin_dir(qt_install_dir: &Path) -> PathBuf {
    qt_install_dir.join("bin")
}
