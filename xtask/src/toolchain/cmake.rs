// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! CMake configure step.

use sys_build_log::BuildLog;

use super::{Architecture, Platform};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::paths::Layout;
use crate::process::{call, Invocation};

const CMAKE: &str = "cmake";

/// `cmake -DQT_INSTALL_DIR=<dir> -G <generator> <root>`, run from `out/<arch>`.
pub fn configure_invocation(
    layout: &Layout,
    config: &BuildConfig,
    platform: Platform,
    architecture: Architecture,
) -> Invocation {
    Invocation::new(CMAKE)
        .arg(format!("-DQT_INSTALL_DIR={}", config.qt_install_dir.display()))
        .arg("-G")
        .arg(platform.generator(&config.generator, architecture))
        .arg(layout.root())
        .current_dir(layout.output_dir(architecture))
}

/// The output directory must already exist.
pub fn configure(
    layout: &Layout,
    config: &BuildConfig,
    platform: Platform,
    architecture: Architecture,
    log: &mut BuildLog,
) -> Result<()> {
    call(
        &configure_invocation(layout, config, platform, architecture),
        log,
    )
}
