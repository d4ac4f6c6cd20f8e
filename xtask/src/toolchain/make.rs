// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Makefile driver (Unix-like hosts).
//!
//! Makefiles are single-configuration, so the configuration only selects
//! which pass of the loop this is; the verbs are the same for both.

use super::{Architecture, BuildTarget, BuildTool, Configuration};
use crate::paths::Layout;
use crate::process::Invocation;

const MAKE: &str = "make";

pub struct Make;

impl Make {
    /// `make` has no rebuild verb, so rebuild is clean followed by all.
    fn verbs(target: BuildTarget) -> &'static [&'static str] {
        match target {
            BuildTarget::Clean => &["clean"],
            BuildTarget::Build => &["all"],
            BuildTarget::Rebuild => &["clean", "all"],
        }
    }
}

impl BuildTool for Make {
    fn name(&self) -> &'static str {
        MAKE
    }

    fn invocations(
        &self,
        target: BuildTarget,
        architecture: Architecture,
        _configuration: Configuration,
        layout: &Layout,
    ) -> Vec<Invocation> {
        Self::verbs(target)
            .iter()
            .map(|verb| {
                Invocation::new(MAKE)
                    .args(["-f", "Makefile", *verb])
                    .current_dir(layout.output_dir(architecture))
            })
            .collect()
    }
}
