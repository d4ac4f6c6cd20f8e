// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! MSBuild driver for the generated Visual Studio solution (Windows hosts).

use super::{Architecture, BuildTarget, BuildTool, Configuration};
use crate::paths::Layout;
use crate::process::Invocation;
use crate::utils::cpu_count;

const MSBUILD: &str = "msbuild";

const CONSOLE_LOGGER_PARAMETERS: [&str; 5] = [
    "Summary",
    "ShowCommandLine",
    "ShowTimestamp",
    "ForceNoAlign",
    "DisableConsoleColor",
];

pub struct MsBuild {
    jobs: usize,
}

impl MsBuild {
    pub fn new() -> Self {
        Self::with_jobs(cpu_count())
    }

    pub fn with_jobs(jobs: usize) -> Self {
        Self { jobs }
    }

    fn target_name(target: BuildTarget) -> &'static str {
        match target {
            BuildTarget::Clean => "Clean",
            BuildTarget::Build => "Build",
            BuildTarget::Rebuild => "Rebuild",
        }
    }

    /// Solution platform names as Visual Studio spells them.
    fn platform_name(architecture: Architecture) -> &'static str {
        match architecture {
            Architecture::X86 => "Win32",
            Architecture::X64 => "x64",
        }
    }
}

impl Default for MsBuild {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildTool for MsBuild {
    fn name(&self) -> &'static str {
        MSBUILD
    }

    fn invocations(
        &self,
        target: BuildTarget,
        architecture: Architecture,
        configuration: Configuration,
        layout: &Layout,
    ) -> Vec<Invocation> {
        let invocation = Invocation::new(MSBUILD)
            .arg(layout.solution_file(architecture))
            .arg(format!("/target:{}", Self::target_name(target)))
            .arg(format!("/property:Platform={}", Self::platform_name(architecture)))
            .arg(format!("/property:Configuration={}", configuration))
            .arg(format!("/maxcpucount:{}", self.jobs))
            .arg("/verbosity:detailed")
            .arg(format!(
                "/consoleloggerparameters:{}",
                CONSOLE_LOGGER_PARAMETERS.join(";")
            ))
            .arg("/nologo");

        vec![invocation]
    }
}
