// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Platform toolchains.
//!
//! The host platform is detected once at startup and decides which build tool
//! drives `clean`/`build`/`rebuild`, which generators are accepted, and how the
//! produced executable is named and launched.

pub mod cmake;
pub mod cscript;
pub mod make;
pub mod msbuild;

use clap::ValueEnum;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::error::{BuildError, Result};
use crate::paths::Layout;
use crate::process::Invocation;

const VISUAL_STUDIO: &str = "Visual Studio";
const MAKEFILES: &str = "Makefiles";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Architecture {
    X86,
    X64,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::X86, Architecture::X64];

    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X64 => "x64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Configuration {
    Debug,
    Release,
}

impl Configuration {
    pub fn as_str(self) -> &'static str {
        match self {
            Configuration::Debug => "debug",
            Configuration::Release => "release",
        }
    }

    /// Directory name multi-configuration generators use for this variant.
    pub fn dir_name(self) -> &'static str {
        match self {
            Configuration::Debug => "Debug",
            Configuration::Release => "Release",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical build intent, translated into concrete verbs by each build tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildTarget {
    Clean,
    Build,
    Rebuild,
}

/// Turns a build intent into the tool invocations that carry it out.
pub trait BuildTool {
    fn name(&self) -> &'static str;

    /// Invocations for one architecture/configuration pair, in execution order.
    fn invocations(
        &self,
        target: BuildTarget,
        architecture: Architecture,
        configuration: Configuration,
        layout: &Layout,
    ) -> Vec<Invocation>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Builds driven through a generated Visual Studio solution.
    Windows,
    /// Builds driven through generated Makefiles.
    Unix,
}

impl Platform {
    pub fn host() -> Result<Self> {
        if cfg!(windows) {
            Ok(Platform::Windows)
        } else if cfg!(unix) {
            Ok(Platform::Unix)
        } else {
            Err(BuildError::UnsupportedPlatform {
                platform: std::env::consts::OS,
            })
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Unix => "Unix",
        }
    }

    /// Human readable generator family this platform requires.
    pub fn generator_family(self) -> &'static str {
        match self {
            Platform::Windows => "a Visual Studio generator",
            Platform::Unix => "a Makefiles generator",
        }
    }

    pub fn accepts_generator(self, generator: &str) -> bool {
        match self {
            Platform::Windows => generator.starts_with(VISUAL_STUDIO),
            Platform::Unix => generator.ends_with(MAKEFILES),
        }
    }

    /// Generator name passed to CMake for `architecture`.
    pub fn generator(self, name: &str, architecture: Architecture) -> String {
        match (self, architecture) {
            (Platform::Windows, Architecture::X64) if name.starts_with(VISUAL_STUDIO) => {
                format!("{} Win64", name)
            }
            _ => name.to_string(),
        }
    }

    pub fn exe_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Unix => "",
        }
    }

    pub fn build_tool(self) -> Box<dyn BuildTool> {
        match self {
            Platform::Windows => Box::new(msbuild::MsBuild::new()),
            Platform::Unix => Box::new(make::Make),
        }
    }

    /// Extra environment for launching the built application.
    ///
    /// On Windows the Qt DLLs are found through `PATH`, so the Qt binary
    /// directory is appended to it.
    pub fn run_env(self, qt_bin_dir: &Path) -> Result<Vec<(OsString, OsString)>> {
        match self {
            Platform::Windows => {
                let path = sys_search_path::append_to_var(sys_search_path::PATH_VAR, qt_bin_dir)?;
                Ok(vec![(OsString::from(sys_search_path::PATH_VAR), path)])
            }
            Platform::Unix => Ok(Vec::new()),
        }
    }
}
