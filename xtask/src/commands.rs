// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Command handlers.
//!
//! Every handler walks the requested architectures (and configurations, where
//! relevant) in order and stops at the first failing tool.

use clap::ValueEnum;
use std::ffi::OsString;
use std::fmt;
use sys_build_log::BuildLog;
use tracing::info;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::paths::{qt_bin_dir, Layout};
use crate::process::{call, Invocation};
use crate::toolchain::cscript::{self, SolutionAction};
use crate::toolchain::{cmake, Architecture, BuildTarget, BuildTool, Configuration, Platform};
use crate::utils::{display_path, ensure_dir, remove_dir_tree};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CommandName {
    /// Open the generated solutions in Visual Studio
    Open,
    /// Close every generated solution
    Close,
    /// Close solutions and remove the whole output tree
    Distclean,
    /// Generate build files with CMake
    Configure,
    Clean,
    Build,
    Rebuild,
    /// Launch the built application
    Run,
}

impl CommandName {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Open => "open",
            CommandName::Close => "close",
            CommandName::Distclean => "distclean",
            CommandName::Configure => "configure",
            CommandName::Clean => "clean",
            CommandName::Build => "build",
            CommandName::Rebuild => "rebuild",
            CommandName::Run => "run",
        }
    }

    pub fn execute(self, session: &mut Session<'_>, options: &RunOptions) -> Result<()> {
        info!(command = self.as_str(), "running");
        match self {
            CommandName::Open => open_solutions(session, options),
            CommandName::Close => close_solutions(session),
            CommandName::Distclean => distclean(session),
            CommandName::Configure => configure(session, options),
            CommandName::Clean => build_target(session, options, BuildTarget::Clean),
            CommandName::Build => build_target(session, options, BuildTarget::Build),
            CommandName::Rebuild => build_target(session, options, BuildTarget::Rebuild),
            CommandName::Run => run(session, options),
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub commands: Vec<CommandName>,
    pub configurations: Vec<Configuration>,
    pub architectures: Vec<Architecture>,
    pub arguments: Vec<OsString>,
}

/// Everything a command needs for the duration of one run.
pub struct Session<'a> {
    pub layout: Layout,
    pub config: BuildConfig,
    pub platform: Platform,
    build_tool: Box<dyn BuildTool>,
    log: &'a mut BuildLog,
}

impl<'a> Session<'a> {
    pub fn new(layout: Layout, config: BuildConfig, platform: Platform, log: &'a mut BuildLog) -> Self {
        Self::with_build_tool(layout, config, platform, platform.build_tool(), log)
    }

    pub fn with_build_tool(
        layout: Layout,
        config: BuildConfig,
        platform: Platform,
        build_tool: Box<dyn BuildTool>,
        log: &'a mut BuildLog,
    ) -> Self {
        Self {
            layout,
            config,
            platform,
            build_tool,
            log,
        }
    }
}

fn open_solutions(session: &mut Session<'_>, options: &RunOptions) -> Result<()> {
    for &architecture in &options.architectures {
        cscript::run(&session.layout, SolutionAction::Open, architecture, session.log)?;
    }
    Ok(())
}

/// Closes every known architecture, not just the requested ones.
fn close_solutions(session: &mut Session<'_>) -> Result<()> {
    for architecture in Architecture::ALL {
        cscript::run(&session.layout, SolutionAction::Close, architecture, session.log)?;
    }
    Ok(())
}

fn distclean(session: &mut Session<'_>) -> Result<()> {
    // Visual Studio holds files under out/ open
    close_solutions(session)?;

    let output_root = session.layout.output_root();
    println!(
        "  Removing {}",
        display_path(session.layout.root(), &output_root)
    );
    remove_dir_tree(&output_root)
}

fn configure(session: &mut Session<'_>, options: &RunOptions) -> Result<()> {
    close_solutions(session)?;

    for &architecture in &options.architectures {
        let output_dir = session.layout.output_dir(architecture);
        println!(
            "  Configuring {}",
            display_path(session.layout.root(), &output_dir)
        );
        ensure_dir(&output_dir)?;
        cmake::configure(
            &session.layout,
            &session.config,
            session.platform,
            architecture,
            session.log,
        )?;
    }
    Ok(())
}

/// Architecture-major over the requested configurations.
fn build_target(session: &mut Session<'_>, options: &RunOptions, target: BuildTarget) -> Result<()> {
    for &architecture in &options.architectures {
        for &configuration in &options.configurations {
            info!(
                tool = session.build_tool.name(),
                ?target,
                %architecture,
                %configuration,
                "building"
            );
            let invocations =
                session
                    .build_tool
                    .invocations(target, architecture, configuration, &session.layout);
            for invocation in &invocations {
                call(invocation, session.log)?;
            }
        }
    }
    Ok(())
}

fn run(session: &mut Session<'_>, options: &RunOptions) -> Result<()> {
    let env = session
        .platform
        .run_env(&qt_bin_dir(&session.config.qt_install_dir))?;

    for &architecture in &options.architectures {
        for &configuration in &options.configurations {
            let executable = session.layout.executable(
                architecture,
                configuration,
                session.platform.exe_suffix(),
            );
            let invocation = Invocation::new(executable)
                .args(&options.arguments)
                .envs(env.iter().cloned());
            call(&invocation, session.log)?;
        }
    }
    Ok(())
}
