// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Usage:
//!   cargo xtask configure                 Generate build files for x64
//!   cargo xtask build -c debug release    Build both configurations
//!   cargo xtask rebuild -a x86 x64        Clean then build both architectures
//!   cargo xtask distclean                 Remove the whole out/ tree
//!   cargo xtask open | close              Open/close the Visual Studio solutions
//!   cargo xtask run --arguments <ARG>...  Launch the built application
//!
//! Commands run in the order given; the first failure stops the run.
//! Tool output goes to build-output.log and build-error.log in the
//! current directory.

mod commands;
mod config;
mod error;
mod paths;
mod process;
mod toolchain;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sys_build_log::BuildLog;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{CommandName, RunOptions, Session};
use config::ConfigOptions;
use paths::Layout;
use toolchain::{Architecture, Configuration, Platform};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Cursor")]
struct Cli {
    /// Commands to run, in order
    #[arg(value_enum, required = true, num_args = 1.., value_name = "COMMAND")]
    commands: Vec<CommandName>,

    /// Build configurations
    #[arg(short = 'c', long = "configuration", value_enum, num_args = 1.., default_value = "debug")]
    configurations: Vec<Configuration>,

    /// Target architectures
    #[arg(short = 'a', long = "architecture", value_enum, num_args = 1.., default_value = "x64")]
    architectures: Vec<Architecture>,

    /// Arguments passed through to the application by `run`.
    ///
    /// Takes every token after it, options included, so give it last:
    /// `run -c release --arguments --open notes.txt`
    #[arg(long, num_args = 0.., allow_hyphen_values = true)]
    arguments: Vec<OsString>,

    /// Repository root (defaults to the workspace containing xtask)
    #[arg(long, env = "CURSOR_REPO_ROOT")]
    repo_root: Option<PathBuf>,

    /// Debug-level diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            commands: self.commands.clone(),
            configurations: dedup(&self.configurations),
            architectures: dedup(&self.architectures),
            arguments: self.arguments.clone(),
        }
    }
}

/// Drop repeats, keeping first occurrences in order.
fn dedup<T: Copy + PartialEq>(values: &[T]) -> Vec<T> {
    let mut unique = Vec::with_capacity(values.len());
    for &value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut log = match BuildLog::create(Path::new(".")) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Failed to create build logs: {}", e);
            return ExitCode::from(1);
        }
    };

    let status = match run(&cli, &mut log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{:#}", e);
            debug!(error = ?e, "run failed");
            eprintln!("{}", message);
            if let Err(write_err) = log.error_line(&message) {
                eprintln!("Failed to write {}: {}", log.error_path().display(), write_err);
            }
            ExitCode::from(1)
        }
    };

    if let Err(e) = log.flush() {
        eprintln!("Failed to flush build logs: {}", e);
        return ExitCode::from(1);
    }
    status
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, log: &mut BuildLog) -> Result<()> {
    let options = cli.run_options();

    let root = cli.repo_root.clone().unwrap_or_else(utils::project_root);
    let root = std::path::absolute(&root)
        .with_context(|| format!("Failed to resolve repository root {}", root.display()))?;
    let layout = Layout::new(root);
    debug!(root = %layout.root().display(), ?options, "starting");

    let platform = Platform::host()?;
    let config = ConfigOptions::load(&layout.config_file())?.validate(platform)?;

    let mut session = Session::new(layout, config, platform, log);
    for &command in &options.commands {
        command.execute(&mut session, &options)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["xtask", "build"]).unwrap();
        let options = cli.run_options();
        assert_eq!(options.commands, [CommandName::Build]);
        assert_eq!(options.configurations, [Configuration::Debug]);
        assert_eq!(options.architectures, [Architecture::X64]);
        assert!(options.arguments.is_empty());
    }

    #[test]
    fn test_commands_keep_order_and_repeats() {
        let cli = Cli::try_parse_from([
            "xtask", "configure", "build", "build", "-c", "debug", "release", "-a", "x86", "x64",
        ])
        .unwrap();
        let options = cli.run_options();
        assert_eq!(
            options.commands,
            [CommandName::Configure, CommandName::Build, CommandName::Build]
        );
        assert_eq!(
            options.configurations,
            [Configuration::Debug, Configuration::Release]
        );
        assert_eq!(options.architectures, [Architecture::X86, Architecture::X64]);
    }

    #[test]
    fn test_unknown_values_rejected_by_parser() {
        assert!(Cli::try_parse_from(["xtask", "install"]).is_err());
        assert!(Cli::try_parse_from(["xtask", "build", "-c", "profile"]).is_err());
        assert!(Cli::try_parse_from(["xtask", "build", "-a", "arm64"]).is_err());
        assert!(Cli::try_parse_from(["xtask"]).is_err());
    }

    #[test]
    fn test_run_arguments_pass_through() {
        let cli =
            Cli::try_parse_from(["xtask", "run", "--arguments", "--file", "a.txt", "-x"]).unwrap();
        assert_eq!(
            cli.run_options().arguments,
            [OsString::from("--file"), "a.txt".into(), "-x".into()]
        );
    }

    #[test]
    fn test_arguments_take_every_later_token() {
        let cli =
            Cli::try_parse_from(["xtask", "run", "--arguments", "foo", "-c", "release"]).unwrap();
        let options = cli.run_options();
        assert_eq!(
            options.arguments,
            [OsString::from("foo"), "-c".into(), "release".into()]
        );
        assert_eq!(options.configurations, [Configuration::Debug]);

        let cli =
            Cli::try_parse_from(["xtask", "run", "-c", "release", "--arguments", "foo"]).unwrap();
        let options = cli.run_options();
        assert_eq!(options.arguments, [OsString::from("foo")]);
        assert_eq!(options.configurations, [Configuration::Release]);
    }

    #[test]
    fn test_repeated_architectures_collapse() {
        let cli = Cli::try_parse_from(["xtask", "build", "-a", "x64", "x86", "x64"]).unwrap();
        assert_eq!(
            cli.run_options().architectures,
            [Architecture::X64, Architecture::X86]
        );
    }
}
