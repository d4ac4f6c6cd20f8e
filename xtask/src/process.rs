// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! External process invocation.
//!
//! Every tool runs to completion with its output captured in full, then the
//! captured streams are appended to the build logs.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;
use sys_build_log::BuildLog;
use tracing::{debug, warn};

use crate::error::{BuildError, Result};

/// A fully composed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    envs: Vec<(OsString, OsString)>,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn envs<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        self.envs.extend(vars);
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Program and arguments joined by single spaces, as shown in logs and errors.
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run `invocation`, appending its banner and captured streams to `log`.
///
/// A missing working directory means the current one. Fails on a non-zero exit;
/// a process killed by a signal reports exit code `-1`.
pub fn call(invocation: &Invocation, log: &mut BuildLog) -> Result<()> {
    let cwd = match invocation.cwd() {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };
    let command_line = invocation.command_line();
    let header = format!("{} (cwd: {})", command_line, cwd.display());

    println!("{}", header);
    log.header(&header)?;

    let program = which::which(invocation.program()).map_err(|source| BuildError::ToolNotFound {
        program: invocation.program().to_string_lossy().into_owned(),
        source,
    })?;
    debug!(program = %program.display(), "resolved tool");

    let output = Command::new(&program)
        .args(invocation.arguments())
        .current_dir(&cwd)
        .envs(invocation.envs.iter().map(|(k, v)| (k, v)))
        .output()
        .map_err(|source| BuildError::Launch {
            command: command_line.clone(),
            source,
        })?;

    log.output(&output.stdout)?;
    log.error(&output.stderr)?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        warn!(code, command = %command_line, "tool failed");
        return Err(BuildError::NonZeroExit {
            code,
            command: command_line,
        });
    }

    Ok(())
}
