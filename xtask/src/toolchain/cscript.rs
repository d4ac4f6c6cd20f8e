// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Open/close the generated solution in a running Visual Studio instance.
//!
//! Housekeeping only: when the solution has not been generated there is
//! nothing to open or close, and nothing is run.

use std::path::PathBuf;
use sys_build_log::BuildLog;
use tracing::debug;

use super::Architecture;
use crate::error::Result;
use crate::paths::Layout;
use crate::process::{call, Invocation};

const CSCRIPT: &str = "cscript";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionAction {
    Open,
    Close,
}

impl SolutionAction {
    fn script(self, layout: &Layout) -> PathBuf {
        match self {
            SolutionAction::Open => layout.open_solution_script(),
            SolutionAction::Close => layout.close_solution_script(),
        }
    }
}

/// `cscript <script> //NoLogo <solution>`, or `None` if the solution does not exist.
pub fn solution_invocation(
    layout: &Layout,
    action: SolutionAction,
    architecture: Architecture,
) -> Option<Invocation> {
    let solution = layout.solution_file(architecture);
    if !solution.exists() {
        debug!(solution = %solution.display(), ?action, "no solution, skipping");
        return None;
    }

    Some(
        Invocation::new(CSCRIPT)
            .arg(action.script(layout))
            .arg("//NoLogo")
            .arg(solution),
    )
}

pub fn run(
    layout: &Layout,
    action: SolutionAction,
    architecture: Architecture,
    log: &mut BuildLog,
) -> Result<()> {
    match solution_invocation(layout, action, architecture) {
        Some(invocation) => call(&invocation, log),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_noop_without_solution() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());

        for action in [SolutionAction::Open, SolutionAction::Close] {
            assert!(solution_invocation(&layout, action, Architecture::X64).is_none());
        }
    }

    #[test]
    fn test_noop_run_leaves_logs_empty() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let mut log = BuildLog::create(dir.path()).unwrap();

        run(&layout, SolutionAction::Open, Architecture::X86, &mut log).unwrap();
        log.flush().unwrap();

        assert_eq!(fs::read_to_string(log.output_path()).unwrap(), "");
    }

    #[test]
    fn test_invokes_script_host_when_solution_exists() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let solution = layout.solution_file(Architecture::X64);
        fs::create_dir_all(solution.parent().unwrap()).unwrap();
        fs::write(&solution, "").unwrap();

        let invocation =
            solution_invocation(&layout, SolutionAction::Close, Architecture::X64).unwrap();

        assert_eq!(invocation.program(), "cscript");
        assert_eq!(
            invocation.arguments(),
            [
                layout.close_solution_script().into_os_string(),
                "//NoLogo".into(),
                solution.into_os_string(),
            ]
        );
    }
}
