// Copyright 2026 a7mddra
// SPDX-License-Identifier: Apache-2.0

//! Failures raised by build steps.
//!
//! Nothing below `main` recovers from these; the first one aborts the run.

use std::env::JoinPathsError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing config file {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Malformed config file {}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{option} config option must be specified in {}", path.display())]
    MissingOption { option: &'static str, path: PathBuf },

    #[error("Generator '{generator}' is not supported on {platform} (expected {expected})")]
    UnsupportedGenerator {
        generator: String,
        platform: &'static str,
        expected: &'static str,
    },

    #[error("No build tool registered for platform {platform}")]
    UnsupportedPlatform { platform: &'static str },

    #[error("Operation {operation} on path {} failed", path.display())]
    RemovalFailure {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error {code} calling {command}")]
    NonZeroExit { code: i32, command: String },

    #[error("{program} not found")]
    ToolNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to launch {command}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot extend search path")]
    SearchPath(#[from] JoinPathsError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
