//! Build log sink
//!
//! Two text logs shared by every subprocess a build run launches:
//! - `build-output.log`: captured standard output
//! - `build-error.log`: captured standard error, plus the fatal error if the run fails
//!
//! Both files are truncated when the sink is created. Every entry starts with a
//! banner written to both logs so the two files line up entry by entry.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_LOG: &str = "build-output.log";
pub const ERROR_LOG: &str = "build-error.log";

/// Handle to the output/error log pair of a single run.
///
/// Writes are buffered; dropping the handle flushes both files.
pub struct BuildLog {
    output: BufWriter<File>,
    error: BufWriter<File>,
    output_path: PathBuf,
    error_path: PathBuf,
}

impl BuildLog {
    /// Create (or truncate) both log files inside `dir`.
    pub fn create(dir: &Path) -> io::Result<Self> {
        let output_path = dir.join(OUTPUT_LOG);
        let error_path = dir.join(ERROR_LOG);

        let output = BufWriter::new(File::create(&output_path)?);
        let error = BufWriter::new(File::create(&error_path)?);

        Ok(Self {
            output,
            error,
            output_path,
            error_path,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn error_path(&self) -> &Path {
        &self.error_path
    }

    /// Write the same banner to both logs.
    pub fn header(&mut self, header: &str) -> io::Result<()> {
        let banner = banner(header);
        self.output.write_all(banner.as_bytes())?;
        self.error.write_all(banner.as_bytes())
    }

    /// Append captured standard output verbatim.
    pub fn output(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)
    }

    /// Append captured standard error verbatim.
    pub fn error(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.error.write_all(bytes)
    }

    /// Append a single message line to the error log.
    pub fn error_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.error, "{}", message)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()?;
        self.error.flush()
    }
}

/// Frame `header` with a border of `*` sized to the header text.
///
/// ```text
///
/// ****************
/// * make -f Make *
/// ****************
///
/// ```
pub fn banner(header: &str) -> String {
    let border = "*".repeat(header.chars().count() + 4);
    format!("\n{border}\n* {header} *\n{border}\n\n")
}
