//! External CI tool invocation.
//!
//! The encryption stage only needs "run with these arguments, give me
//! stdout". [`Runner`] captures that seam so tests can swap in a fake.
//!
//! ## Requirements
//!
//! - `travis` CLI must be installed (or another program set in `tool`)
//! - `travis login` must have been run once

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::error::{Result, RunnerError};

/// Command execution capability.
pub trait Runner {
    /// Run the tool with `args` and return its captured stdout.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError` if the process cannot be spawned, exits
    /// unsuccessfully, or writes non-UTF-8 output.
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// Runs the configured CI tool inside the project directory.
pub struct Travis {
    program: String,
    leading: Vec<String>,
    workdir: PathBuf,
}

impl Travis {
    /// Build a runner from a `tool` command line and a working directory.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::NotFound` if the program is not on PATH.
    pub fn new(tool: &[String], workdir: impl AsRef<Path>) -> Result<Self> {
        let (program, leading) = tool
            .split_first()
            .ok_or_else(|| RunnerError::NotFound(String::new()))?;

        let resolved = which::which(program)
            .map_err(|_| RunnerError::NotFound(program.to_string()))?;
        debug!(program = %resolved.display(), "resolved ci tool");

        Ok(Self {
            program: program.to_string(),
            leading: leading.to_vec(),
            workdir: workdir.as_ref().to_path_buf(),
        })
    }

    /// Human-readable command line, used in error messages.
    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.leading.iter().map(String::as_str))
            .chain(args.first().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Runner for Travis {
    fn run(&self, args: &[&str]) -> Result<String> {
        // Only the subcommand is logged; arguments may carry secrets.
        trace!(
            subcommand = args.first().copied().unwrap_or_default(),
            "running ci tool"
        );

        let output = Command::new(&self.program)
            .args(&self.leading)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunnerError::Failed {
                command: self.describe(args),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| RunnerError::InvalidOutput(self.describe(args)))?;

        trace!(stdout_len = stdout.len(), "ci tool finished");
        Ok(stdout)
    }
}
