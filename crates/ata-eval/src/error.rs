//! Host execution error types.
//!
//! These are a separate category from compile errors: a program that
//! compiled cleanly can still fail here.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while running a compiled program.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The interpreter could not be started.
    #[error("could not start '{interpreter}': {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: io::Error,
    },

    /// Talking to the child process failed.
    #[error("I/O error while running program: {0}")]
    Io(#[from] io::Error),

    /// The program raised an exception or exited non-zero.
    #[error("{}", runtime_message(.message, .ata_line))]
    Runtime {
        /// Last line of the traceback, e.g. `NameError: name 'x' is not defined`.
        message: String,
        /// Host line named by the traceback, if any.
        host_line: Option<u32>,
        /// The ATA line that produced `host_line`, once resolved.
        ata_line: Option<u32>,
        /// Output written before the failure.
        captured_output: String,
        /// Full standard error of the run.
        stderr: String,
    },

    /// The program ran past the configured limit and was killed.
    #[error("program did not finish within {}s and was stopped", .limit.as_secs_f64())]
    Timeout {
        limit: Duration,
        captured_output: String,
    },
}

fn runtime_message(message: &str, ata_line: &Option<u32>) -> String {
    match ata_line {
        Some(line) => format!("runtime error on line {line}: {message}"),
        None => format!("runtime error: {message}"),
    }
}

impl ExecError {
    /// Output the program produced before it failed, if any was captured.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::Runtime { captured_output, .. } | Self::Timeout { captured_output, .. } => {
                Some(captured_output)
            }
            Self::Spawn { .. } | Self::Io(_) => None,
        }
    }
}

/// Result alias for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;
