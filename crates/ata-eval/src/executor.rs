//! The host-executor boundary.
//!
//! A [`HostExecutor`] takes generated Python and returns what it printed.
//! Every call is a fresh, isolated run; nothing carries over between calls.

use std::time::Duration;

use ata_codegen::CompiledProgram;
use serde::{Deserialize, Serialize};

use crate::error::{ExecError, ExecResult};

/// Interpreter used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Wall-clock limit used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Output of one successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    /// Everything the program wrote to standard output.
    pub captured_output: String,
    /// Anything written to standard error (warnings, mostly).
    pub stderr: String,
    pub elapsed_ms: u64,
}

/// Runs host-language source.
pub trait HostExecutor {
    /// Run `host_source` in a fresh namespace and capture its output.
    fn execute(&self, host_source: &str) -> ExecResult<Execution>;
}

/// Settings for process-based executors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Interpreter command, looked up on `PATH`.
    pub interpreter: String,
    /// Kill the run after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Run a compiled program, pointing runtime errors back at ATA lines.
pub fn run_program<E: HostExecutor + ?Sized>(
    executor: &E,
    program: &CompiledProgram,
) -> ExecResult<Execution> {
    let _span = tracing::debug_span!("run", source_hash = program.source_hash()).entered();
    match executor.execute(&program.to_host_source()) {
        Err(ExecError::Runtime {
            message,
            host_line,
            ata_line: None,
            captured_output,
            stderr,
        }) => {
            let ata_line = host_line.and_then(|l| program.source_map().ata_line(l));
            tracing::debug!(?host_line, ?ata_line, "runtime error");
            Err(ExecError::Runtime {
                message,
                host_line,
                ata_line,
                captured_output,
                stderr,
            })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ata_codegen::EmittedLine;

    /// Fails every run at a fixed host line.
    struct FailingAt(u32);

    impl HostExecutor for FailingAt {
        fn execute(&self, _host_source: &str) -> ExecResult<Execution> {
            Err(ExecError::Runtime {
                message: "ZeroDivisionError: division by zero".into(),
                host_line: Some(self.0),
                ata_line: None,
                captured_output: "ok\n".into(),
                stderr: String::new(),
            })
        }
    }

    /// Echoes the source back as output.
    struct Echo;

    impl HostExecutor for Echo {
        fn execute(&self, host_source: &str) -> ExecResult<Execution> {
            Ok(Execution {
                captured_output: host_source.to_string(),
                stderr: String::new(),
                elapsed_ms: 0,
            })
        }
    }

    fn program() -> CompiledProgram {
        let line = |rendered: &str, source_line| EmittedLine {
            depth: 0,
            rendered: rendered.into(),
            source_line,
        };
        CompiledProgram::new(vec![line("print('ok')", 2), line("print(1 / 0)", 5)], "")
    }

    #[test]
    fn runtime_error_resolves_ata_line() {
        let err = run_program(&FailingAt(2), &program()).unwrap_err();
        match err {
            ExecError::Runtime { host_line, ata_line, captured_output, .. } => {
                assert_eq!(host_line, Some(2));
                assert_eq!(ata_line, Some(5));
                assert_eq!(captured_output, "ok\n");
            }
            other => panic!("expected runtime error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_host_line_stays_unresolved() {
        let err = run_program(&FailingAt(40), &program()).unwrap_err();
        assert!(matches!(err, ExecError::Runtime { ata_line: None, .. }));
    }

    #[test]
    fn success_passes_through() {
        let out = run_program(&Echo, &program()).unwrap();
        assert_eq!(out.captured_output, "print('ok')\nprint(1 / 0)");
    }

    #[test]
    fn default_config() {
        let config = ExecutorConfig::default();
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }
}
