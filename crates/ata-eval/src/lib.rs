//! ATA host executor: runs compiled programs and captures their output.
//!
//! The compiler only produces Python; running it is this crate's job.
//! [`PythonExecutor`] starts a fresh interpreter per run, so no state can
//! leak from one run into the next, and enforces an optional wall-clock
//! limit. Runtime failures are [`ExecError`]s, never compile errors.

pub mod error;
pub mod executor;
pub mod python;
pub mod traceback;

pub use error::{ExecError, ExecResult};
pub use executor::{
    run_program, Execution, ExecutorConfig, HostExecutor, DEFAULT_INTERPRETER, DEFAULT_TIMEOUT,
};
pub use python::PythonExecutor;
