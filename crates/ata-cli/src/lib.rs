//! Command-line driver for the ATA transpiler.
//!
//! Everything the `ata` binary does lives here so it can be tested without
//! spawning the binary.

pub mod cli;
pub mod commands;
pub mod files;
pub mod logging;

pub use cli::{Cli, Command, ExecArgs};
pub use commands::{execute, Outcome, STARTER_PROGRAM};
