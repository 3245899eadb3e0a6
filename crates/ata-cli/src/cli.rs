//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use ata_eval::{ExecutorConfig, DEFAULT_INTERPRETER};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ata", version, about = "Compile and run ATA programs")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). `ATA_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate an .ata file to Python.
    Compile {
        file: PathBuf,
        /// Write the Python here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the structured compile result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Compile an .ata file and run it.
    Run {
        file: PathBuf,
        #[command(flatten)]
        exec: ExecArgs,
        /// Print the generated Python to stderr before running.
        #[arg(long)]
        show_python: bool,
    },
    /// Report compile errors without producing output.
    Check {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show a file with line numbers.
    Lines { file: PathBuf },
    /// Create a new .ata file from a starter program.
    New {
        file: PathBuf,
        /// Replace the file if it exists.
        #[arg(long)]
        force: bool,
    },
    /// Print the language reference.
    Reference {
        /// Print the keyword table as JSON instead.
        #[arg(long)]
        json: bool,
    },
}

/// Settings for the Python executor.
#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
    /// Python interpreter to run programs with.
    #[arg(long, env = "ATA_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub python: String,

    /// Stop the program after this many seconds (0 = no limit).
    #[arg(long, env = "ATA_TIMEOUT", default_value_t = 10.0)]
    pub timeout: f64,
}

impl ExecArgs {
    pub fn to_config(&self) -> ExecutorConfig {
        let timeout = (self.timeout > 0.0)
            .then(|| Duration::try_from_secs_f64(self.timeout).ok())
            .flatten();
        ExecutorConfig {
            interpreter: self.python.clone(),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["ata", "run", "kare.ata"]).unwrap();
        match cli.command {
            Command::Run { file, exec, show_python } => {
                assert_eq!(file, PathBuf::from("kare.ata"));
                assert!(!show_python);
                let config = exec.to_config();
                assert_eq!(config.timeout, Some(Duration::from_secs(10)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn zero_timeout_disables_limit() {
        let exec = ExecArgs {
            python: "python3".into(),
            timeout: 0.0,
        };
        assert_eq!(exec.to_config().timeout, None);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["ata", "-vv", "lines", "a.ata"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
