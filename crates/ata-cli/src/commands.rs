//! Subcommand implementations.
//!
//! Each command writes program output to `out` and diagnostics to `err`,
//! and reports how the run ended through [`Outcome`].

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ata_compiler::{compile_file, compile_to_result, reference};
use ata_eval::{run_program, ExecError, PythonExecutor};
use ata_types::{AtaError, SourceFile};

use crate::cli::{Command, ExecArgs};
use crate::files;

/// Program written by `ata new`.
pub const STARTER_PROGRAM: &str = "\
# Yeni ATA programı
fonksiyon kare(x):
    döndür x * x
bitti

tekrar 3
    yaz kare(2)
bitti
";

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    CompileFailed,
    RuntimeFailed,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::CompileFailed => 1,
            Self::RuntimeFailed => 2,
        }
    }
}

/// Dispatch one parsed command.
pub fn execute(command: &Command, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome> {
    match command {
        Command::Compile { file, output, json } => {
            compile(file, output.as_deref(), *json, out, err)
        }
        Command::Run { file, exec, show_python } => run(file, exec, *show_python, out, err),
        Command::Check { file, json } => check(file, *json, out, err),
        Command::Lines { file } => lines(file, out),
        Command::New { file, force } => new(file, *force, out),
        Command::Reference { json } => {
            if *json {
                writeln!(out, "{}", reference::generate_keyword_table())?;
            } else {
                write!(out, "{}", reference::generate_reference())?;
            }
            Ok(Outcome::Success)
        }
    }
}

fn open(path: &Path) -> Result<SourceFile> {
    let text = files::load(path)?;
    Ok(SourceFile::new(path.display().to_string(), text))
}

fn report(error: &AtaError, err: &mut dyn Write) -> Result<Outcome> {
    writeln!(err, "{}", error.render())?;
    Ok(Outcome::CompileFailed)
}

pub fn compile(
    path: &Path,
    output: Option<&Path>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let file = open(path)?;

    if json {
        let result = compile_to_result(&file.source, &file.name);
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(if result.success {
            Outcome::Success
        } else {
            Outcome::CompileFailed
        });
    }

    let program = match compile_file(&file) {
        Ok(program) => program,
        Err(error) => return report(&error, err),
    };
    let python = program.to_host_source();
    match output {
        Some(target) => {
            std::fs::write(target, format!("{python}\n"))
                .with_context(|| format!("could not write {}", target.display()))?;
            tracing::info!(path = %target.display(), lines = program.len(), "wrote python");
        }
        None => writeln!(out, "{python}")?,
    }
    Ok(Outcome::Success)
}

pub fn run(
    path: &Path,
    exec: &ExecArgs,
    show_python: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let file = open(path)?;
    let program = match compile_file(&file) {
        Ok(program) => program,
        Err(error) => return report(&error, err),
    };
    if show_python {
        writeln!(err, "{}\n", program.to_host_source())?;
    }

    let executor = PythonExecutor::new(exec.to_config());
    match run_program(&executor, &program) {
        Ok(execution) => {
            write!(out, "{}", execution.captured_output)?;
            Ok(Outcome::Success)
        }
        Err(failure @ (ExecError::Runtime { .. } | ExecError::Timeout { .. })) => {
            if let Some(partial) = failure.captured_output() {
                write!(out, "{partial}")?;
            }
            writeln!(err, "{}: {failure}", file.name)?;
            if let ExecError::Runtime { ata_line: Some(line), .. } = &failure {
                if let Some(text) = file.line(*line) {
                    writeln!(err, "{line:>4} | {}", text.trim_end())?;
                }
            }
            Ok(Outcome::RuntimeFailed)
        }
        Err(other) => Err(other).with_context(|| {
            format!(
                "could not run the program with '{}' (set ATA_PYTHON or --python)",
                exec.python
            )
        }),
    }
}

pub fn check(path: &Path, json: bool, out: &mut dyn Write, err: &mut dyn Write) -> Result<Outcome> {
    let file = open(path)?;
    match (compile_file(&file), json) {
        (Ok(_), false) => {
            writeln!(out, "{}: ok", file.name)?;
            Ok(Outcome::Success)
        }
        (Ok(_), true) => {
            writeln!(out, "null")?;
            Ok(Outcome::Success)
        }
        (Err(error), false) => report(&error, err),
        (Err(error), true) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&error)?)?;
            Ok(Outcome::CompileFailed)
        }
    }
}

pub fn lines(path: &Path, out: &mut dyn Write) -> Result<Outcome> {
    let file = open(path)?;
    writeln!(out, "{}", file.numbered())?;
    Ok(Outcome::Success)
}

pub fn new(path: &Path, force: bool, out: &mut dyn Write) -> Result<Outcome> {
    let written = files::save(path, STARTER_PROGRAM, force)?;
    writeln!(out, "created {}", written.display())?;
    Ok(Outcome::Success)
}
