//! Python host executor.
//!
//! Each run spawns a new interpreter in isolated mode (`-I`: no user site
//! packages, no `PYTHON*` environment, no script directory on `sys.path`)
//! and feeds the program on stdin. Output is unbuffered (`-u`) so a run
//! killed on timeout still reports what it printed. Standard output is captured as the
//! program's result.

use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{ExecError, ExecResult};
use crate::executor::{Execution, ExecutorConfig, HostExecutor};
use crate::traceback;

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs programs with a Python 3 interpreter.
#[derive(Debug, Clone, Default)]
pub struct PythonExecutor {
    config: ExecutorConfig,
}

impl PythonExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Whether the configured interpreter can be started.
    pub fn is_available(&self) -> bool {
        Command::new(&self.config.interpreter)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn spawn(&self) -> ExecResult<Child> {
        Command::new(&self.config.interpreter)
            .args(["-I", "-u", "-X", "utf8", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                interpreter: self.config.interpreter.clone(),
                source,
            })
    }
}

impl HostExecutor for PythonExecutor {
    fn execute(&self, host_source: &str) -> ExecResult<Execution> {
        let started = Instant::now();
        let mut child = self.spawn()?;
        tracing::debug!(pid = child.id(), interpreter = %self.config.interpreter, "spawned");

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        // Python reads the whole program before running it; closing stdin
        // marks the end of the source. A broken pipe means the interpreter
        // already exited, and its stderr says why.
        let fed = match feed(&mut child, host_source) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("interpreter closed stdin early");
                false
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
        };

        let status = match wait(&mut child, self.config.timeout)? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                let limit = self.config.timeout.unwrap_or_default();
                tracing::warn!(?limit, "run timed out");
                return Err(ExecError::Timeout {
                    limit,
                    captured_output: join(stdout)?,
                });
            }
        };

        let captured_output = join(stdout)?;
        let stderr = join(stderr)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(code = ?status.code(), elapsed_ms, "finished");

        if !fed {
            let tb = traceback::parse(&stderr);
            let message = if status.success() {
                "interpreter exited before reading the whole program".to_string()
            } else {
                tb.message
            };
            return Err(ExecError::Runtime {
                message,
                host_line: tb.host_line,
                ata_line: None,
                captured_output,
                stderr,
            });
        }

        if status.success() {
            Ok(Execution {
                captured_output,
                stderr,
                elapsed_ms,
            })
        } else {
            let tb = traceback::parse(&stderr);
            Err(ExecError::Runtime {
                message: tb.message,
                host_line: tb.host_line,
                ata_line: None,
                captured_output,
                stderr,
            })
        }
    }
}

/// Write the program to the child's stdin and close it.
fn feed(child: &mut Child, host_source: &str) -> io::Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(host_source.as_bytes())?;
        stdin.write_all(b"\n")?;
    }
    Ok(())
}

/// Wait for exit, giving up after `timeout`. `Ok(None)` means it timed out.
fn wait(child: &mut Child, timeout: Option<Duration>) -> io::Result<Option<std::process::ExitStatus>> {
    let Some(limit) = timeout else {
        return child.wait().map(Some);
    };
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Read a child pipe to the end on its own thread so a full pipe never
/// blocks the child.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<io::Result<String>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        })
    })
}

fn join(handle: Option<JoinHandle<io::Result<String>>>) -> io::Result<String> {
    match handle {
        None => Ok(String::new()),
        Some(handle) => handle
            .join()
            .map_err(|_| io::Error::other("output reader panicked"))?,
    }
}
