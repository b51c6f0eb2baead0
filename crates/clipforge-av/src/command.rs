//! Shell command execution with timeout and output verification.

use crate::progress::ProgressParser;
use crate::{Error, Result};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Default command timeout: 10 minutes.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Outcome of one external command run.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Process exit code.
    pub exit_code: i32,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Whether the declared output file existed and was non-empty after the
    /// run. Vacuously true when no output path was declared.
    pub output_exists: bool,
}

/// A shell command bound to an optional declared output path.
///
/// The command string is handed to `sh -c` verbatim. It is caller-trusted
/// text; no shell-metacharacter escaping is performed.
///
/// # Example
///
/// ```no_run
/// use clipforge_av::ShellCommand;
/// use std::time::Duration;
///
/// # async fn example() -> clipforge_av::Result<()> {
/// let result = ShellCommand::new("ffmpeg -i in.mp4 -c copy out.mp4")
///     .expect_output("out.mp4")
///     .timeout(Duration::from_secs(120))
///     .run()
///     .await?;
/// println!("{}", result.stderr);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command: String,
    output: Option<PathBuf>,
    timeout: Duration,
}

impl ShellCommand {
    /// Create a command to be run through the shell.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Declare the output path to verify after the process exits.
    pub fn expect_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Set the maximum wall-clock execution time.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Run the command, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] when the deadline expires; the process is killed
    ///   before returning.
    /// - [`Error::Process`] on a non-zero exit, with captured stderr.
    /// - [`Error::OutputMissing`] when the exit code is zero but the declared
    ///   output file is absent or empty. Some ffmpeg failures exit 0 while
    ///   writing a truncated file, so the exit code alone is not trusted.
    ///
    /// Execution is not retried: the command may append to or overwrite
    /// files, so it cannot be assumed idempotent.
    pub async fn run(&self) -> Result<ExecutionResult> {
        tracing::debug!("running: {}", self.command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            match stdout_pipe {
                Some(pipe) => drain_lines(pipe, |_| {}).await,
                None => String::new(),
            }
        });
        let stderr_task = tokio::spawn(async move {
            let mut progress = ProgressParser::new();
            match stderr_pipe {
                Some(pipe) => drain_lines(pipe, |line| progress.observe(line)).await,
                None => String::new(),
            }
        });

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => status?,
            Err(_elapsed) => {
                // Kill and reap so nothing outlives the deadline.
                let _ = child.kill().await;
                return Err(Error::Timeout {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        if !status.success() {
            return Err(Error::process(
                status.code().unwrap_or(-1),
                stderr.trim().to_string(),
            ));
        }

        if let Some(ref output) = self.output {
            let non_empty = std::fs::metadata(output)
                .map(|m| m.len() > 0)
                .unwrap_or(false);
            if !non_empty {
                return Err(Error::OutputMissing {
                    path: output.clone(),
                });
            }
        }

        Ok(ExecutionResult {
            exit_code: status.code().unwrap_or(0),
            stdout,
            stderr,
            output_exists: true,
        })
    }
}

async fn drain_lines<R>(reader: R, mut on_line: impl FnMut(&str)) -> String
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut captured = String::new();
    while let Ok(Some(line)) = lines.next_line().await {
        on_line(&line);
        captured.push_str(&line);
        captured.push('\n');
    }
    captured
}
