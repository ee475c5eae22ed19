//! Delegate Executor
//!
//! Spawns the external text-generation process the assistant delegates to
//! (the Claude CLI by default), captures its output, and enforces a hard
//! wall-clock timeout. There is no cancellation path other than the timeout,
//! and no partial output is salvaged from a killed process.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Default wall-clock bound for one delegate invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the delegate process.
#[derive(Debug, Clone)]
pub struct DelegateConfig {
    /// Program to spawn
    pub program: String,
    /// Arguments placed before the prompt
    pub args: Vec<String>,
    /// Hard wall-clock timeout; the process is killed on expiry
    pub timeout: Duration,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            program: "claude".to_string(),
            args: vec!["-p".to_string()],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DelegateConfig {
    /// Configuration for a custom delegate program with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the arguments placed before the prompt.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the wall-clock timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Failure modes of one delegate invocation. These surface to the host as a
/// structured failure result; they are never thrown past the assistant
/// boundary.
#[derive(Error, Debug)]
pub enum DelegateError {
    /// The process could not be spawned at all
    #[error("Failed to launch delegate: {0}")]
    Spawn(String),

    /// The process ran but exited with a non-zero status
    #[error("Delegate exited with status {code:?}: {stderr}")]
    Process {
        code: Option<i32>,
        stderr: String,
    },

    /// The process exceeded the wall-clock bound and was killed
    #[error("Delegate timed out after {0:?}")]
    Timeout(Duration),
}

/// Runs delegate invocations against a fixed configuration.
#[derive(Debug, Clone)]
pub struct DelegateRunner {
    config: DelegateConfig,
}

impl DelegateRunner {
    /// Create a runner for the given configuration.
    pub fn new(config: DelegateConfig) -> Self {
        Self { config }
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Run the delegate with `prompt` as its final argument and return its
    /// trimmed standard output.
    pub async fn run(&self, prompt: &str) -> Result<String, DelegateError> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(program = %self.config.program, prompt_len = prompt.len(), "invoking delegate");

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DelegateError::Spawn(format!("{} not found on PATH", self.config.program))
            } else {
                DelegateError::Spawn(e.to_string())
            }
        })?;

        let output = match tokio::time::timeout(self.config.timeout, child.wait_with_output()).await
        {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(DelegateError::Spawn(e.to_string())),
            // Dropping the in-flight wait kills the child via kill_on_drop.
            Err(_) => return Err(DelegateError::Timeout(self.config.timeout)),
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(DelegateError::Process {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
