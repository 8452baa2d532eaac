//! Status sources.
//!
//! A [`StatusSource`] supplies the raw status text for one scrape. `None`
//! means no output is available (command missing, failed, or exited
//! non-zero); it is never conflated with malformed text, which is the
//! parser's territory.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error};

/// Supplies raw status text on demand.
#[async_trait]
pub trait StatusSource: Send + Sync + Debug {
    /// Fetch the raw status text, or `None` when the source is unavailable.
    async fn fetch(&self) -> Option<String>;

    /// Human-readable description of the source, for logs and errors.
    fn description(&self) -> &str;
}

/// Runs an external status command and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    description: String,
}

impl CommandSource {
    /// Build a source from a whitespace-separated command line,
    /// e.g. `"wg show"` or `"sudo wg show"`.
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        let program = parts.next().unwrap_or_default();
        let args = parts.collect();
        Self {
            program,
            args,
            description: format!("command `{}`", command_line.trim()),
        }
    }
}

#[async_trait]
impl StatusSource for CommandSource {
    async fn fetch(&self) -> Option<String> {
        if self.program.is_empty() {
            error!("no status command configured");
            return None;
        }

        debug!("running {}", self.description);
        let output = match Command::new(&self.program).args(&self.args).output().await {
            Ok(output) => output,
            Err(e) => {
                error!("failed to run {}: {}", self.description, e);
                return None;
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(
                "{} exited with {}: {}",
                self.description,
                output.status,
                stderr.trim()
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("{} output: {}", self.description, stdout);
        Some(stdout)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A source backed by a fixed string, for tests and offline runs.
#[derive(Debug, Clone)]
pub struct FixedSource {
    text: String,
}

impl FixedSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl StatusSource for FixedSource {
    async fn fetch(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn description(&self) -> &str {
        "fixed text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_command_source_captures_stdout() {
        let source = CommandSource::new("echo interface: wg0");
        let output = source.fetch().await;
        assert_eq!(output.as_deref(), Some("interface: wg0\n"));
    }

    #[tokio::test]
    async fn test_command_source_nonzero_exit_is_unavailable() {
        let source = CommandSource::new("false");
        assert_eq!(source.fetch().await, None);
    }

    #[tokio::test]
    async fn test_command_source_missing_program_is_unavailable() {
        let source = CommandSource::new("definitely-not-a-real-binary --flag");
        assert_eq!(source.fetch().await, None);
    }

    #[tokio::test]
    async fn test_empty_command_is_unavailable() {
        let source = CommandSource::new("");
        assert_eq!(source.fetch().await, None);
    }

    #[tokio::test]
    async fn test_fixed_source_returns_its_text() {
        let source = FixedSource::new("interface: wg0\n");
        assert_eq!(source.fetch().await.as_deref(), Some("interface: wg0\n"));
        assert_eq!(source.description(), "fixed text");
    }
}
