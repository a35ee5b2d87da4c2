//! # Ping Pass-Through
//!
//! Reachability probing is delegated wholesale to the platform `ping`
//! binary; this module only constructs the command, captures its output,
//! and hands it back untouched. The [`PingRunner`] trait keeps process
//! execution behind a seam so callers (and tests) can substitute it.

use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Captured output of one ping run.
#[derive(Debug, Clone)]
pub struct PingOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl PingOutput {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Process-execution collaborator for the ping operation.
#[async_trait]
pub trait PingRunner {
    /// Pings `host` with `count` packets and returns the captured output.
    ///
    /// Fails only when the binary cannot be launched; an unreachable host is
    /// reported through the exit code and stderr, not as an error.
    async fn run(&self, host: &str, count: u32) -> anyhow::Result<PingOutput>;
}

/// Runs the operating system's ping binary.
pub struct SystemPing;

impl SystemPing {
    /// Flag spelling differs per platform family: `-n` counts packets on
    /// Windows, `-c` everywhere else.
    fn command(host: &str, count: u32) -> Command {
        let mut cmd = Command::new("ping");
        let count_flag: &str = if cfg!(windows) { "-n" } else { "-c" };
        cmd.arg(count_flag).arg(count.to_string()).arg(host);
        cmd
    }
}

#[async_trait]
impl PingRunner for SystemPing {
    async fn run(&self, host: &str, count: u32) -> anyhow::Result<PingOutput> {
        debug!("pinging {host} with {count} packets");

        let output = Self::command(host, count)
            .output()
            .await
            .context("failed to launch the system ping binary")?;

        Ok(PingOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
