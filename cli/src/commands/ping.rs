use colored::*;
use tracing::error;

use netdiag_core::ping::{PingOutput, PingRunner, SystemPing};

use crate::terminal::print;

/// Runs the platform ping binary and passes its output through untouched.
pub async fn ping(host: &str, count: u32) -> anyhow::Result<()> {
    print::status(format!(
        "Pinging {} with {} packets...",
        host.bold(),
        count
    ));

    let output: PingOutput = SystemPing.run(host, count).await?;

    if output.succeeded() {
        println!("{}", output.stdout.trim_end());
    } else {
        error!("ping exited with code {}", output.exit_code);
        let stderr = output.stderr.trim_end();
        if !stderr.is_empty() {
            eprintln!("{stderr}");
        }
    }

    Ok(())
}
