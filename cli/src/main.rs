mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, ping, scan};
use netdiag_common::config::ScanConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Ping { host, count } => {
            print::header("checking reachability");
            ping::ping(&host, count).await
        }
        Commands::Scan {
            host,
            ports,
            timeout_ms,
            concurrency,
        } => {
            print::header("starting scanner");
            let cfg = ScanConfig {
                timeout: Duration::from_millis(timeout_ms),
                concurrency,
            };
            scan::scan(&host, &ports, &cfg).await
        }
    }
}
