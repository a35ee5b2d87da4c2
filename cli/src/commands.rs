pub mod ping;
pub mod scan;

use clap::{Parser, Subcommand};
use netdiag_common::config::DEFAULT_PORT_SPEC;

#[derive(Parser)]
#[command(name = "netdiag")]
#[command(about = "Operator-facing network diagnostics: reachability and open TCP ports.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a host answers ping
    #[command(alias = "p")]
    Ping {
        host: String,
        /// Number of packets to send
        #[arg(short, long, default_value_t = 4)]
        count: u32,
    },
    /// Discover open TCP ports on a host
    #[command(alias = "s")]
    Scan {
        host: String,
        /// Ports to probe, e.g. "1-1000" or "80,443,8080"
        #[arg(short, long, default_value = DEFAULT_PORT_SPEC)]
        ports: String,
        /// Per-port connect timeout in milliseconds
        #[arg(long, default_value_t = 100)]
        timeout_ms: u64,
        /// Maximum number of in-flight probes
        #[arg(long, default_value_t = 100)]
        concurrency: usize,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn scan_defaults_follow_config() {
        let cli = CommandLine::parse_from(["netdiag", "scan", "example.com"]);
        match cli.command {
            Commands::Scan {
                host,
                ports,
                timeout_ms,
                concurrency,
            } => {
                assert_eq!(host, "example.com");
                assert_eq!(ports, DEFAULT_PORT_SPEC);
                assert_eq!(timeout_ms, 100);
                assert_eq!(concurrency, 100);
            }
            _ => panic!("expected scan subcommand"),
        }
    }

    #[test]
    fn ping_defaults_to_four_packets() {
        let cli = CommandLine::parse_from(["netdiag", "ping", "example.com"]);
        match cli.command {
            Commands::Ping { host, count } => {
                assert_eq!(host, "example.com");
                assert_eq!(count, 4);
            }
            _ => panic!("expected ping subcommand"),
        }
    }

    #[test]
    fn subcommand_aliases_parse() {
        let cli = CommandLine::parse_from(["netdiag", "s", "10.0.0.1", "-p", "22"]);
        assert!(matches!(cli.command, Commands::Scan { .. }));

        let cli = CommandLine::parse_from(["netdiag", "p", "10.0.0.1"]);
        assert!(matches!(cli.command, Commands::Ping { .. }));
    }
}
