//! # Scan Report Model
//!
//! The aggregate outcome of one scan: which ports completed a TCP handshake,
//! annotated with their well-known service names. Ports that timed out or
//! refused the connection are simply absent; the report does not distinguish
//! closed from filtered.

use crate::network::host::ResolvedHost;
use crate::network::services;

/// One discovered open port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPort {
    pub port: u16,
    pub service: &'static str,
}

impl OpenPort {
    /// Annotates `port` with its service name from the shared table.
    pub fn discovered(port: u16) -> Self {
        Self {
            port,
            service: services::service_name(port),
        }
    }
}

/// Everything the scan learned about one target.
///
/// `open` is strictly ascending by port number regardless of the order in
/// which concurrent probes completed.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub target: ResolvedHost,
    pub probed: usize,
    pub open: Vec<OpenPort>,
}

impl ScanReport {
    pub fn new(target: ResolvedHost, probed: usize, mut open_ports: Vec<u16>) -> Self {
        open_ports.sort_unstable();
        let open = open_ports.into_iter().map(OpenPort::discovered).collect();
        Self {
            target,
            probed,
            open,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
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
