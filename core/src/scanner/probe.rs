//! Single-port TCP connect probe.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempts the three-way handshake against `addr` within `probe_timeout`.
///
/// Only a completed connect classifies the port as open. A refusal, a
/// timeout, or any other connect error all mean "not open"; closed and
/// filtered are deliberately not distinguished. The stream is dropped
/// immediately, so the socket lives no longer than the probe.
pub async fn handshake_probe(addr: SocketAddr, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_refused)) => false,
        Err(_elapsed) => false,
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
    use std::net::{IpAddr, Ipv4Addr};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn probe_finds_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(handshake_probe(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    async fn probe_reports_refused_port_as_not_open() {
        // Bind then drop so the port is known to be closed right now.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(!handshake_probe(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    #[ignore]
    async fn probe_times_out_on_unreachable_address() {
        // TEST-NET-3, guaranteed not to answer.
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 1)), 443);
        assert!(!handshake_probe(addr, Duration::from_millis(100)).await);
    }
}
