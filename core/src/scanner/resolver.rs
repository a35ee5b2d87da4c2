//! Host name resolution.
//!
//! Translates the user-supplied host string (DNS name or literal address)
//! into a connectable [`ResolvedHost`]. Failure here is its own error kind,
//! kept separate from connect failures: an unresolvable name aborts the scan
//! before a single probe is sent.

use std::net::SocketAddr;

use tokio::net;
use tracing::debug;

use netdiag_common::error::ScanError;
use netdiag_common::network::host::ResolvedHost;

/// Resolves `host` to an address, preferring IPv4 when both families answer.
///
/// Literal addresses parse without touching DNS. A name that resolves to no
/// addresses at all is treated the same as a lookup failure.
pub async fn resolve(host: &str) -> Result<ResolvedHost, ScanError> {
    let addrs: Vec<SocketAddr> = net::lookup_host((host, 0u16))
        .await
        .map_err(|e| {
            debug!("lookup for '{host}' failed: {e}");
            ScanError::unresolvable(host)
        })?
        .collect();

    let addr = addrs
        .iter()
        .find(|sock| sock.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
        .ok_or_else(|| ScanError::unresolvable(host))?;

    Ok(ResolvedHost::new(host, addr))
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

    #[tokio::test]
    async fn literal_ipv4_resolves_to_itself() {
        let resolved = resolve("127.0.0.1").await.unwrap();
        assert_eq!(resolved.addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(resolved.host, "127.0.0.1");
        assert!(resolved.is_literal());
    }

    #[tokio::test]
    async fn literal_ipv6_resolves_to_itself() {
        let resolved = resolve("::1").await.unwrap();
        assert_eq!(resolved.addr, "::1".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn unresolvable_name_is_a_resolution_error() {
        // .invalid is reserved and can never resolve (RFC 2606).
        let err = resolve("no-such-host.invalid").await.unwrap_err();
        assert_eq!(
            err,
            ScanError::HostResolution {
                host: "no-such-host.invalid".to_string()
            }
        );
    }
}
