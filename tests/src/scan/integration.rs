#![cfg(test)]
use netdiag_common::config::ScanConfig;
use netdiag_common::error::ScanError;
use netdiag_common::network::report::ScanReport;
use netdiag_core::scanner;
use tokio::net::TcpListener;

async fn loopback_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binding an ephemeral loopback port");
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// Scanning a loopback listener must report exactly that port as open,
/// annotated from the service table ("unknown" for an ephemeral port).
#[tokio::test]
async fn scan_finds_loopback_listener() {
    let (_listener, port) = loopback_listener().await;
    let cfg = ScanConfig::default();

    let report: ScanReport = scanner::perform_scan("127.0.0.1", &port.to_string(), &cfg, None)
        .await
        .expect("scan should succeed");

    assert_eq!(report.probed, 1);
    assert_eq!(report.open.len(), 1);
    assert_eq!(report.open[0].port, port);
    assert_eq!(report.open[0].service, "unknown");
}

/// A resolvable host with nothing listening in the probed range yields an
/// empty report and no error.
#[tokio::test]
async fn scan_with_no_listeners_is_empty_not_an_error() {
    // Bind then drop so the port is known to be closed right now.
    let (listener, port) = loopback_listener().await;
    drop(listener);

    let cfg = ScanConfig::default();
    let report = scanner::perform_scan("127.0.0.1", &port.to_string(), &cfg, None)
        .await
        .expect("per-port refusals must not fail the scan");

    assert!(report.is_empty());
    assert_eq!(report.probed, 1);
}

/// An unresolvable name aborts the whole scan with the resolution error kind.
#[tokio::test]
async fn unresolvable_host_aborts_with_resolution_error() {
    let cfg = ScanConfig::default();
    let err = scanner::perform_scan("no-such-host.invalid", "1-10", &cfg, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::HostResolution { .. }));
}

/// A malformed spec aborts before any probing with the spec error kind.
#[tokio::test]
async fn malformed_spec_aborts_with_spec_error() {
    let cfg = ScanConfig::default();
    let err = scanner::perform_scan("127.0.0.1", "80,abc", &cfg, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ScanError::InvalidPortSpec { .. }));
}

/// Open ports come back in ascending order no matter how the spec ordered
/// them or how the concurrent probes completed.
#[tokio::test]
async fn report_is_ascending_regardless_of_spec_order() {
    let (_a, port_a) = loopback_listener().await;
    let (_b, port_b) = loopback_listener().await;

    let (low, high) = if port_a < port_b {
        (port_a, port_b)
    } else {
        (port_b, port_a)
    };

    // Deliberately list the higher port first.
    let spec = format!("{high},{low}");
    let cfg = ScanConfig::default();

    let report = scanner::perform_scan("127.0.0.1", &spec, &cfg, None)
        .await
        .unwrap();

    let ports: Vec<u16> = report.open.iter().map(|p| p.port).collect();
    assert_eq!(ports, vec![low, high]);
}

/// Back-to-back scans of a stable target agree on the open port set.
#[tokio::test]
async fn repeated_scans_are_idempotent() {
    let (_listener, port) = loopback_listener().await;
    let spec = port.to_string();
    let cfg = ScanConfig::default();

    let first = scanner::perform_scan("127.0.0.1", &spec, &cfg, None)
        .await
        .unwrap();
    let second = scanner::perform_scan("127.0.0.1", &spec, &cfg, None)
        .await
        .unwrap();

    let first_ports: Vec<u16> = first.open.iter().map(|p| p.port).collect();
    let second_ports: Vec<u16> = second.open.iter().map(|p| p.port).collect();
    assert_eq!(first_ports, second_ports);
}

/// The progress callback sees every probe exactly once.
#[tokio::test]
async fn progress_callback_counts_every_probe() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let (_listener, port) = loopback_listener().await;
    let spec = format!("{port},{}", port.saturating_sub(1).max(1));

    let calls = Arc::new(AtomicUsize::new(0));
    let calls_ref = calls.clone();
    let progress: scanner::ProgressFn = Box::new(move |_done| {
        calls_ref.fetch_add(1, Ordering::Relaxed);
    });

    let cfg = ScanConfig::default();
    let report = scanner::perform_scan("127.0.0.1", &spec, &cfg, Some(progress))
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), report.probed);
}
