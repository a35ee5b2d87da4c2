//! # Port Scan Orchestration
//!
//! Drives a full scan: resolve the target, expand the port spec, probe every
//! port through a bounded worker pool, and aggregate the open ports into a
//! [`ScanReport`].
//!
//! Probes are independent connect attempts; a fixed-size semaphore caps how
//! many sockets are in flight at once so a large range cannot exhaust file
//! descriptors. Outcomes are funneled back through the single collector loop
//! below, so no probe ever touches shared mutable state. The report is sorted
//! into ascending-port order at the end, which keeps output deterministic no
//! matter how the races resolve.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use netdiag_common::config::ScanConfig;
use netdiag_common::error::ScanError;
use netdiag_common::network::ports::{self, PortSet};
use netdiag_common::network::report::ScanReport;

mod probe;
pub mod resolver;

/// Callback invoked with the running count of completed probes.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Executes a full scan of `host` against the ports described by `port_spec`.
///
/// Resolution and parsing failures are terminal and happen before any socket
/// is opened. Per-port connect failures are routine "not open" outcomes and
/// never surface as errors: the call either fully succeeds (possibly with an
/// empty report) or fails with one of the two [`ScanError`] kinds.
///
/// The returned future is cancel-safe: dropping it aborts all outstanding
/// probes and closes their sockets.
pub async fn perform_scan(
    host: &str,
    port_spec: &str,
    cfg: &ScanConfig,
    on_probe_done: Option<ProgressFn>,
) -> Result<ScanReport, ScanError> {
    let target = resolver::resolve(host).await?;
    let ports: PortSet = ports::parse_port_spec(port_spec)?;
    let probed: usize = ports.len();

    debug!("probing {probed} ports on {} ({})", target.host, target.addr);

    let semaphore = Arc::new(Semaphore::new(cfg.concurrency.max(1)));
    let completed = Arc::new(AtomicUsize::new(0));
    let callback: Option<Arc<ProgressFn>> = on_probe_done.map(Arc::new);

    let mut probes: JoinSet<Option<u16>> = JoinSet::new();

    for port in ports {
        let addr = SocketAddr::new(target.addr, port);
        let timeout = cfg.timeout;
        let sem_ref = semaphore.clone();
        let count_ref = completed.clone();
        let cb_ref = callback.clone();

        probes.spawn(async move {
            // The semaphore is never closed, so acquisition cannot fail.
            let _permit = sem_ref.acquire_owned().await.ok()?;
            let open: bool = probe::handshake_probe(addr, timeout).await;

            let done = count_ref.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(cb) = cb_ref {
                cb(done);
            }

            open.then_some(port)
        });
    }

    let mut open_ports: Vec<u16> = Vec::new();
    while let Some(outcome) = probes.join_next().await {
        match outcome {
            Ok(Some(port)) => {
                debug!("port {port} completed the handshake");
                open_ports.push(port);
            }
            Ok(None) => {}
            Err(e) => error!("probe task failed: {e}"),
        }
    }

    Ok(ScanReport::new(target, probed, open_ports))
}
