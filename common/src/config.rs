use std::time::Duration;

/// Port specification probed when the user does not supply one.
pub const DEFAULT_PORT_SPEC: &str = "1-1000";

/// Tunables for a single scan invocation.
///
/// Threaded by reference through the scan pipeline; never mutated mid-scan.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Upper bound on a single TCP connect attempt.
    ///
    /// The default is aggressive and may produce false negatives on
    /// high-latency links. It is a tunable, not a contract.
    pub timeout: Duration,
    /// Maximum number of in-flight probes.
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(100),
            concurrency: 100,
        }
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
