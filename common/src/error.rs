//! # Scan Error Taxonomy
//!
//! A scan either fully succeeds or fails with exactly one of these kinds.
//! Per-port connect failures are routine "not open" outcomes and are *not*
//! represented here; they never abort a scan.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The target name could not be resolved to an address.
    ///
    /// Terminal before any probing starts. Deliberately distinct from a
    /// connection failure against an already-resolved address so callers can
    /// abort with a resolution message instead of reporting closed ports.
    #[error("could not resolve host '{host}'")]
    HostResolution { host: String },

    /// The port specification could not be parsed.
    ///
    /// Carries the offending segment so the user sees exactly what to fix.
    #[error("invalid port spec '{segment}': {reason}")]
    InvalidPortSpec { segment: String, reason: String },
}

impl ScanError {
    pub fn unresolvable(host: impl Into<String>) -> Self {
        Self::HostResolution { host: host.into() }
    }

    pub fn bad_spec(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPortSpec {
            segment: segment.into(),
            reason: reason.into(),
        }
    }
}
