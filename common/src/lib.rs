//! Shared building blocks for the netdiag workspace.
//!
//! Everything in here is IO-free: configuration, the error taxonomy, and the
//! network models (port sets, service names, resolved hosts, scan reports)
//! that `netdiag-core` operates on and `netdiag-cli` renders.

pub mod config;
pub mod error;
pub mod network;
