//! # Netdiag Core
//!
//! The diagnostic operations themselves: host resolution, TCP connect
//! probing with bounded concurrency, and the system `ping` collaborator.
//! Rendering and argument handling live in `netdiag-cli`; the shared models
//! live in `netdiag-common`.

pub mod ping;
pub mod scanner;
