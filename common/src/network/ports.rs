//! # Port Specification Model
//!
//! Parses the user-supplied port spec into a concrete set of ports.
//!
//! A spec is a comma-separated list of segments, each either:
//! * A single port (e.g., `"80"`).
//! * An inclusive range `start-end` with `start <= end` (e.g., `"1-1000"`).
//!
//! Segments may mix freely: `"1-10,80,443-445"`. Expansion preserves the
//! order segments appear in; a port named twice is probed once.

use std::collections::HashSet;

use tracing::trace;

use crate::error::ScanError;

/// An inclusive range of TCP ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

impl PortRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn to_iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

/// Ordered, deduplicated set of ports to probe.
///
/// Owned by a single scan invocation and discarded with it.
#[derive(Debug, Clone, Default)]
pub struct PortSet {
    ports: Vec<u16>,
    seen: HashSet<u16>,
}

impl PortSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a port unless it is already present.
    pub fn add_single(&mut self, port: u16) {
        if self.seen.insert(port) {
            self.ports.push(port);
        }
    }

    /// Appends every port of `range` in ascending order, skipping duplicates.
    pub fn add_range(&mut self, range: PortRange) {
        for port in range.to_iter() {
            self.add_single(port);
        }
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }
}

impl IntoIterator for PortSet {
    type Item = u16;
    type IntoIter = std::vec::IntoIter<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.ports.into_iter()
    }
}

/// Parses a port spec into a [`PortSet`].
///
/// Malformed input is rejected, never silently skipped: any bad segment
/// fails the whole spec with [`ScanError::InvalidPortSpec`] before a single
/// probe is sent.
pub fn parse_port_spec(spec: &str) -> Result<PortSet, ScanError> {
    if spec.trim().is_empty() {
        return Err(ScanError::bad_spec(spec, "spec is empty"));
    }

    let mut set = PortSet::new();

    for segment in spec.split(',') {
        let segment = segment.trim();
        match segment.split_once('-') {
            Some((start_str, end_str)) => {
                let start = parse_port(start_str, segment)?;
                let end = parse_port(end_str, segment)?;
                if start > end {
                    return Err(ScanError::bad_spec(segment, "range start exceeds end"));
                }
                set.add_range(PortRange::new(start, end));
            }
            None => {
                let port = parse_port(segment, segment)?;
                set.add_single(port);
            }
        }
    }

    trace!("expanded spec '{spec}' into {} distinct ports", set.len());
    Ok(set)
}

/// Parses one endpoint, bounds-checked to [1, 65535].
fn parse_port(s: &str, segment: &str) -> Result<u16, ScanError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ScanError::bad_spec(segment, "segment is empty"));
    }

    let value: u32 = s
        .parse()
        .map_err(|_| ScanError::bad_spec(segment, format!("'{s}' is not a number")))?;

    if !(1..=u32::from(u16::MAX)).contains(&value) {
        return Err(ScanError::bad_spec(
            segment,
            format!("port {value} is outside 1-65535"),
        ));
    }

    Ok(value as u16)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
