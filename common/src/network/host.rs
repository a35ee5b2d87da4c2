//! Resolved scan target.

use std::fmt;
use std::net::IpAddr;

/// Pairing of the user-supplied host string with its resolved address.
///
/// Created once per scan invocation and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub host: String,
    pub addr: IpAddr,
}

impl ResolvedHost {
    pub fn new(host: impl Into<String>, addr: IpAddr) -> Self {
        Self {
            host: host.into(),
            addr,
        }
    }

    /// True when the user passed a literal address rather than a name.
    pub fn is_literal(&self) -> bool {
        self.host.parse::<IpAddr>().is_ok()
    }
}

impl fmt::Display for ResolvedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_literal() {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{} ({})", self.host, self.addr)
        }
    }
}
