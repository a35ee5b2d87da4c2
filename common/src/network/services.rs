//! Well-known-port to service-name mapping.
//!
//! Built once on first lookup and never mutated, so every concurrent probe
//! can read it without locking.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Fallback for ports with no well-known assignment.
pub const UNKNOWN_SERVICE: &str = "unknown";

static SERVICE_TABLE: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (7, "echo"),
        (20, "ftp-data"),
        (21, "ftp"),
        (22, "ssh"),
        (23, "telnet"),
        (25, "smtp"),
        (37, "time"),
        (43, "whois"),
        (53, "domain"),
        (69, "tftp"),
        (79, "finger"),
        (80, "http"),
        (88, "kerberos"),
        (110, "pop3"),
        (111, "rpcbind"),
        (113, "ident"),
        (119, "nntp"),
        (123, "ntp"),
        (135, "msrpc"),
        (137, "netbios-ns"),
        (138, "netbios-dgm"),
        (139, "netbios-ssn"),
        (143, "imap"),
        (161, "snmp"),
        (179, "bgp"),
        (194, "irc"),
        (389, "ldap"),
        (427, "svrloc"),
        (443, "https"),
        (445, "microsoft-ds"),
        (465, "smtps"),
        (500, "isakmp"),
        (513, "rlogin"),
        (514, "syslog"),
        (515, "printer"),
        (548, "afp"),
        (554, "rtsp"),
        (587, "submission"),
        (631, "ipp"),
        (636, "ldaps"),
        (873, "rsync"),
        (902, "vmware-auth"),
        (990, "ftps"),
        (993, "imaps"),
        (995, "pop3s"),
        (1080, "socks"),
        (1433, "ms-sql-s"),
        (1521, "oracle"),
        (1723, "pptp"),
        (2049, "nfs"),
        (2375, "docker"),
        (3128, "squid-http"),
        (3306, "mysql"),
        (3389, "ms-wbt-server"),
        (5060, "sip"),
        (5432, "postgresql"),
        (5672, "amqp"),
        (5900, "vnc"),
        (6379, "redis"),
        (8000, "http-alt"),
        (8080, "http-proxy"),
        (8443, "https-alt"),
        (9090, "websm"),
        (9200, "elasticsearch"),
        (11211, "memcached"),
        (27017, "mongodb"),
    ])
});

/// Returns the well-known service name for `port`, or [`UNKNOWN_SERVICE`].
///
/// Total and non-blocking.
pub fn service_name(port: u16) -> &'static str {
    SERVICE_TABLE.get(&port).copied().unwrap_or(UNKNOWN_SERVICE)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
