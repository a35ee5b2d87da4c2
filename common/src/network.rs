pub mod host;
pub mod ports;
pub mod report;
pub mod services;
