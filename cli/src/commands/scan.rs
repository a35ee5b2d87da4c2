use std::time::{Duration, Instant};

use colored::*;
use tracing::error;

use netdiag_common::config::ScanConfig;
use netdiag_common::error::ScanError;
use netdiag_common::network::report::ScanReport;
use netdiag_core::scanner::{self, ProgressFn};

use crate::terminal::{print, spinner};

pub async fn scan(host: &str, port_spec: &str, cfg: &ScanConfig) -> anyhow::Result<()> {
    print::status(format!("Resolving {}...", host.bold()));

    let pb = spinner::start_scan_spinner();
    let pb_ref = pb.clone();
    let progress: ProgressFn = Box::new(move |done| {
        pb_ref.set_message(format!("Probed {} ports so far...", done.to_string().bold()));
    });

    let start_time: Instant = Instant::now();

    let outcome = tokio::select! {
        res = scanner::perform_scan(host, port_spec, cfg, Some(progress)) => res,
        _ = tokio::signal::ctrl_c() => {
            pb.finish_and_clear();
            anyhow::bail!("scan interrupted, partial results discarded");
        }
    };
    pb.finish_and_clear();

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            match &e {
                ScanError::HostResolution { host } => {
                    error!("could not resolve host {host}, nothing was probed")
                }
                ScanError::InvalidPortSpec { .. } => {
                    error!("port spec was rejected, nothing was probed")
                }
            }
            return Err(e.into());
        }
    };

    scan_ends(&report, start_time.elapsed());
    Ok(())
}

fn scan_ends(report: &ScanReport, total_time: Duration) {
    print::status(format!(
        "{} resolved to {}",
        report.target.host.bold(),
        report.target.addr.to_string().bold()
    ));
    print::status(format!("Probed {} ports", report.probed));

    if report.is_empty() {
        no_open_ports(report);
        return;
    }

    print::header("open ports");
    for open in &report.open {
        print::port_line(open.port, open.service);
    }
    print_summary(report.open.len(), total_time);
}

fn no_open_ports(report: &ScanReport) {
    print::header("zero open ports");
    print::status(format!("No open ports found on {}", report.target));
}

fn print_summary(open_count: usize, total_time: Duration) {
    let open: ColoredString = format!("{open_count} open ports").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Scan Complete: {open} identified in {elapsed}"));
}
