use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while probes are in flight.
///
/// The scan's progress callback updates the message; the bar is cloned into
/// the callback and finished by the command once the scan resolves.
pub fn start_scan_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .expect("static template is valid")
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Sending probes...");
    pb
}
