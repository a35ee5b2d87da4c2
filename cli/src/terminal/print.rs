//! User-facing report rendering.
//!
//! These helpers format the scan narration, not the tracing log stream; the
//! two share the terminal but nothing else.

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// Centered `⟦ MSG ⟧` section header.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

/// `> message` status line.
pub fn status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    println!("{} {}", prefix, msg.as_ref());
}

/// One open-port row: `├─ 443 ......: https`.
pub fn port_line(port: u16, service: &str) {
    let branch: ColoredString = "├─".bright_black();
    let port_str: String = port.to_string();
    let dots: ColoredString = "."
        .repeat(8usize.saturating_sub(port_str.len()))
        .bright_black();
    println!(
        " {} {}{}{} {}",
        branch,
        port_str.cyan(),
        dots,
        ":".bright_black(),
        service.green()
    );
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    println!("{sep}");
}

pub fn centerln(msg: &str) {
    let width = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{space}{msg}");
}
