use colored::*;
use tracing::Level;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    println!("{msg}");
}

/// Marker shown in front of log lines and status messages.
pub fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

pub fn status(level: Level, msg: &str) {
    print(&format!("{} {}", level_symbol(level), msg.color(colors::TEXT_DEFAULT)));
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn tree_head(name: &str, count: usize) {
    let count_str: String = format!("({})", count.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        name.color(colors::PRIMARY).bold(),
        count_str.color(colors::SEPARATOR)
    );
    print(&output);
}

pub fn as_tree_one_level(values: Vec<ColoredString>) {
    if values.is_empty() {
        print(&format!(" {} {}", "└─".bright_black(), "none".dimmed()));
        return;
    }

    for (i, value) in values.iter().enumerate() {
        let last: bool = i + 1 == values.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        print(&format!(" {} {}", branch, value));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
