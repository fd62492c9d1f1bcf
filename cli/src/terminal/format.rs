use colored::*;
use pingme_common::report::SweepReport;

use crate::terminal::colors;

/// One report section per key, in report order, with colored addresses.
pub fn report_to_sections(report: &SweepReport) -> Vec<(&'static str, Vec<ColoredString>)> {
    report
        .sections()
        .into_iter()
        .map(|(key, hosts)| {
            let color: Color = section_color(key);
            let values: Vec<ColoredString> = hosts.iter().map(|host| host.color(color)).collect();
            (key, values)
        })
        .collect()
}

fn section_color(key: &str) -> Color {
    match key {
        "up" => colors::HOST_UP,
        "down" => colors::HOST_DOWN,
        "skipped" => colors::HOST_SKIPPED,
        _ => colors::TEXT_DEFAULT,
    }
}
