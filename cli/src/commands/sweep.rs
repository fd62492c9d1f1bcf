use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::{Level, info_span};

use pingme_common::config::SweepConfig;
use pingme_common::report::SweepReport;
use pingme_core::SystemPing;
use pingme_core::sweep as engine;

use crate::commands::CommandLine;
use crate::terminal::{colors, format, print, spinner};

pub fn sweep(cmd: &CommandLine) -> anyhow::Result<()> {
    let cfg: SweepConfig = cmd.sweep_config();

    let plan = engine::plan(&cmd.networks, cfg.skip).context("invalid network range")?;
    let total: usize = plan.hosts.len();

    let span = info_span!("sweep", hosts = total);
    let guard = span.enter();

    if !cmd.json {
        print::status(Level::INFO, "Running...");
        spinner::start(total);
    }

    let start_time: Instant = Instant::now();
    let on_verdict = move |done: usize| spinner::report_progress(done, total);
    let report: SweepReport = engine::execute(&SystemPing, plan, &cfg, Some(&on_verdict));

    spinner::finish();
    drop(guard);

    if cmd.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        print::print(&json);
        return Ok(());
    }

    sweep_ends(&report, start_time.elapsed());
    Ok(())
}

fn sweep_ends(report: &SweepReport, total_time: Duration) {
    print::header("sweep results");
    print_report(report);
    print_summary(report, total_time);
    print::status(Level::INFO, "Finished!");
}

fn print_report(report: &SweepReport) {
    for (key, values) in format::report_to_sections(report) {
        print::tree_head(key, values.len());
        print::as_tree_one_level(values);
    }
}

fn print_summary(report: &SweepReport, total_time: Duration) {
    let up: ColoredString = format!("{} up", report.up.len()).bold().color(colors::HOST_UP);
    let down: ColoredString = format!("{} down", report.down.len()).bold().color(colors::HOST_DOWN);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let probed: ColoredString = report.probed().to_string().bold();
    let output: String = format!("Sweep Complete: {probed} probed, {up}, {down} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
    print::fat_separator();
}
