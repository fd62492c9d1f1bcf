pub mod sweep;

use clap::Parser;
use pingme_common::config::SweepConfig;

#[derive(Parser)]
#[command(name = "pingme")]
#[command(version, about = "Sweeps IPv4 ranges and reports which hosts answer ping.")]
#[command(after_help = "Note: only IPv4 ranges are supported. Each attempt waits about 1 second for an unreachable host.")]
pub struct CommandLine {
    /// Network ranges to sweep, e.g. 192.168.1.0/24
    #[arg(short, long, value_name = "CIDR", num_args = 1.., required = true)]
    pub networks: Vec<String>,

    /// Ping attempts per host (default 2)
    #[arg(short, long, value_name = "N")]
    pub retries: Option<u32>,

    /// Last octet to skip in every range, e.g. 1 for the gateway
    #[arg(short, long, value_name = "OCTET")]
    pub skip: Option<u8>,

    /// Number of parallel workers (default: one per host)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show per-attempt diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            retries: self.retries,
            skip: self.skip,
            workers: self.workers,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
