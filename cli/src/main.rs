mod commands;
mod terminal;

use commands::CommandLine;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    commands::sweep::sweep(&commands)
}
