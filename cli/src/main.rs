mod commands;
mod terminal;

use commands::{CommandLine, session};
use kasir_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        assume_yes: commands.yes,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    print::header("new transaction", cfg.quiet);
    session::run(&cfg)
}
