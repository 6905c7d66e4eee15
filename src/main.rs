use clap::Parser;

mod cli;
mod files;
mod logger;

use cli::{Cli, SubCommand, SOFTWARE_NAME, SOFTWARE_VERSION};
use logger::configure_logger;

fn main() {
    let opts: Cli = Cli::parse();
    configure_logger(opts.log_level);
    log::info!("{} v{}", SOFTWARE_NAME, SOFTWARE_VERSION);

    match opts.subcmd {
        SubCommand::Generate(cmd) => cmd.execute().unwrap(),
        SubCommand::Inspect(cmd) => cmd.execute().unwrap(),
    };
}
