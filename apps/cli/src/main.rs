use clap::Parser;
use fcmkit_cli::{Cli, Command, commands};
use fcmkit_logger::{LevelFilter, Logger};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(cli.log_json).init()?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Build { source, pretty } => commands::build(source, pretty, &mut out)?,
        Command::Check { source } => commands::check(source, &mut out)?,
        Command::Settings {} => commands::settings(&mut out)?,
    }

    Ok(())
}
