mod cli;
mod command;
mod config;
mod error;
mod i18n;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(command_line.log_level())
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load().context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Serve => Box::new(command::ServeCommand::new(cfg)),
            cli::Commands::Roi(args) => Box::new(command::RoiCommand::new(cfg, args)),
            cli::Commands::Search { query, output } => {
                Box::new(command::SearchCommand::new(cfg, query, output.lang, output.json))
            }
            cli::Commands::Corpus { lang } => {
                Box::new(command::CorpusCommand::new(cfg, lang))
            }
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
