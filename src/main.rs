use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;

use mailroom::cli::{Cli, Commands, ConfigCommands, SendCommands};
use mailroom::{Item, Parcel};

mod commands;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Send { item } => {
            let config = commands::load_config(config_path)?;
            commands::send::handle_send(&config, build_item(item), cli.json)
        }
        Commands::Run { file } => {
            let config = commands::load_config(config_path)?;
            commands::send::handle_run(&config, &file, cli.json)
        }
        Commands::Checksum { file } => commands::streams::handle_checksum(file.as_deref(), cli.json),
        Commands::Normalize { file } => commands::streams::handle_normalize(file.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}

fn build_item(cmd: SendCommands) -> Item {
    match cmd {
        SendCommands::Message { address, text } => Item::message(address.from, address.to, text),
        SendCommands::Package {
            address,
            description,
            value,
        } => {
            let content = match (description, value) {
                (None, None) => None,
                (Some(description), value) => Some(Parcel::new(description, value.unwrap_or(0))),
                (None, Some(value)) => Some(Parcel::undescribed(value)),
            };
            Item::package(address.from, address.to, content)
        }
    }
}
