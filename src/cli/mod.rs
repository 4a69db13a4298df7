//! CLI module for gamecmd
//!
//! Provides commands:
//! - `console`: Interactive console host with simulated players
//! - `commands`: Print every registered command identifier

use clap::{Parser, Subcommand};

pub mod commands;
pub mod console;

/// gamecmd CLI
#[derive(Parser, Debug)]
#[command(name = "gamecmd")]
#[command(about = "Chat command dispatch for game servers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive console host
    Console {
        /// Player to act as initially (overrides console.default_player)
        #[arg(short, long)]
        player: Option<String>,
    },
    /// Print registered command names and aliases
    Commands,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Console { player }) => console::run(player).await,
        Some(Commands::Commands) => commands::run(),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
