pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::DashboardClient;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront CLI - manage stores, billboards and categories from the terminal")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, conflicts_with = "json", help = "Output in human-readable text format (default)")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Select and check the admin API server")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Authentication and token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Store listing, creation and first-run setup")]
    Store {
        #[command(subcommand)]
        cmd: commands::store::StoreCommands,
    },

    #[command(about = "Billboard operations within a store")]
    Billboard {
        #[command(subcommand)]
        cmd: commands::billboard::BillboardCommands,
    },

    #[command(about = "Category operations within a store")]
    Category {
        #[command(subcommand)]
        cmd: commands::category::CategoryCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json && !cli.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Client for the configured server, carrying the saved token if there is one
pub fn client_from_config() -> anyhow::Result<DashboardClient> {
    let config = config::load_cli_config()?;
    Ok(DashboardClient::new(&config.server_url, config.token)?)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Server { cmd } => commands::server::handle(cmd, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Store { cmd } => commands::store::handle(cmd, output_format).await,
        Commands::Billboard { cmd } => commands::billboard::handle(cmd, output_format).await,
        Commands::Category { cmd } => commands::category::handle(cmd, output_format).await,
    }
}
