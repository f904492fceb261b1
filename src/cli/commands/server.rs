use clap::Subcommand;
use serde_json::json;

use crate::cli::config::{load_cli_config, save_cli_config};
use crate::cli::utils::{output_error, output_success};
use crate::cli::{client_from_config, OutputFormat};

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Point the CLI at an admin API server")]
    Set {
        #[arg(help = "Server URL, e.g. http://localhost:3000")]
        url: String,
    },

    #[command(about = "Show the configured server")]
    Show,

    #[command(about = "Check server health status from the /health endpoint")]
    Health,
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Set { url } => {
            url::Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", url, e))?;

            let mut config = load_cli_config()?;
            config.server_url = url.clone();
            save_cli_config(&config)?;

            output_success(&output_format, &format!("Server set to {}", url), Some(json!({ "server_url": url })))
        }
        ServerCommands::Show => {
            let config = load_cli_config()?;
            match output_format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "server_url": config.server_url,
                        "authenticated": config.token.is_some(),
                        "current_store": config.current_store,
                    }))?
                ),
                OutputFormat::Text => {
                    println!("Server:        {}", config.server_url);
                    println!("Authenticated: {}", if config.token.is_some() { "yes" } else { "no" });
                    match config.current_store {
                        Some(id) => println!("Current store: {}", id),
                        None => println!("Current store: (none)"),
                    }
                }
            }
            Ok(())
        }
        ServerCommands::Health => {
            let client = client_from_config()?;
            match client.health().await {
                Ok(body) => output_success(&output_format, "Server is healthy", Some(body)),
                Err(e) => {
                    output_error(&output_format, &format!("Server is unhealthy: {}", e), Some("UNHEALTHY"))?;
                    Err(anyhow::anyhow!("health check failed"))
                }
            }
        }
    }
}
