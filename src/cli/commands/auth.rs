use clap::Subcommand;
use serde_json::json;

use crate::auth::TokenKeys;
use crate::cli::config::{load_cli_config, save_cli_config};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Mint a bearer token for a user id with the local JWT secret")]
    Mint {
        #[arg(help = "User id to place in the token subject")]
        user_id: String,

        #[arg(long, help = "Save the token as the active credential")]
        save: bool,
    },

    #[command(about = "Use an existing bearer token")]
    Login {
        #[arg(help = "Bearer token")]
        token: String,
    },

    #[command(about = "Forget the saved token")]
    Logout,

    #[command(about = "Show whether a token is saved")]
    Status,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Mint { user_id, save } => {
            let keys = TokenKeys::from_config(&crate::config::config().security)?;
            let token = keys.generate(&user_id)?;

            if save {
                let mut config = load_cli_config()?;
                config.token = Some(token.clone());
                save_cli_config(&config)?;
            }

            match output_format {
                OutputFormat::Json => output_success(
                    &output_format,
                    "Token minted",
                    Some(json!({ "user_id": user_id, "token": token, "saved": save })),
                ),
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
        AuthCommands::Login { token } => {
            let mut config = load_cli_config()?;
            config.token = Some(token);
            save_cli_config(&config)?;
            output_success(&output_format, "Token saved", None)
        }
        AuthCommands::Logout => {
            let mut config = load_cli_config()?;
            config.token = None;
            config.current_store = None;
            save_cli_config(&config)?;
            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let config = load_cli_config()?;
            let message = if config.token.is_some() {
                "Token saved"
            } else {
                "Not logged in"
            };
            output_success(
                &output_format,
                message,
                Some(json!({ "authenticated": config.token.is_some() })),
            )
        }
    }
}
