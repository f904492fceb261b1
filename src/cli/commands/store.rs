use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::cli::config::{load_cli_config, save_cli_config};
use crate::cli::utils::{output_record, output_records, output_success, prompt_line, ConsoleNotifier};
use crate::cli::{client_from_config, OutputFormat};
use crate::client::{ModalStore, SetupFlow};
use crate::validation::{validate_store, StorePayload};

#[derive(Subcommand)]
pub enum StoreCommands {
    #[command(about = "List your stores")]
    List,

    #[command(about = "Show one store")]
    Get {
        #[arg(help = "Store id")]
        id: Uuid,
    },

    #[command(about = "Create a store")]
    Create {
        #[arg(help = "Store name")]
        name: String,
    },

    #[command(about = "Remember a store for billboard and category commands")]
    Use {
        #[arg(help = "Store id")]
        id: Uuid,
    },

    #[command(about = "First-run setup: select your first store or create one")]
    Setup {
        #[arg(long, help = "Name for the new store (prompted when omitted)")]
        name: Option<String>,
    },
}

pub async fn handle(cmd: StoreCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = client_from_config()?;

    match cmd {
        StoreCommands::List => {
            let stores = client.list_stores().await?;
            output_records(&output_format, "stores", &stores, |s| format!("{}  {}", s.id, s.name))
        }
        StoreCommands::Get { id } => {
            let store = client.get_store(id).await?;
            output_record(&output_format, Some(&store))
        }
        StoreCommands::Create { name } => {
            let input = validate_store(StorePayload { name: Some(name) })?;
            let store = client.create_store(&input.name).await?;
            output_success(
                &output_format,
                &format!("Store \"{}\" created.", store.name),
                Some(serde_json::to_value(&store)?),
            )
        }
        StoreCommands::Use { id } => {
            // Ownership is checked by the server; fail here rather than on the next command
            let store = client.get_store(id).await?;

            let mut config = load_cli_config()?;
            config.current_store = Some(store.id);
            save_cli_config(&config)?;

            output_success(
                &output_format,
                &format!("Using store \"{}\"", store.name),
                Some(json!({ "current_store": store.id })),
            )
        }
        StoreCommands::Setup { name } => {
            let notifier = ConsoleNotifier::new(output_format);
            let flow = SetupFlow::new(&client, ModalStore::new(), &notifier);

            let store = match flow.on_mount().await? {
                Some(store) => store,
                None => {
                    let name = match name {
                        Some(name) => name,
                        None => prompt_line("Store name: ")?,
                    };
                    if name.trim().is_empty() {
                        flow.cancel();
                        anyhow::bail!("Store setup cancelled");
                    }
                    flow.submit(&name).await?
                }
            };

            let mut config = load_cli_config()?;
            config.current_store = Some(store.id);
            save_cli_config(&config)?;

            output_success(
                &output_format,
                &format!("Current store is \"{}\" ({})", store.name, store.id),
                Some(json!({ "current_store": store.id })),
            )
        }
    }
}
