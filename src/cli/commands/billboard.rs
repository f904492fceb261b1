use clap::Subcommand;
use uuid::Uuid;

use crate::cli::commands::rows::{self, RowAction};
use crate::cli::config::load_cli_config;
use crate::cli::utils::{output_record, output_records, output_success};
use crate::cli::{client_from_config, OutputFormat};
use crate::database::models::Billboard;
use crate::validation::{validate_billboard, BillboardPayload};

#[derive(Subcommand)]
pub enum BillboardCommands {
    #[command(about = "List the store's billboards, newest first")]
    List {
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Show one billboard")]
    Get {
        #[arg(help = "Billboard id")]
        id: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Create a billboard")]
    Create {
        #[arg(long, help = "Billboard label")]
        label: String,
        #[arg(long = "image-url", help = "Background image URL")]
        image_url: String,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Replace a billboard's label and image")]
    Update {
        #[arg(help = "Billboard id")]
        id: Uuid,
        #[arg(long, help = "Billboard label")]
        label: String,
        #[arg(long = "image-url", help = "Background image URL")]
        image_url: String,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(flatten)]
    Row(RowAction),
}

fn summary(billboard: &Billboard) -> String {
    format!(
        "{}  {}  {}",
        billboard.id,
        billboard.label,
        billboard.created_at.format("%B %-d, %Y")
    )
}

pub async fn handle(cmd: BillboardCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = client_from_config()?;
    let config = load_cli_config()?;

    match cmd {
        BillboardCommands::List { store } => {
            let store_id = config.resolve_store(store)?;
            let billboards = client.list_billboards(store_id).await?;
            output_records(&output_format, "billboards", &billboards, summary)
        }
        BillboardCommands::Get { id, store } => {
            let store_id = config.resolve_store(store)?;
            let billboard = client.get_billboard(store_id, id).await?;
            output_record(&output_format, billboard.as_ref())
        }
        BillboardCommands::Create { label, image_url, store } => {
            let store_id = config.resolve_store(store)?;
            let input = validate_billboard(BillboardPayload {
                label: Some(label),
                image_url: Some(image_url),
            })?;
            let billboard = client.create_billboard(store_id, &input.label, &input.image_url).await?;
            output_success(&output_format, "Billboard created.", Some(serde_json::to_value(&billboard)?))
        }
        BillboardCommands::Update { id, label, image_url, store } => {
            let store_id = config.resolve_store(store)?;
            let input = validate_billboard(BillboardPayload {
                label: Some(label),
                image_url: Some(image_url),
            })?;
            let billboard = client
                .update_billboard(store_id, id, &input.label, &input.image_url)
                .await?;
            output_success(&output_format, "Billboard updated.", Some(serde_json::to_value(&billboard)?))
        }
        BillboardCommands::Row(action) => {
            let store_id = config.resolve_store(action.store())?;
            let billboard = client.get_billboard(store_id, action.id()).await?;
            rows::run(&client, billboard, action, output_format, summary).await
        }
    }
}
