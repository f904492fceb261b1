use clap::Subcommand;
use uuid::Uuid;

use crate::cli::commands::rows::{self, RowAction};
use crate::cli::config::load_cli_config;
use crate::cli::utils::{output_record, output_records, output_success};
use crate::cli::{client_from_config, OutputFormat};
use crate::database::models::Category;
use crate::validation::{validate_category, CategoryPayload};

#[derive(Subcommand)]
pub enum CategoryCommands {
    #[command(about = "List the store's categories, newest first")]
    List {
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Show one category")]
    Get {
        #[arg(help = "Category id")]
        id: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Create a category linked to a billboard")]
    Create {
        #[arg(long, help = "Category name")]
        name: String,
        #[arg(long, help = "Billboard id shown on the category page")]
        billboard: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Replace a category's name and billboard")]
    Update {
        #[arg(help = "Category id")]
        id: Uuid,
        #[arg(long, help = "Category name")]
        name: String,
        #[arg(long, help = "Billboard id shown on the category page")]
        billboard: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(flatten)]
    Row(RowAction),
}

fn summary(category: &Category) -> String {
    format!(
        "{}  {}  billboard={}  {}",
        category.id,
        category.name,
        category.billboard_id,
        category.created_at.format("%B %-d, %Y")
    )
}

fn validated_name(name: String, billboard: Uuid) -> anyhow::Result<String> {
    let input = validate_category(CategoryPayload {
        name: Some(name),
        billboard_id: Some(billboard.to_string()),
    })?;
    Ok(input.name)
}

pub async fn handle(cmd: CategoryCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = client_from_config()?;
    let config = load_cli_config()?;

    match cmd {
        CategoryCommands::List { store } => {
            let store_id = config.resolve_store(store)?;
            let categories = client.list_categories(store_id).await?;
            output_records(&output_format, "categories", &categories, summary)
        }
        CategoryCommands::Get { id, store } => {
            let store_id = config.resolve_store(store)?;
            let category = client.get_category(store_id, id).await?;
            output_record(&output_format, category.as_ref())
        }
        CategoryCommands::Create { name, billboard, store } => {
            let store_id = config.resolve_store(store)?;
            let name = validated_name(name, billboard)?;
            let category = client.create_category(store_id, &name, billboard).await?;
            output_success(&output_format, "Category created.", Some(serde_json::to_value(&category)?))
        }
        CategoryCommands::Update { id, name, billboard, store } => {
            let store_id = config.resolve_store(store)?;
            let name = validated_name(name, billboard)?;
            let category = client.update_category(store_id, id, &name, billboard).await?;
            output_success(&output_format, "Category updated.", Some(serde_json::to_value(&category)?))
        }
        CategoryCommands::Row(action) => {
            let store_id = config.resolve_store(action.store())?;
            let category = client.get_category(store_id, action.id()).await?;
            rows::run(&client, category, action, output_format, summary).await
        }
    }
}
