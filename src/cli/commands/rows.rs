use clap::Subcommand;
use uuid::Uuid;

use crate::cli::utils::{output_records, output_success, ConsoleNotifier, StdoutClipboard};
use crate::cli::OutputFormat;
use crate::client::{DashboardClient, Row, RowActions};

/// The data-table row menu, shared by billboards and categories
#[derive(Subcommand, Clone, Copy)]
pub enum RowAction {
    #[command(about = "Print the id and report it copied")]
    CopyId {
        #[arg(help = "Row id")]
        id: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Print the dashboard path of the edit form")]
    EditPath {
        #[arg(help = "Row id")]
        id: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },

    #[command(about = "Delete the row and print the refreshed table")]
    Delete {
        #[arg(help = "Row id")]
        id: Uuid,
        #[arg(long, help = "Store id (defaults to the current store)")]
        store: Option<Uuid>,
    },
}

impl RowAction {
    pub fn id(&self) -> Uuid {
        match self {
            RowAction::CopyId { id, .. } | RowAction::EditPath { id, .. } | RowAction::Delete { id, .. } => *id,
        }
    }

    pub fn store(&self) -> Option<Uuid> {
        match self {
            RowAction::CopyId { store, .. }
            | RowAction::EditPath { store, .. }
            | RowAction::Delete { store, .. } => *store,
        }
    }
}

pub async fn run<R, F>(
    client: &DashboardClient,
    row: Option<R>,
    action: RowAction,
    output_format: OutputFormat,
    summary: F,
) -> anyhow::Result<()>
where
    R: Row + serde::Serialize,
    F: Fn(&R) -> String,
{
    let Some(row) = row else {
        anyhow::bail!("{} {} not found", R::LABEL, action.id());
    };

    let notifier = ConsoleNotifier::new(output_format);
    let clipboard = StdoutClipboard;
    let actions = RowActions::new(&row, client, &notifier, &clipboard);

    match action {
        RowAction::CopyId { .. } => actions.copy_id(),
        RowAction::EditPath { .. } => {
            let path = actions.edit_path();
            output_success(&output_format, &path, Some(serde_json::json!({ "path": path })))
        }
        RowAction::Delete { .. } => match actions.delete().await {
            Some(rows) => output_records(&output_format, R::SEGMENT, &rows, summary),
            None => Err(anyhow::anyhow!("{} was not deleted", R::LABEL)),
        },
    }
}
