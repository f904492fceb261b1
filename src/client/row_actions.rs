use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::database::models::{Billboard, Category};

use super::api::{ClientError, DashboardClient};
use super::notify::{Clipboard, Notifier};

/// A record that appears as a row in a store's data table
#[async_trait]
pub trait Row: Sized + Send + Sync {
    /// Singular display name, e.g. "Billboard"
    const LABEL: &'static str;
    /// Path segment under the store, e.g. "billboards"
    const SEGMENT: &'static str;

    fn id(&self) -> Uuid;
    fn store_id(&self) -> Uuid;

    async fn fetch_all(client: &DashboardClient, store_id: Uuid) -> Result<Vec<Self>, ClientError>;
    async fn remove(client: &DashboardClient, store_id: Uuid, id: Uuid) -> Result<(), ClientError>;
}

#[async_trait]
impl Row for Billboard {
    const LABEL: &'static str = "Billboard";
    const SEGMENT: &'static str = "billboards";

    fn id(&self) -> Uuid {
        self.id
    }

    fn store_id(&self) -> Uuid {
        self.store_id
    }

    async fn fetch_all(client: &DashboardClient, store_id: Uuid) -> Result<Vec<Self>, ClientError> {
        client.list_billboards(store_id).await
    }

    async fn remove(client: &DashboardClient, store_id: Uuid, id: Uuid) -> Result<(), ClientError> {
        client.delete_billboard(store_id, id).await.map(|_| ())
    }
}

#[async_trait]
impl Row for Category {
    const LABEL: &'static str = "Category";
    const SEGMENT: &'static str = "categories";

    fn id(&self) -> Uuid {
        self.id
    }

    fn store_id(&self) -> Uuid {
        self.store_id
    }

    async fn fetch_all(client: &DashboardClient, store_id: Uuid) -> Result<Vec<Self>, ClientError> {
        client.list_categories(store_id).await
    }

    async fn remove(client: &DashboardClient, store_id: Uuid, id: Uuid) -> Result<(), ClientError> {
        client.delete_category(store_id, id).await.map(|_| ())
    }
}

/// The per-row dropdown: copy id, edit, delete. Bound to exactly one record.
pub struct RowActions<'a, R: Row> {
    row: &'a R,
    client: &'a DashboardClient,
    notifier: &'a dyn Notifier,
    clipboard: &'a dyn Clipboard,
}

impl<'a, R: Row> RowActions<'a, R> {
    pub fn new(
        row: &'a R,
        client: &'a DashboardClient,
        notifier: &'a dyn Notifier,
        clipboard: &'a dyn Clipboard,
    ) -> Self {
        Self {
            row,
            client,
            notifier,
            clipboard,
        }
    }

    pub fn copy_id(&self) -> anyhow::Result<()> {
        self.clipboard.write_text(&self.row.id().to_string())?;
        self.notifier
            .success(&format!("{} Id copied to clipboard.", R::LABEL));
        Ok(())
    }

    /// Dashboard location of the edit form for this row
    pub fn edit_path(&self) -> String {
        format!("/{}/{}/{}", self.row.store_id(), R::SEGMENT, self.row.id())
    }

    /// Delete the row, then reload the table.
    ///
    /// Returns the refreshed rows on success and `None` when the delete failed; either
    /// way the user has already been notified. A failed reload yields an empty table.
    pub async fn delete(&self) -> Option<Vec<R>> {
        let store_id = self.row.store_id();

        if let Err(e) = R::remove(self.client, store_id, self.row.id()).await {
            tracing::warn!("{} delete failed: {}", R::LABEL, e);
            // A conflict carries the reason (still referenced) in its body
            match &e {
                ClientError::Api { status, message } if *status == StatusCode::CONFLICT => {
                    self.notifier.error(message)
                }
                _ => self.notifier.error("Something went wrong."),
            }
            return None;
        }

        let rows = R::fetch_all(self.client, store_id).await.unwrap_or_else(|e| {
            tracing::warn!("{} list refresh failed: {}", R::LABEL, e);
            Vec::new()
        });

        self.notifier.success(&format!("{} deleted.", R::LABEL));
        Some(rows)
    }
}
