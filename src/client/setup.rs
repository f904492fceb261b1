use crate::database::models::Store;
use crate::validation::{validate_store, StorePayload};

use super::api::{ClientError, DashboardClient};
use super::modal::ModalStore;
use super::notify::Notifier;

/// First-visit flow: a user without a store is pushed into the store-creation modal.
pub struct SetupFlow<'a> {
    client: &'a DashboardClient,
    modal: ModalStore,
    notifier: &'a dyn Notifier,
}

impl<'a> SetupFlow<'a> {
    pub fn new(client: &'a DashboardClient, modal: ModalStore, notifier: &'a dyn Notifier) -> Self {
        Self { client, modal, notifier }
    }

    pub fn modal(&self) -> &ModalStore {
        &self.modal
    }

    /// Landing check. Returns the user's first store, or opens the modal when there is
    /// none and it is not already showing.
    pub async fn on_mount(&self) -> Result<Option<Store>, ClientError> {
        let stores = self.client.list_stores().await?;

        if let Some(store) = stores.into_iter().next() {
            return Ok(Some(store));
        }

        if !self.modal.is_open() {
            self.modal.open();
        }
        Ok(None)
    }

    /// Modal form submit. The modal closes only when the store was created.
    pub async fn submit(&self, name: &str) -> Result<Store, ClientError> {
        let input = validate_store(StorePayload {
            name: Some(name.to_string()),
        })?;

        match self.client.create_store(&input.name).await {
            Ok(store) => {
                self.modal.close();
                self.notifier.success(&format!("Store \"{}\" created.", store.name));
                Ok(store)
            }
            Err(e) => {
                tracing::warn!("store creation failed: {}", e);
                self.notifier.error("Something went wrong");
                Err(e)
            }
        }
    }

    pub fn cancel(&self) {
        self.modal.close();
    }
}
