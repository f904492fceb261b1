use std::sync::Arc;

use crate::auth::TokenKeys;
use crate::database::Datastore;

/// Shared handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub datastore: Arc<dyn Datastore>,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(datastore: Arc<dyn Datastore>, tokens: TokenKeys) -> Self {
        Self { datastore, tokens }
    }
}
