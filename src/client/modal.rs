use std::sync::Arc;

use tokio::sync::watch;

/// Visibility of the store-creation modal.
///
/// One instance is created when the dashboard starts and handed by clone to whoever
/// needs it. Subscribers receive the latest value whenever it actually changes.
#[derive(Clone, Debug)]
pub struct ModalStore {
    state: Arc<watch::Sender<bool>>,
}

impl Default for ModalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self { state: Arc::new(state) }
    }

    pub fn is_open(&self) -> bool {
        *self.state.borrow()
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    fn set(&self, open: bool) {
        self.state.send_if_modified(|current| {
            let changed = *current != open;
            *current = open;
            changed
        });
    }
}
