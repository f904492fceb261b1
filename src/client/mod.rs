//! Client side of the dashboard: a typed API client plus the interactive pieces
//! (store modal, first-visit setup, per-row actions) built on top of it.

pub mod api;
pub mod modal;
pub mod notify;
pub mod row_actions;
pub mod setup;

pub use api::{ClientError, DashboardClient};
pub use modal::ModalStore;
pub use notify::{Clipboard, Notifier};
pub use row_actions::{Row, RowActions};
pub use setup::SetupFlow;
