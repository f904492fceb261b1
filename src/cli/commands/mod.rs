pub mod auth;
pub mod billboard;
pub mod category;
pub mod rows;
pub mod server;
pub mod store;
