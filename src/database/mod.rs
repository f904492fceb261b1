pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryDatastore;
pub use postgres::PgDatastore;
pub use repository::{BillboardRepository, CategoryRepository, Datastore, StoreRepository};
