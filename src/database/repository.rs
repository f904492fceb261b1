use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Billboard, Category, Store};
use crate::validation::{BillboardInput, StoreInput};

/// Stores are always addressed together with their owner, so a lookup for someone
/// else's store behaves exactly like a lookup for a store that does not exist.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create_store(&self, user_id: &str, input: &StoreInput) -> Result<Store, DatabaseError>;

    async fn find_store_for_user(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError>;

    async fn list_stores_for_user(&self, user_id: &str) -> Result<Vec<Store>, DatabaseError>;

    async fn update_store(
        &self,
        store_id: Uuid,
        user_id: &str,
        input: &StoreInput,
    ) -> Result<Option<Store>, DatabaseError>;

    async fn delete_store(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError>;
}

/// Single-row billboard operations. Update and delete return `None` when no row with
/// that id exists in that store.
#[async_trait]
pub trait BillboardRepository: Send + Sync {
    async fn list_billboards(&self, store_id: Uuid) -> Result<Vec<Billboard>, DatabaseError>;

    async fn get_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError>;

    async fn create_billboard(&self, store_id: Uuid, input: &BillboardInput) -> Result<Billboard, DatabaseError>;

    async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        input: &BillboardInput,
    ) -> Result<Option<Billboard>, DatabaseError>;

    async fn delete_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, DatabaseError>;

    async fn get_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError>;

    async fn create_category(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Category, DatabaseError>;

    async fn update_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, DatabaseError>;

    async fn delete_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError>;
}

/// Everything the HTTP layer needs from persistence
#[async_trait]
pub trait Datastore: StoreRepository + BillboardRepository + CategoryRepository {
    async fn ping(&self) -> Result<(), DatabaseError>;
}
