use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Billboard, Category, Store};
use crate::database::repository::{BillboardRepository, CategoryRepository, Datastore, StoreRepository};
use crate::validation::{BillboardInput, StoreInput};

#[derive(Default)]
struct Tables {
    stores: Vec<Store>,
    billboards: Vec<Billboard>,
    categories: Vec<Category>,
}

/// Process-local datastore with the same foreign keys as the Postgres schema.
///
/// Rows are kept in insertion order; listings walk them backwards to match the
/// newest-first ordering of the SQL queries.
#[derive(Default)]
pub struct MemoryDatastore {
    tables: RwLock<Tables>,
}

impl MemoryDatastore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreRepository for MemoryDatastore {
    async fn create_store(&self, user_id: &str, input: &StoreInput) -> Result<Store, DatabaseError> {
        let now = Utc::now();
        let store = Store {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.tables.write().await.stores.push(store.clone());
        Ok(store)
    }

    async fn find_store_for_user(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .stores
            .iter()
            .find(|s| s.id == store_id && s.user_id == user_id)
            .cloned())
    }

    async fn list_stores_for_user(&self, user_id: &str) -> Result<Vec<Store>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.stores.iter().filter(|s| s.user_id == user_id).cloned().collect())
    }

    async fn update_store(
        &self,
        store_id: Uuid,
        user_id: &str,
        input: &StoreInput,
    ) -> Result<Option<Store>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(store) = tables
            .stores
            .iter_mut()
            .find(|s| s.id == store_id && s.user_id == user_id)
        else {
            return Ok(None);
        };

        store.name = input.name.clone();
        store.updated_at = Utc::now();
        Ok(Some(store.clone()))
    }

    async fn delete_store(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .stores
            .iter()
            .position(|s| s.id == store_id && s.user_id == user_id)
        else {
            return Ok(None);
        };

        if tables.billboards.iter().any(|b| b.store_id == store_id)
            || tables.categories.iter().any(|c| c.store_id == store_id)
        {
            return Err(DatabaseError::Constraint(format!(
                "store {} is still referenced by billboards or categories",
                store_id
            )));
        }

        Ok(Some(tables.stores.remove(index)))
    }
}

#[async_trait]
impl BillboardRepository for MemoryDatastore {
    async fn list_billboards(&self, store_id: Uuid) -> Result<Vec<Billboard>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .billboards
            .iter()
            .rev()
            .filter(|b| b.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn get_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .billboards
            .iter()
            .find(|b| b.id == billboard_id && b.store_id == store_id)
            .cloned())
    }

    async fn create_billboard(&self, store_id: Uuid, input: &BillboardInput) -> Result<Billboard, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.stores.iter().any(|s| s.id == store_id) {
            return Err(DatabaseError::Constraint(format!("store {} does not exist", store_id)));
        }

        let now = Utc::now();
        let billboard = Billboard {
            id: Uuid::new_v4(),
            store_id,
            label: input.label.clone(),
            image_url: input.image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        tables.billboards.push(billboard.clone());
        Ok(billboard)
    }

    async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        input: &BillboardInput,
    ) -> Result<Option<Billboard>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(billboard) = tables
            .billboards
            .iter_mut()
            .find(|b| b.id == billboard_id && b.store_id == store_id)
        else {
            return Ok(None);
        };

        billboard.label = input.label.clone();
        billboard.image_url = input.image_url.clone();
        billboard.updated_at = Utc::now();
        Ok(Some(billboard.clone()))
    }

    async fn delete_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .billboards
            .iter()
            .position(|b| b.id == billboard_id && b.store_id == store_id)
        else {
            return Ok(None);
        };

        if tables.categories.iter().any(|c| c.billboard_id == billboard_id) {
            return Err(DatabaseError::Constraint(format!(
                "billboard {} is still referenced by categories",
                billboard_id
            )));
        }

        Ok(Some(tables.billboards.remove(index)))
    }
}

#[async_trait]
impl CategoryRepository for MemoryDatastore {
    async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .rev()
            .filter(|c| c.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn get_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .find(|c| c.id == category_id && c.store_id == store_id)
            .cloned())
    }

    async fn create_category(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Category, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.stores.iter().any(|s| s.id == store_id) {
            return Err(DatabaseError::Constraint(format!("store {} does not exist", store_id)));
        }
        if !tables.billboards.iter().any(|b| b.id == billboard_id) {
            return Err(DatabaseError::Constraint(format!("billboard {} does not exist", billboard_id)));
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            store_id,
            billboard_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };

        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.billboards.iter().any(|b| b.id == billboard_id) {
            return Err(DatabaseError::Constraint(format!("billboard {} does not exist", billboard_id)));
        }

        let Some(category) = tables
            .categories
            .iter_mut()
            .find(|c| c.id == category_id && c.store_id == store_id)
        else {
            return Ok(None);
        };

        category.billboard_id = billboard_id;
        category.name = name.to_string();
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .categories
            .iter()
            .position(|c| c.id == category_id && c.store_id == store_id)
        else {
            return Ok(None);
        };

        Ok(Some(tables.categories.remove(index)))
    }
}

#[async_trait]
impl Datastore for MemoryDatastore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
