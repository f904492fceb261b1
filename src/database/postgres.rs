use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Billboard, Category, Store};
use crate::database::repository::{BillboardRepository, CategoryRepository, Datastore, StoreRepository};
use crate::validation::{BillboardInput, StoreInput};

/// Postgres-backed datastore. Ids and timestamps are generated here rather than by
/// column defaults so both datastores hand out records the same way.
#[derive(Clone)]
pub struct PgDatastore {
    pool: PgPool,
}

impl PgDatastore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StoreRepository for PgDatastore {
    async fn create_store(&self, user_id: &str, input: &StoreInput) -> Result<Store, DatabaseError> {
        let now = Utc::now();
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO stores (id, name, user_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(user_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(store)
    }

    async fn find_store_for_user(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM stores
             WHERE id = $1 AND user_id = $2",
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    async fn list_stores_for_user(&self, user_id: &str) -> Result<Vec<Store>, DatabaseError> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT id, name, user_id, created_at, updated_at
             FROM stores
             WHERE user_id = $1
             ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(stores)
    }

    async fn update_store(
        &self,
        store_id: Uuid,
        user_id: &str,
        input: &StoreInput,
    ) -> Result<Option<Store>, DatabaseError> {
        let store = sqlx::query_as::<_, Store>(
            "UPDATE stores SET name = $3, updated_at = $4
             WHERE id = $1 AND user_id = $2
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(store_id)
        .bind(user_id)
        .bind(&input.name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    async fn delete_store(&self, store_id: Uuid, user_id: &str) -> Result<Option<Store>, DatabaseError> {
        let store = sqlx::query_as::<_, Store>(
            "DELETE FROM stores
             WHERE id = $1 AND user_id = $2
             RETURNING id, name, user_id, created_at, updated_at",
        )
        .bind(store_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }
}

#[async_trait]
impl BillboardRepository for PgDatastore {
    async fn list_billboards(&self, store_id: Uuid) -> Result<Vec<Billboard>, DatabaseError> {
        let billboards = sqlx::query_as::<_, Billboard>(
            "SELECT id, store_id, label, image_url, created_at, updated_at
             FROM billboards
             WHERE store_id = $1
             ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(billboards)
    }

    async fn get_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "SELECT id, store_id, label, image_url, created_at, updated_at
             FROM billboards
             WHERE id = $1 AND store_id = $2",
        )
        .bind(billboard_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(billboard)
    }

    async fn create_billboard(&self, store_id: Uuid, input: &BillboardInput) -> Result<Billboard, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "INSERT INTO billboards (id, store_id, label, image_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, store_id, label, image_url, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&input.label)
        .bind(&input.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(billboard)
    }

    async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        input: &BillboardInput,
    ) -> Result<Option<Billboard>, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "UPDATE billboards SET label = $3, image_url = $4, updated_at = $5
             WHERE id = $1 AND store_id = $2
             RETURNING id, store_id, label, image_url, created_at, updated_at",
        )
        .bind(billboard_id)
        .bind(store_id)
        .bind(&input.label)
        .bind(&input.image_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(billboard)
    }

    async fn delete_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, DatabaseError> {
        let billboard = sqlx::query_as::<_, Billboard>(
            "DELETE FROM billboards
             WHERE id = $1 AND store_id = $2
             RETURNING id, store_id, label, image_url, created_at, updated_at",
        )
        .bind(billboard_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(billboard)
    }
}

#[async_trait]
impl CategoryRepository for PgDatastore {
    async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, store_id, billboard_id, name, created_at, updated_at
             FROM categories
             WHERE store_id = $1
             ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, store_id, billboard_id, name, created_at, updated_at
             FROM categories
             WHERE id = $1 AND store_id = $2",
        )
        .bind(category_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Category, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, store_id, billboard_id, name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, store_id, billboard_id, name, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(billboard_id)
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
        billboard_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET billboard_id = $3, name = $4, updated_at = $5
             WHERE id = $1 AND store_id = $2
             RETURNING id, store_id, billboard_id, name, created_at, updated_at",
        )
        .bind(category_id)
        .bind(store_id)
        .bind(billboard_id)
        .bind(name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn delete_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            "DELETE FROM categories
             WHERE id = $1 AND store_id = $2
             RETURNING id, store_id, billboard_id, name, created_at, updated_at",
        )
        .bind(category_id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }
}

#[async_trait]
impl Datastore for PgDatastore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
