use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::database::models::{Billboard, Category, Store};
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status; `message` is its plain-text body
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Typed HTTP client for the dashboard API
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl DashboardClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(base_url)?,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json::<T>().await?)
    }

    /// `GET /health`; a 503 surfaces as `ClientError::Api`
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        self.send(self.http.get(self.url("/health")?)).await
    }

    // Stores

    pub async fn list_stores(&self) -> Result<Vec<Store>, ClientError> {
        self.send(self.http.get(self.url("/api/stores")?)).await
    }

    pub async fn get_store(&self, store_id: Uuid) -> Result<Store, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/stores/{}", store_id))?))
            .await
    }

    pub async fn create_store(&self, name: &str) -> Result<Store, ClientError> {
        let body = json!({ "name": name });
        self.send(self.http.post(self.url("/api/stores")?).json(&body))
            .await
    }

    // Billboards

    pub async fn list_billboards(&self, store_id: Uuid) -> Result<Vec<Billboard>, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/{}/billboards", store_id))?))
            .await
    }

    pub async fn get_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Option<Billboard>, ClientError> {
        let url = self.url(&format!("/api/{}/billboards/{}", store_id, billboard_id))?;
        self.send(self.http.get(url)).await
    }

    pub async fn create_billboard(
        &self,
        store_id: Uuid,
        label: &str,
        image_url: &str,
    ) -> Result<Billboard, ClientError> {
        let body = json!({ "label": label, "imageUrl": image_url });
        let url = self.url(&format!("/api/{}/billboards", store_id))?;
        self.send(self.http.post(url).json(&body)).await
    }

    pub async fn update_billboard(
        &self,
        store_id: Uuid,
        billboard_id: Uuid,
        label: &str,
        image_url: &str,
    ) -> Result<Billboard, ClientError> {
        let body = json!({ "label": label, "imageUrl": image_url });
        let url = self.url(&format!("/api/{}/billboards/{}", store_id, billboard_id))?;
        self.send(self.http.patch(url).json(&body)).await
    }

    pub async fn delete_billboard(&self, store_id: Uuid, billboard_id: Uuid) -> Result<Billboard, ClientError> {
        let url = self.url(&format!("/api/{}/billboards/{}", store_id, billboard_id))?;
        self.send(self.http.delete(url)).await
    }

    // Categories

    pub async fn list_categories(&self, store_id: Uuid) -> Result<Vec<Category>, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/{}/categories", store_id))?))
            .await
    }

    pub async fn get_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Option<Category>, ClientError> {
        let url = self.url(&format!("/api/{}/categories/{}", store_id, category_id))?;
        self.send(self.http.get(url)).await
    }

    pub async fn create_category(
        &self,
        store_id: Uuid,
        name: &str,
        billboard_id: Uuid,
    ) -> Result<Category, ClientError> {
        let body = json!({ "name": name, "billboardId": billboard_id });
        let url = self.url(&format!("/api/{}/categories", store_id))?;
        self.send(self.http.post(url).json(&body)).await
    }

    pub async fn update_category(
        &self,
        store_id: Uuid,
        category_id: Uuid,
        name: &str,
        billboard_id: Uuid,
    ) -> Result<Category, ClientError> {
        let body = json!({ "name": name, "billboardId": billboard_id });
        let url = self.url(&format!("/api/{}/categories/{}", store_id, category_id))?;
        self.send(self.http.patch(url).json(&body)).await
    }

    pub async fn delete_category(&self, store_id: Uuid, category_id: Uuid) -> Result<Category, ClientError> {
        let url = self.url(&format!("/api/{}/categories/{}", store_id, category_id))?;
        self.send(self.http.delete(url)).await
    }
}
