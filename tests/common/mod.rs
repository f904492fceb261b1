#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use storefront_admin::auth::TokenKeys;
use storefront_admin::client::DashboardClient;
use storefront_admin::config::AppConfig;
use storefront_admin::database::models::{Billboard, Store};
use storefront_admin::database::{BillboardRepository, MemoryDatastore, StoreRepository};
use storefront_admin::server::app;
use storefront_admin::state::AppState;
use storefront_admin::validation::{BillboardInput, StoreInput};

pub const OWNER: &str = "user_owner";
pub const STRANGER: &str = "user_stranger";

/// Router over a fresh in-memory datastore, plus direct handles for seeding
pub struct TestApp {
    pub router: Router,
    pub datastore: Arc<MemoryDatastore>,
    pub tokens: TokenKeys,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("response was not JSON ({}): {}", e, self.body))
    }
}

impl TestApp {
    pub fn new() -> Self {
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;

        let datastore = Arc::new(MemoryDatastore::new());
        let tokens = TokenKeys::from_config(&config.security).expect("development secret is set");
        let state = AppState::new(datastore.clone(), tokens.clone());

        Self {
            router: app(state, &config),
            datastore,
            tokens,
        }
    }

    pub fn token(&self, user_id: &str) -> String {
        self.tokens.generate(user_id).expect("token generation")
    }

    /// Drive one request through the router in-process
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        user: Option<&str>,
        body: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user) = user {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", self.token(user)));
        }
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }

        let request = builder
            .body(Body::from(body.unwrap_or_default().to_string()))
            .expect("valid request");

        let response = self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, path: &str, user: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, user, None).await
    }

    pub async fn post(&self, path: &str, user: Option<&str>, body: &str) -> TestResponse {
        self.request(Method::POST, path, user, Some(body)).await
    }

    pub async fn patch(&self, path: &str, user: Option<&str>, body: &str) -> TestResponse {
        self.request(Method::PATCH, path, user, Some(body)).await
    }

    pub async fn delete(&self, path: &str, user: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, path, user, None).await
    }

    pub async fn seed_store(&self, user_id: &str, name: &str) -> Store {
        self.datastore
            .create_store(user_id, &StoreInput { name: name.to_string() })
            .await
            .expect("seed store")
    }

    pub async fn seed_billboard(&self, store_id: uuid::Uuid, label: &str) -> Billboard {
        let input = BillboardInput {
            label: label.to_string(),
            image_url: format!("https://cdn.example.com/{}.png", label),
        };
        self.datastore
            .create_billboard(store_id, &input)
            .await
            .expect("seed billboard")
    }

    /// Serve the router on a free local port for tests that need a real HTTP client.
    /// The server lives as long as the calling test's runtime.
    pub async fn spawn(&self) -> Result<String> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;

        let router = self.router.clone();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(format!("http://127.0.0.1:{}", port))
    }

    pub fn client(&self, base_url: &str, user: Option<&str>) -> DashboardClient {
        DashboardClient::new(base_url, user.map(|u| self.token(u))).expect("valid base url")
    }
}
