use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::TokenKeys;
use crate::config::AppConfig;
use crate::database::{Datastore, DatabaseManager, MemoryDatastore, PgDatastore};
use crate::handlers::{billboards, categories, stores, system};
use crate::middleware::identity_middleware;
use crate::state::AppState;

/// Pick the datastore from config: Postgres when a URL is set, in-memory otherwise.
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let tokens = TokenKeys::from_config(&config.security)?;

    let datastore: Arc<dyn Datastore> = if config.database.url.is_some() {
        let pool = DatabaseManager::connect(&config.database).await?;
        DatabaseManager::ensure_schema(&pool).await?;
        Arc::new(PgDatastore::new(pool))
    } else {
        tracing::warn!("DATABASE_URL not set; using the in-memory datastore (data is lost on exit)");
        Arc::new(MemoryDatastore::new())
    };

    Ok(AppState::new(datastore, tokens))
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(store_routes())
        .merge(billboard_routes())
        .merge(category_routes())
        .layer(middleware::from_fn_with_state(state.clone(), identity_middleware))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(config));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/api/stores", get(stores::list).post(stores::create))
        .route(
            "/api/stores/:storeId",
            get(stores::show).patch(stores::update).delete(stores::delete),
        )
}

fn billboard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/:storeId/billboards",
            get(billboards::list).post(billboards::create),
        )
        .route(
            "/api/:storeId/billboards/:billboardId",
            get(billboards::show)
                .patch(billboards::update)
                .delete(billboards::delete),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/:storeId/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/:storeId/categories/:categoryId",
            get(categories::show)
                .patch(categories::update)
                .delete(categories::delete),
        )
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.is_development() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let state = build_state(config).await?;
    let app = app(state, config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Storefront Admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
