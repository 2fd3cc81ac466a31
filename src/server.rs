use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    config::Config,
    handlers::{self, AppState},
    session::SessionStore,
    store::PriceStore,
};

/// Start the price service
///
/// This function:
/// 1. Builds the price store and session store from config
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let store = Arc::new(PriceStore::new(&config.storage)?);
    let sessions = Arc::new(SessionStore::new(config.session.ttl_minutes));

    if config.admin.is_none() {
        warn!("ADMIN_USER/ADMIN_PASS not set, every price update will be rejected");
    }
    if config.storage.token.is_none() {
        warn!("BLOB_READ_WRITE_TOKEN not set, serving built-in default prices");
    }

    let config = Arc::new(config);
    let state = AppState {
        config: config.clone(),
        store,
        sessions,
    };

    let app = create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting tile-quote on {}", addr);
    info!(
        key = %config.storage.key,
        session_ttl_minutes = config.session.ttl_minutes,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One logical price resource: public read, authenticated write,
        // explicit 405 with the two allowed methods for everything else.
        .route(
            "/prices",
            get(handlers::prices::get_prices)
                .post(handlers::prices::put_prices)
                .fallback(handlers::prices::method_not_allowed),
        )
        .route("/admin/login", post(handlers::admin::login))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(state)
        // Price documents are small; cap bodies well below any abuse size
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn create_test_state() -> AppState {
        let config = Config::default();
        AppState {
            store: Arc::new(PriceStore::new(&config.storage).unwrap()),
            sessions: Arc::new(SessionStore::new(config.session.ttl_minutes)),
            config: Arc::new(config),
        }
    }

    #[tokio::test]
    async fn test_create_router() {
        let _app = create_router(create_test_state());
        // Router created successfully - no panic
    }
}
