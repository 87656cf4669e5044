mod config;
mod error;
mod models;
mod qr;
mod routes;
mod service;
mod store;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use config::Config;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::service::InvitationService;
use crate::store::postgres::PgInvitationStore;

#[derive(Clone)]
pub struct AppState {
    pub service: InvitationService,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let db = PgPool::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    sqlx::migrate!()
        .run(&db)
        .await
        .expect("failed to run migrations");

    let store = Arc::new(PgInvitationStore::new(db));
    let state = AppState {
        service: InvitationService::new(store, &config),
    };

    let app = routes::api_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
