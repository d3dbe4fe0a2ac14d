use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use paddelup::config::AppConfig;
use paddelup::handlers;
use paddelup::services::store::grist::GristRecordStore;
use paddelup::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    tracing::info!(
        doc_id = %config.grist.doc_id,
        table_id = %config.grist.table_id,
        "forwarding bookings to Grist at {}",
        config.grist.base_url
    );
    let store = GristRecordStore::new(&config.grist);

    let state = Arc::new(AppState {
        store: Box::new(store),
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
