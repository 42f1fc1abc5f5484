use std::sync::Arc;

use anyhow::Context;
use picpost::{
    store::{PgPostStore, PostStore},
    web::AppState,
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    picpost::telemetry::init(config.log_format);

    tracing::info!("Starting picpost");
    tracing::info!("Web server will listen on: {}", config.web_addr());

    let store = PgPostStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open the post store")?;
    let store: Arc<dyn PostStore> = Arc::new(store);

    let app_state = AppState::new(store.clone());
    let result = picpost::web::serve(config.web_addr(), &config.static_dir, app_state).await;

    store.close().await;
    tracing::info!("Post store closed");

    result.context("Web server stopped")
}
