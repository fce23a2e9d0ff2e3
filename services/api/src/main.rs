use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{DatabaseConfig, health_check, init_pool};
use users_api::{AppState, routes, store::PgUserStore};

const LISTEN_ADDR: &str = "0.0.0.0:4000";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting user API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    health_check(&pool).await?;
    info!("Database connection successful");

    let store = PgUserStore::new(pool);
    store.ensure_schema().await?;

    let app = routes::create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    info!("User API service listening on {}", LISTEN_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}
