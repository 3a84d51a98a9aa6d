// storefront_server/src/db/mod.rs

//! Postgres-backed repositories and pool lifecycle.

pub mod orders;
pub mod products;

pub use orders::PgOrderRepository;
pub use products::PgProductRepository;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Opens the pool and applies pending migrations. The caller owns the pool and
/// closes it on shutdown.
pub async fn connect(config: &AppConfig) -> AppResult<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(&config.database_url)
    .await?;
  info!("Successfully connected to the database.");

  sqlx::migrate!("./migrations").run(&pool).await?;
  info!("Database migrations applied.");

  Ok(pool)
}
