// storefront_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use storefront::{OrderRepository, ProductRepository};
use storefront_server::config::AppConfig;
use storefront_server::db::{self, PgOrderRepository, PgProductRepository};
use storefront_server::state::AppState;
use storefront_server::{services, telemetry, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env()?;
  telemetry::init_tracing(app_config.log_format);
  tracing::info!("Starting storefront server...");

  // One pool for the process lifetime, handed explicitly to the repositories.
  let db_pool = db::connect(&app_config).await?;

  let products: Arc<dyn ProductRepository> = Arc::new(PgProductRepository::new(db_pool.clone()));
  let orders: Arc<dyn OrderRepository> = Arc::new(PgOrderRepository::new(db_pool.clone()));
  let gateway = services::payment_gateway(&app_config);
  let app_state = AppState::new(products, orders, gateway, &app_config.payment_currency);

  if app_config.seed_db {
    app_state.catalog.seed_defaults().await?;
  }

  let server_address = app_config.bind_address();
  let allowed_origins = app_config.allowed_origins.clone();
  tracing::info!(origins = ?allowed_origins, "CORS enabled.");
  tracing::info!("Binding server to {}...", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(web::cors(&allowed_origins))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await;

  db_pool.close().await;
  tracing::info!("Database pool closed, shutdown complete.");

  served?;
  Ok(())
}
