// storefront_server/src/web/routes.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{order_handlers, payment_handlers, product_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "healthy", "message": "Storefront API is running" }))
}

/// Undecodable JSON bodies become `400 {"error": ...}` instead of actix's plain-text default.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::MalformedRequest(err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().limit(256 * 1024).error_handler(json_error_handler)
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(json_config())
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route(
            "/category/{category}",
            web::get().to(product_handlers::products_by_category_handler),
          )
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      .route("/categories", web::get().to(product_handlers::categories_handler))
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::create_order_handler))
          .route("/{order_id}", web::get().to(order_handlers::get_order_handler)),
      )
      .route(
        "/payments/create-order",
        web::post().to(payment_handlers::create_payment_order_handler),
      ),
  );
}
