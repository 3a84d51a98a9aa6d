// storefront_server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Serialize;
use storefront::CreateOrderRequest;
use tracing::{info, instrument};

use crate::errors::Result as AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
  pub message: &'static str,
  pub order_id: String,
  pub total_amount: Decimal,
}

#[instrument(name = "handler::create_order", skip_all, fields(lines = body.items.len()))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<CreateOrderRequest>,
) -> AppResult<HttpResponse> {
  let order = app_state.orders.create_order(body.into_inner()).await?;
  info!(order_id = %order.id, total = %order.total_amount, "Checkout succeeded.");

  Ok(HttpResponse::Ok().json(CreateOrderResponse {
    message: "Order placed successfully",
    order_id: order.id,
    total_amount: order.total_amount,
  }))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
  let order = app_state.orders.get_order(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(order))
}
