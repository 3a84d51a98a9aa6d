// storefront_server/src/web/handlers/payment_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Serialize;
use storefront::CreatePaymentOrderRequest;
use tracing::instrument;

use crate::errors::Result as AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatePaymentOrderResponse {
  pub order_id: String,
  pub amount: i64,
  pub currency: String,
  pub key_id: String,
}

#[instrument(name = "handler::create_payment_order", skip_all, fields(lines = body.items.len()))]
pub async fn create_payment_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<CreatePaymentOrderRequest>,
) -> AppResult<HttpResponse> {
  let payment = app_state.payments.create_payment_order(&body.items).await?;

  Ok(HttpResponse::Ok().json(CreatePaymentOrderResponse {
    order_id: payment.intent.id,
    amount: payment.intent.amount,
    currency: payment.intent.currency,
    key_id: payment.key_id,
  }))
}
