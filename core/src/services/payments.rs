// storefront/src/services/payments.rs

//! Payment-intent hand-off. Capture and settlement happen at the gateway.

use crate::error::PaymentError;
use crate::ids::{IdGenerator, PrefixedUuidIds};
use crate::models::CartItem;
use crate::pricing;
use crate::repository::ProductRepository;
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentOrderRequest {
  pub items: Vec<CartItem>,
}

/// What the adapter asks the gateway for. Amounts are in minor units (paise, cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntentRequest {
  pub amount: i64,
  pub currency: String,
  pub receipt: String,
}

/// Gateway-side handle the storefront client completes payment against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
  pub id: String,
  pub amount: i64,
  pub currency: String,
  pub receipt: String,
  pub status: String,
}

/// Opaque third-party payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
  /// Public key the storefront client needs to open the gateway checkout.
  fn key_id(&self) -> &str;

  async fn create_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent, PaymentError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOrder {
  pub intent: PaymentIntent,
  pub key_id: String,
}

pub struct PaymentService {
  products: Arc<dyn ProductRepository>,
  gateway: Arc<dyn PaymentGateway>,
  currency: String,
  receipts: Arc<dyn IdGenerator>,
}

impl PaymentService {
  pub fn new(
    products: Arc<dyn ProductRepository>,
    gateway: Arc<dyn PaymentGateway>,
    currency: impl Into<String>,
  ) -> Self {
    Self {
      products,
      gateway,
      currency: currency.into(),
      receipts: Arc::new(PrefixedUuidIds::receipts()),
    }
  }

  /// Prices the cart exactly like checkout does and opens a gateway order for the
  /// resulting amount.
  #[instrument(name = "PaymentService::create_payment_order", skip_all, fields(lines = items.len()))]
  pub async fn create_payment_order(&self, items: &[CartItem]) -> Result<PaymentOrder, PaymentError> {
    let total = pricing::price_cart(self.products.as_ref(), items).await?;
    let amount = to_minor_units(total)?;

    let request = PaymentIntentRequest {
      amount,
      currency: self.currency.clone(),
      receipt: self.receipts.next_id(),
    };
    let intent = self.gateway.create_intent(request).await?;
    info!(payment_order_id = %intent.id, amount = intent.amount, currency = %intent.currency, "Payment order created.");

    Ok(PaymentOrder {
      intent,
      key_id: self.gateway.key_id().to_string(),
    })
  }
}

impl std::fmt::Debug for PaymentService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PaymentService")
      .field("currency", &self.currency)
      .field("key_id", &self.gateway.key_id())
      .finish_non_exhaustive()
  }
}

/// Converts a major-unit amount to positive minor units, rounding half-even.
pub fn to_minor_units(amount: Decimal) -> Result<i64, PaymentError> {
  (amount * Decimal::ONE_HUNDRED)
    .round()
    .to_i64()
    .filter(|minor| *minor > 0)
    .ok_or(PaymentError::InvalidAmount)
}
