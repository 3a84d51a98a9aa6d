// storefront/src/models/order.rs

use crate::models::cart::{CartItem, CustomerInfo};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form order state tag.
///
/// The engine only ever writes [`OrderStatus::PENDING`]. Later states are set by
/// downstream systems and are read back verbatim, whatever they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
  pub const PENDING: &'static str = "pending";

  pub fn new(tag: impl Into<String>) -> Self {
    Self(tag.into())
  }

  pub fn pending() -> Self {
    Self::new(Self::PENDING)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_pending(&self) -> bool {
    self.0 == Self::PENDING
  }
}

impl Default for OrderStatus {
  fn default() -> Self {
    Self::pending()
  }
}

impl From<String> for OrderStatus {
  fn from(tag: String) -> Self {
    Self(tag)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A finalized, persisted checkout.
///
/// `total_amount` is the sum of catalog price times quantity at validation time and
/// is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: String,
  pub customer_info: CustomerInfo,
  pub items: Vec<CartItem>,
  pub total_amount: Decimal,
  pub status: OrderStatus,
  pub order_date: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub notes: String,
}
