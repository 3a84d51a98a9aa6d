// storefront/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry. Read-only from the order pipeline's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub category: String,
  pub image_url: String,
  pub in_stock: bool,
  pub weight: String,
}
