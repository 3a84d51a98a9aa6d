// storefront/src/models/cart.rs

use serde::{Deserialize, Deserializer, Serialize};

/// One requested cart line. Any price the client sends alongside is ignored.
///
/// Absent fields decode to their zero values, as the storefront client has always
/// relied on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
  pub product_id: String,
  pub quantity: i32,
}

impl CartItem {
  pub fn new(product_id: impl Into<String>, quantity: i32) -> Self {
    Self {
      product_id: product_id.into(),
      quantity,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
  pub name: String,
  pub phone: String,
  pub email: String,
  pub address: String,
}

/// Checkout input: who is ordering, what, and any free-text notes.
///
/// Missing or `null` members decode as empty; validation happens in the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
  #[serde(default, deserialize_with = "null_as_default")]
  pub customer_info: CustomerInfo,
  #[serde(default, deserialize_with = "null_as_default")]
  pub items: Vec<CartItem>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub notes: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
