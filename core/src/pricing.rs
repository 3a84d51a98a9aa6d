// storefront/src/pricing.rs

//! Authoritative cart pricing against the Catalog Store.

use crate::error::{OrderError, OrderResult};
use crate::models::CartItem;
use crate::repository::ProductRepository;
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

/// Re-prices every line from the catalog, in submission order.
///
/// Fails on the first line whose product is missing or out of stock; later lines
/// are never looked up. Quantities are taken as submitted, including zero or
/// negative values.
#[instrument(name = "pricing::price_cart", skip_all, fields(lines = items.len()))]
pub async fn price_cart(products: &dyn ProductRepository, items: &[CartItem]) -> OrderResult<Decimal> {
  let mut total = Decimal::ZERO;

  for item in items {
    let product = products
      .find_by_id(&item.product_id)
      .await?
      .ok_or_else(|| OrderError::ProductNotFound {
        product_id: item.product_id.clone(),
      })?;

    if !product.in_stock {
      return Err(OrderError::ProductOutOfStock {
        product_id: product.id,
        name: product.name,
      });
    }

    if item.quantity <= 0 {
      warn!(product_id = %item.product_id, quantity = item.quantity, "Non-positive quantity accepted as submitted.");
    }

    total += product.price * Decimal::from(item.quantity);
    debug!(product_id = %item.product_id, unit_price = %product.price, quantity = item.quantity, running_total = %total, "Line priced.");
  }

  Ok(total)
}
