// storefront/src/repository/memory.rs

//! Process-local repositories backed by `parking_lot` locks.
//!
//! Locks are only taken inside synchronous sections, never across an `.await`.

use crate::error::StoreError;
use crate::models::{Order, Product};
use crate::repository::{OrderRepository, ProductRepository};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};

/// Products kept in insertion order, like a document collection scan.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
  products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    Self {
      products: RwLock::new(products.into_iter().collect()),
    }
  }

  /// Inserts or replaces a product. Stands in for admin tooling in tests.
  pub fn upsert(&self, product: Product) {
    let mut guard = self.products.write();
    match guard.iter_mut().find(|p| p.id == product.id) {
      Some(existing) => *existing = product,
      None => guard.push(product),
    }
  }

  pub fn len(&self) -> usize {
    self.products.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.read().is_empty()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
    Ok(self.products.read().iter().find(|p| p.id == id).cloned())
  }

  async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
    Ok(
      self
        .products
        .read()
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect(),
    )
  }

  async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
    Ok(self.products.read().clone())
  }

  async fn distinct_categories(&self) -> Result<BTreeSet<String>, StoreError> {
    Ok(self.products.read().iter().map(|p| p.category.clone()).collect())
  }

  async fn seed_if_empty(&self, products: &[Product]) -> Result<bool, StoreError> {
    let mut guard = self.products.write();
    if !guard.is_empty() {
      return Ok(false);
    }
    guard.extend_from_slice(products);
    Ok(true)
  }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
  orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
  async fn insert(&self, order: &Order) -> Result<(), StoreError> {
    let mut guard = self.orders.write();
    if guard.contains_key(&order.id) {
      return Err(StoreError::Duplicate { id: order.id.clone() });
    }
    guard.insert(order.id.clone(), order.clone());
    Ok(())
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
    Ok(self.orders.read().get(id).cloned())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{CustomerInfo, OrderStatus};
  use chrono::Utc;
  use rust_decimal::Decimal;

  fn product(id: &str, category: &str) -> Product {
    Product {
      id: id.to_string(),
      name: format!("Tea {id}"),
      description: String::new(),
      price: Decimal::from(100),
      category: category.to_string(),
      image_url: String::new(),
      in_stock: true,
      weight: "100g".to_string(),
    }
  }

  fn order(id: &str) -> Order {
    Order {
      id: id.to_string(),
      customer_info: CustomerInfo::default(),
      items: Vec::new(),
      total_amount: Decimal::ZERO,
      status: OrderStatus::pending(),
      order_date: Utc::now(),
      notes: String::new(),
    }
  }

  #[tokio::test]
  async fn seed_if_empty_is_a_noop_on_populated_store() {
    let repo = InMemoryProductRepository::with_products([product("p1", "Black Tea")]);
    let seeded = repo.seed_if_empty(&[product("p2", "Green Tea")]).await.unwrap();
    assert!(!seeded);
    assert_eq!(repo.len(), 1);
    assert!(repo.find_by_id("p2").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn categories_are_distinct_and_sorted() {
    let repo = InMemoryProductRepository::with_products([
      product("p1", "Green Tea"),
      product("p2", "Black Tea"),
      product("p3", "Green Tea"),
    ]);
    let categories: Vec<_> = repo.distinct_categories().await.unwrap().into_iter().collect();
    assert_eq!(categories, vec!["Black Tea".to_string(), "Green Tea".to_string()]);
  }

  #[tokio::test]
  async fn duplicate_order_ids_are_rejected() {
    let repo = InMemoryOrderRepository::new();
    repo.insert(&order("ord_1")).await.unwrap();
    let err = repo.insert(&order("ord_1")).await.unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { ref id } if id == "ord_1"));
    assert_eq!(repo.len(), 1);
  }

  #[tokio::test]
  async fn upsert_replaces_existing_product() {
    let repo = InMemoryProductRepository::with_products([product("p1", "Black Tea")]);
    let mut changed = product("p1", "Black Tea");
    changed.in_stock = false;
    repo.upsert(changed);
    assert_eq!(repo.len(), 1);
    assert!(!repo.find_by_id("p1").await.unwrap().unwrap().in_stock);
  }
}
