// storefront/src/repository/mod.rs

//! Storage contracts consumed by the services.
//!
//! Both stores are injected as trait objects so the engine never depends on a
//! concrete backend. Lookups that miss return `Ok(None)`; `Err` is reserved for
//! the store itself failing.

pub mod memory;

use crate::error::StoreError;
use crate::models::{Order, Product};
use async_trait::async_trait;
use std::collections::BTreeSet;

pub use memory::{InMemoryOrderRepository, InMemoryProductRepository};

/// Catalog Store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

  async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

  async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

  async fn distinct_categories(&self) -> Result<BTreeSet<String>, StoreError>;

  /// Inserts `products` only when the store is empty. Returns whether anything was written.
  async fn seed_if_empty(&self, products: &[Product]) -> Result<bool, StoreError>;
}

/// Order Store. Append-only from this crate's perspective.
#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Durably stores a new order. An existing id is a `StoreError::Duplicate`.
  async fn insert(&self, order: &Order) -> Result<(), StoreError>;

  async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError>;
}
