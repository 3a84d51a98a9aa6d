// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every fixture.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storefront::services::payments::{PaymentGateway, PaymentIntent, PaymentIntentRequest};
use storefront::{
  CartItem, CreateOrderRequest, CustomerInfo, InMemoryOrderRepository, InMemoryProductRepository, Order,
  OrderRepository, OrderService, PaymentError, Product, ProductRepository, StoreError,
};
use tracing::Level;

// --- Tracing (once per test binary) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Record builders ---
pub fn product(id: &str, name: &str, price: Decimal, in_stock: bool) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    description: format!("{name} description"),
    price,
    category: "Black Tea".to_string(),
    image_url: format!("https://img.example/{id}.jpg"),
    in_stock,
    weight: "100g".to_string(),
  }
}

pub fn customer() -> CustomerInfo {
  CustomerInfo {
    name: "Asha Rao".to_string(),
    phone: "+91 98765 43210".to_string(),
    email: "asha@example.com".to_string(),
    address: "12 MG Road, Bengaluru".to_string(),
  }
}

pub fn request(items: Vec<CartItem>) -> CreateOrderRequest {
  CreateOrderRequest {
    customer_info: customer(),
    items,
    notes: "Leave at the door".to_string(),
  }
}

// --- Product store that records every lookup ---
pub struct RecordingProductRepository {
  inner: InMemoryProductRepository,
  pub lookups: Mutex<Vec<String>>,
}

impl RecordingProductRepository {
  pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
    Self {
      inner: InMemoryProductRepository::with_products(products),
      lookups: Mutex::new(Vec::new()),
    }
  }

  pub fn looked_up(&self) -> Vec<String> {
    self.lookups.lock().clone()
  }

  pub fn upsert(&self, product: Product) {
    self.inner.upsert(product);
  }
}

#[async_trait]
impl ProductRepository for RecordingProductRepository {
  async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
    self.lookups.lock().push(id.to_string());
    self.inner.find_by_id(id).await
  }

  async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
    self.inner.find_by_category(category).await
  }

  async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
    self.inner.list_all().await
  }

  async fn distinct_categories(&self) -> Result<BTreeSet<String>, StoreError> {
    self.inner.distinct_categories().await
  }

  async fn seed_if_empty(&self, products: &[Product]) -> Result<bool, StoreError> {
    self.inner.seed_if_empty(products).await
  }
}

// --- Order store that counts write attempts ---
#[derive(Default)]
pub struct CountingOrderRepository {
  inner: InMemoryOrderRepository,
  pub insert_calls: AtomicUsize,
}

impl CountingOrderRepository {
  pub fn inserts(&self) -> usize {
    self.insert_calls.load(Ordering::SeqCst)
  }

  pub fn stored(&self) -> usize {
    self.inner.len()
  }
}

#[async_trait]
impl OrderRepository for CountingOrderRepository {
  async fn insert(&self, order: &Order) -> Result<(), StoreError> {
    self.insert_calls.fetch_add(1, Ordering::SeqCst);
    self.inner.insert(order).await
  }

  async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
    self.inner.find_by_id(id).await
  }
}

/// Order store whose backend is down.
pub struct UnavailableOrderRepository;

fn unreachable_store() -> StoreError {
  StoreError::backend(std::io::Error::new(
    std::io::ErrorKind::ConnectionRefused,
    "order store unreachable",
  ))
}

#[async_trait]
impl OrderRepository for UnavailableOrderRepository {
  async fn insert(&self, _order: &Order) -> Result<(), StoreError> {
    Err(unreachable_store())
  }

  async fn find_by_id(&self, _id: &str) -> Result<Option<Order>, StoreError> {
    Err(unreachable_store())
  }
}

// --- Payment gateway that echoes requests back ---
#[derive(Default)]
pub struct RecordingGateway {
  pub requests: Mutex<Vec<PaymentIntentRequest>>,
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
  fn key_id(&self) -> &str {
    "rzp_test_key"
  }

  async fn create_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent, PaymentError> {
    self.requests.lock().push(request.clone());
    Ok(PaymentIntent {
      id: format!("order_{}", request.receipt),
      amount: request.amount,
      currency: request.currency,
      receipt: request.receipt,
      status: "created".to_string(),
    })
  }
}

// --- Wiring ---
pub struct Harness {
  pub products: Arc<RecordingProductRepository>,
  pub orders: Arc<CountingOrderRepository>,
  pub service: OrderService,
}

pub fn harness(products: impl IntoIterator<Item = Product>) -> Harness {
  let products = Arc::new(RecordingProductRepository::new(products));
  let orders = Arc::new(CountingOrderRepository::default());
  let service = OrderService::new(products.clone(), orders.clone());
  Harness {
    products,
    orders,
    service,
  }
}
