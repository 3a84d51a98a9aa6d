// storefront_server/src/state.rs
use std::sync::Arc;
use storefront::{CatalogService, OrderRepository, OrderService, PaymentGateway, PaymentService, ProductRepository};

/// Shared by every worker. Services own their repositories; nothing here is global.
#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<CatalogService>,
  pub orders: Arc<OrderService>,
  pub payments: Arc<PaymentService>,
}

impl AppState {
  pub fn new(
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    gateway: Arc<dyn PaymentGateway>,
    payment_currency: &str,
  ) -> Self {
    Self {
      catalog: Arc::new(CatalogService::new(Arc::clone(&products))),
      orders: Arc::new(OrderService::new(Arc::clone(&products), orders)),
      payments: Arc::new(PaymentService::new(products, gateway, payment_currency)),
    }
  }
}
