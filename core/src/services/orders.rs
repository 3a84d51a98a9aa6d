// storefront/src/services/orders.rs

//! The order engine: checkout (validate, price, persist) and order lookup.

use crate::error::{OrderError, OrderResult, PipelineError};
use crate::ids::{IdGenerator, PrefixedUuidIds};
use crate::models::{CreateOrderRequest, Order, OrderStatus};
use crate::pipeline::{ContextData, Pipeline, PipelineControl, PipelineResult};
use crate::pricing;
use crate::repository::{OrderRepository, ProductRepository};
use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use tracing::{field, info, instrument, warn, Span};

pub const CHECKOUT_PIPELINE: &str = "checkout";

/// Checkout steps, in execution order. None of them is optional.
pub const CHECKOUT_STEPS: &[(&str, bool)] = &[
  ("price_cart_lines", false),
  ("assemble_order", false),
  ("persist_order", false),
];

/// Per-request checkout state. A fresh one is built for every `create_order` call.
#[derive(Debug, Clone)]
pub struct CheckoutCtxData {
  pub request: CreateOrderRequest,
  pub total_amount: Decimal,
  pub order: Option<Order>,
  pub persisted: bool,
}

impl CheckoutCtxData {
  pub fn new(request: CreateOrderRequest) -> Self {
    Self {
      request,
      total_amount: Decimal::ZERO,
      order: None,
      persisted: false,
    }
  }
}

pub struct OrderService {
  orders: Arc<dyn OrderRepository>,
  checkout: Pipeline<CheckoutCtxData, OrderError>,
}

impl OrderService {
  pub fn new(products: Arc<dyn ProductRepository>, orders: Arc<dyn OrderRepository>) -> Self {
    Self::with_id_generator(products, orders, Arc::new(PrefixedUuidIds::orders()))
  }

  pub fn with_id_generator(
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    ids: Arc<dyn IdGenerator>,
  ) -> Self {
    let checkout = build_checkout_pipeline(products, Arc::clone(&orders), ids);
    Self { orders, checkout }
  }

  /// Validates and prices the cart against the catalog, then persists a new
  /// pending order.
  ///
  /// Nothing is written unless every line validates. If the write itself fails the
  /// caller gets `OrderError::Persistence` and never sees the unsaved order.
  #[instrument(
    name = "OrderService::create_order",
    skip_all,
    fields(lines = request.items.len(), order_id = field::Empty, total = field::Empty)
  )]
  pub async fn create_order(&self, request: CreateOrderRequest) -> OrderResult<Order> {
    let ctx = ContextData::new(CheckoutCtxData::new(request));

    if self.checkout.run(ctx.clone()).await? == PipelineResult::Stopped {
      warn!("Checkout pipeline stopped without persisting an order.");
      return Err(self.incomplete());
    }

    let (order, persisted) = {
      let mut guard = ctx.write();
      (guard.order.take(), guard.persisted)
    };

    match order {
      Some(order) if persisted => {
        Span::current()
          .record("order_id", order.id.as_str())
          .record("total", field::display(order.total_amount));
        info!("Order placed.");
        Ok(order)
      }
      _ => Err(self.incomplete()),
    }
  }

  #[instrument(name = "OrderService::get_order", skip(self))]
  pub async fn get_order(&self, order_id: &str) -> OrderResult<Order> {
    self
      .orders
      .find_by_id(order_id)
      .await?
      .ok_or_else(|| OrderError::OrderNotFound {
        order_id: order_id.to_string(),
      })
  }

  fn incomplete(&self) -> OrderError {
    OrderError::from(PipelineError::Incomplete {
      pipeline: self.checkout.name().to_string(),
    })
  }
}

impl fmt::Debug for OrderService {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OrderService").field("checkout", &self.checkout).finish_non_exhaustive()
  }
}

fn build_checkout_pipeline(
  products: Arc<dyn ProductRepository>,
  orders: Arc<dyn OrderRepository>,
  ids: Arc<dyn IdGenerator>,
) -> Pipeline<CheckoutCtxData, OrderError> {
  let mut p = Pipeline::<CheckoutCtxData, OrderError>::new(CHECKOUT_PIPELINE, CHECKOUT_STEPS);

  // Step 1: authoritative pricing; fails fast on the first bad line.
  p.on("price_cart_lines", move |ctx: ContextData<CheckoutCtxData>| {
    let products = Arc::clone(&products);
    async move {
      let items = ctx.read().request.items.clone();
      let total = pricing::price_cart(products.as_ref(), &items).await?;
      ctx.write().total_amount = total;
      Ok::<_, OrderError>(PipelineControl::Continue)
    }
  });

  // Step 2: build the record. Items and notes pass through untouched.
  p.on("assemble_order", move |ctx: ContextData<CheckoutCtxData>| {
    let ids = Arc::clone(&ids);
    async move {
      {
        let mut guard = ctx.write();
        let order = Order {
          id: ids.next_id(),
          customer_info: guard.request.customer_info.clone(),
          items: guard.request.items.clone(),
          total_amount: guard.total_amount,
          status: OrderStatus::pending(),
          // Microsecond precision, so the returned order equals what the store keeps.
          order_date: Utc::now().trunc_subsecs(6),
          notes: guard.request.notes.clone(),
        };
        guard.order = Some(order);
      }
      Ok::<_, OrderError>(PipelineControl::Continue)
    }
  });

  // Step 3: the single durable write.
  p.on("persist_order", move |ctx: ContextData<CheckoutCtxData>| {
    let orders = Arc::clone(&orders);
    async move {
      let order = ctx
        .read()
        .order
        .clone()
        .ok_or_else(|| PipelineError::Internal("persist_order ran before assemble_order".to_string()))?;
      orders.insert(&order).await?;
      ctx.write().persisted = true;
      Ok::<_, OrderError>(PipelineControl::Continue)
    }
  });

  p
}
