// storefront_server/src/db/orders.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use storefront::{CartItem, CustomerInfo, Order, OrderRepository, OrderStatus, StoreError};
use tracing::{error, instrument};

#[derive(Debug, FromRow)]
struct OrderRow {
  id: String,
  customer_info: Json<CustomerInfo>,
  items: Json<Vec<CartItem>>,
  total_amount: Decimal,
  status: String,
  order_date: DateTime<Utc>,
  notes: String,
}

impl From<OrderRow> for Order {
  fn from(row: OrderRow) -> Self {
    Order {
      id: row.id,
      customer_info: row.customer_info.0,
      items: row.items.0,
      total_amount: row.total_amount,
      status: OrderStatus::from(row.status),
      order_date: row.order_date,
      notes: row.notes,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PgOrderRepository {
  pool: PgPool,
}

impl PgOrderRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
  #[instrument(name = "db::orders::insert", skip_all, fields(order_id = %order.id))]
  async fn insert(&self, order: &Order) -> Result<(), StoreError> {
    sqlx::query(
      "INSERT INTO orders (id, customer_info, items, total_amount, status, order_date, notes) \
       VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&order.id)
    .bind(Json(&order.customer_info))
    .bind(Json(&order.items))
    .bind(order.total_amount)
    .bind(order.status.as_str())
    .bind(order.order_date)
    .bind(&order.notes)
    .execute(&self.pool)
    .await
    .map_err(|e| match e {
      sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate { id: order.id.clone() },
      other => {
        error!("Failed to insert order {}: {}", order.id, other);
        StoreError::backend(other)
      }
    })?;
    Ok(())
  }

  #[instrument(name = "db::orders::find_by_id", skip(self))]
  async fn find_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
    let row: Option<OrderRow> = sqlx::query_as(
      "SELECT id, customer_info, items, total_amount, status, order_date, notes FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      error!("Database error while fetching order {}: {}", id, e);
      StoreError::backend(e)
    })?;
    Ok(row.map(Order::from))
  }
}
