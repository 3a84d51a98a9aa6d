// storefront_server/src/db/products.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeSet;
use storefront::{Product, ProductRepository, StoreError};
use tracing::{error, instrument};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, image_url, in_stock, weight";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: String,
  name: String,
  description: String,
  price: Decimal,
  category: String,
  image_url: String,
  in_stock: bool,
  weight: String,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      category: row.category,
      image_url: row.image_url,
      in_stock: row.in_stock,
      weight: row.weight,
    }
  }
}

fn backend(e: sqlx::Error) -> StoreError {
  error!("Catalog query failed: {}", e);
  StoreError::backend(e)
}

#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "db::products::find_by_id", skip(self))]
  async fn find_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(backend)?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "db::products::find_by_category", skip(self))]
  async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!(
      "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = $1 ORDER BY created_at, id"
    ))
    .bind(category)
    .fetch_all(&self.pool)
    .await
    .map_err(backend)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "db::products::list_all", skip(self))]
  async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id"))
      .fetch_all(&self.pool)
      .await
      .map_err(backend)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "db::products::distinct_categories", skip(self))]
  async fn distinct_categories(&self) -> Result<BTreeSet<String>, StoreError> {
    let categories: Vec<String> = sqlx::query_scalar("SELECT DISTINCT category FROM products")
      .fetch_all(&self.pool)
      .await
      .map_err(backend)?;
    Ok(categories.into_iter().collect())
  }

  /// Checks and inserts inside one transaction holding a table lock, so two
  /// instances starting together cannot both seed.
  #[instrument(name = "db::products::seed_if_empty", skip_all, fields(count = products.len()))]
  async fn seed_if_empty(&self, products: &[Product]) -> Result<bool, StoreError> {
    let mut tx = self.pool.begin().await.map_err(backend)?;

    sqlx::query("LOCK TABLE products IN SHARE ROW EXCLUSIVE MODE")
      .execute(&mut *tx)
      .await
      .map_err(backend)?;
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&mut *tx)
      .await
      .map_err(backend)?;
    if existing > 0 {
      tx.rollback().await.map_err(backend)?;
      return Ok(false);
    }

    for product in products {
      sqlx::query(
        "INSERT INTO products (id, name, description, price, category, image_url, in_stock, weight) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
      )
      .bind(&product.id)
      .bind(&product.name)
      .bind(&product.description)
      .bind(product.price)
      .bind(&product.category)
      .bind(&product.image_url)
      .bind(product.in_stock)
      .bind(&product.weight)
      .execute(&mut *tx)
      .await
      .map_err(backend)?;
    }

    tx.commit().await.map_err(backend)?;
    Ok(true)
  }
}
