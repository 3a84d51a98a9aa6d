// storefront/src/services/catalog.rs

use crate::error::StoreError;
use crate::models::Product;
use crate::repository::ProductRepository;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument};

/// Read-side pass-through to the Catalog Store, plus first-run seeding.
#[derive(Clone)]
pub struct CatalogService {
  products: Arc<dyn ProductRepository>,
}

impl CatalogService {
  pub fn new(products: Arc<dyn ProductRepository>) -> Self {
    Self { products }
  }

  #[instrument(name = "CatalogService::list_products", skip(self))]
  pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
    self.products.list_all().await
  }

  #[instrument(name = "CatalogService::get_product", skip(self))]
  pub async fn get_product(&self, product_id: &str) -> Result<Option<Product>, StoreError> {
    self.products.find_by_id(product_id).await
  }

  #[instrument(name = "CatalogService::products_by_category", skip(self))]
  pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
    self.products.find_by_category(category).await
  }

  /// Distinct category names, sorted.
  #[instrument(name = "CatalogService::categories", skip(self))]
  pub async fn categories(&self) -> Result<Vec<String>, StoreError> {
    Ok(self.products.distinct_categories().await?.into_iter().collect())
  }

  /// Loads [`default_catalog`] when the store holds no products yet.
  #[instrument(name = "CatalogService::seed_defaults", skip(self))]
  pub async fn seed_defaults(&self) -> Result<bool, StoreError> {
    let catalog = default_catalog();
    let seeded = self.products.seed_if_empty(&catalog).await?;
    if seeded {
      info!(count = catalog.len(), "Seeded empty catalog with default products.");
    } else {
      info!("Catalog already populated, seeding skipped.");
    }
    Ok(seeded)
  }
}

impl std::fmt::Debug for CatalogService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CatalogService").finish_non_exhaustive()
  }
}

fn seed_product(
  id: &str,
  name: &str,
  description: &str,
  price: i64,
  category: &str,
  image_url: &str,
  weight: &str,
) -> Product {
  Product {
    id: id.to_string(),
    name: name.to_string(),
    description: description.to_string(),
    price: Decimal::from(price),
    category: category.to_string(),
    image_url: image_url.to_string(),
    in_stock: true,
    weight: weight.to_string(),
  }
}

/// The shop's starter catalog.
pub fn default_catalog() -> Vec<Product> {
  vec![
    seed_product(
      "a1b2c3d4-e5f6-7890-1234-567890abcdef",
      "Premium Assam Black Tea",
      "Rich, malty Assam tea with robust flavor. Perfect for morning tea with milk and sugar. Sourced from the finest tea gardens of Assam.",
      299,
      "Black Tea",
      "https://images.unsplash.com/photo-1563822249366-3efb23b8e0c9",
      "100g",
    ),
    seed_product(
      "b2c3d4e5-f6a7-8901-2345-67890abcdef0",
      "Darjeeling Muscatel",
      "Delicate and aromatic Darjeeling tea with a distinctive muscatel flavor. Known as the 'Champagne of Teas'.",
      450,
      "Black Tea",
      "https://images.pexels.com/photos/1793034/pexels-photo-1793034.jpeg",
      "100g",
    ),
    seed_product(
      "c3d4e5f6-a7b8-9012-3456-7890abcdef01",
      "Traditional Masala Chai",
      "Our signature blend of black tea with cardamom, cinnamon, cloves, and ginger. A 60-year-old family recipe.",
      199,
      "Masala Chai",
      "https://images.pexels.com/photos/5947062/pexels-photo-5947062.jpeg",
      "200g",
    ),
    seed_product(
      "d4e5f6a7-b8c9-0123-4567-890abcdef012",
      "Royal Jaipur Blend",
      "A premium blend inspired by royal traditions of Jaipur. Mix of fine Assam tea with aromatic spices.",
      399,
      "Special Blends",
      "https://images.unsplash.com/photo-1625033405953-f20401c7d848",
      "150g",
    ),
    seed_product(
      "e5f6a7b8-c9d0-1234-5678-90abcdef0123",
      "Green Tea Classic",
      "Pure green tea leaves with natural antioxidants. Light, refreshing taste perfect for health-conscious tea lovers.",
      349,
      "Green Tea",
      "https://images.unsplash.com/photo-1521136492500-e18f107709f7",
      "100g",
    ),
    seed_product(
      "f6a7b8c9-d0e1-2345-6789-0abcdef01234",
      "Cardamom Tea",
      "Aromatic tea infused with premium green cardamom. A classic favorite for its warming and soothing properties.",
      259,
      "Flavored Tea",
      "https://images.pexels.com/photos/3904035/pexels-photo-3904035.jpeg",
      "100g",
    ),
  ]
}
