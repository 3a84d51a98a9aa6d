// storefront_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result as AppResult};
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> AppResult<HttpResponse> {
  let products = app_state.catalog.list_products().await.map_err(AppError::catalog)?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
  let product_id = path.into_inner();

  match app_state.catalog.get_product(&product_id).await {
    Ok(Some(product)) => Ok(HttpResponse::Ok().json(product)),
    Ok(None) => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
    // Lookup failures surface as 404, same as a miss.
    Err(e) => {
      warn!(error = %e, "Product lookup failed for {}.", product_id);
      Err(AppError::NotFound("Product not found".to_string()))
    }
  }
}

#[instrument(name = "handler::products_by_category", skip(app_state, path), fields(category = %path.as_ref()))]
pub async fn products_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> AppResult<HttpResponse> {
  let category = path.into_inner();
  let products = app_state
    .catalog
    .products_by_category(&category)
    .await
    .map_err(AppError::catalog)?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::categories", skip(app_state))]
pub async fn categories_handler(app_state: web::Data<AppState>) -> AppResult<HttpResponse> {
  let categories = app_state.catalog.categories().await.map_err(|e| AppError::Catalog {
    message: "Error fetching categories",
    source: e,
  })?;
  Ok(HttpResponse::Ok().json(categories))
}
