// storefront_server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::{OrderError, PaymentError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Request body or path could not be decoded. Never reaches the order engine.
  #[error("Malformed request: {0}")]
  MalformedRequest(String),

  #[error("{0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),

  #[error(transparent)]
  Order(#[from] OrderError),

  #[error(transparent)]
  Payment(#[from] PaymentError),

  /// Catalog read failure; the detail is logged, not returned.
  #[error("{message}")]
  Catalog {
    message: &'static str,
    #[source]
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn catalog(source: StoreError) -> Self {
    AppError::Catalog {
      message: "Error fetching products",
      source,
    }
  }

  /// Well-formed request refused by catalog rules, as opposed to a fault.
  pub fn is_business_rejection(&self) -> bool {
    match self {
      AppError::Order(e) | AppError::Payment(PaymentError::Pricing(e)) => e.is_business_rejection(),
      _ => false,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Order(OrderError::OrderNotFound { .. }) => StatusCode::NOT_FOUND,
      AppError::Payment(PaymentError::InvalidAmount) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() && !self.is_business_rejection() {
      tracing::error!(application_error = %self, error_debug = ?self, "Responding with error");
    } else {
      // Rejections keep the legacy 500 status but are not server faults.
      tracing::warn!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::Order(OrderError::OrderNotFound { .. }) => json!({"error": "Order not found"}),
      AppError::Sqlx(_) | AppError::Migrate(_) => json!({"error": "Database operation failed"}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Catalog { message, .. } => json!({"error": message}),
      AppError::Internal(m) => json!({"error": "An internal error occurred", "detail": m}),
      other => json!({"error": other.to_string()}),
    };
    HttpResponse::build(status).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn catalog_rejections_keep_500_but_are_not_faults() {
    let err = AppError::from(OrderError::ProductOutOfStock {
      product_id: "p1".to_string(),
      name: "Cardamom Tea".to_string(),
    });
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.is_business_rejection());

    let priced = AppError::from(PaymentError::Pricing(OrderError::ProductNotFound {
      product_id: "ghost".to_string(),
    }));
    assert!(priced.is_business_rejection());
  }

  #[test]
  fn store_failures_are_faults() {
    let err = AppError::from(OrderError::from(StoreError::Duplicate { id: "ord_1".to_string() }));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!err.is_business_rejection());
  }

  #[test]
  fn missing_order_is_404() {
    let err = AppError::from(OrderError::OrderNotFound {
      order_id: "x".to_string(),
    });
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
  }
}
