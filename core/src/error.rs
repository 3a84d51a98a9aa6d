// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure reported by a repository implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record with id '{id}' already exists")]
    Duplicate { id: String },

    #[error("Storage backend failure: {source}")]
    Backend {
        #[source]
        source: AnyhowError,
    },
}

impl StoreError {
    /// Wraps any backend error (driver, pool, decoding) as `StoreError::Backend`.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend {
            source: AnyhowError::new(err),
        }
    }
}

/// Errors raised by the step runner itself rather than by step handlers.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Handler missing for non-optional step: {step_name}")]
    HandlerMissing { step_name: String },

    #[error("Pipeline '{pipeline}' stopped before producing a result")]
    Incomplete { pipeline: String },

    #[error("Internal pipeline error: {0}")]
    Internal(String),
}

/// Outcome taxonomy of the order engine.
///
/// Malformed input never reaches the engine; it is rejected at the HTTP boundary.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("product {product_id} not found")]
    ProductNotFound { product_id: String },

    #[error("product {name} is out of stock")]
    ProductOutOfStock { product_id: String, name: String },

    #[error("order {order_id} not found")]
    OrderNotFound { order_id: String },

    #[error("persistence failure: {source}")]
    Persistence {
        #[from]
        source: StoreError,
    },

    #[error("checkout workflow error: {source}")]
    Workflow {
        #[from]
        source: PipelineError,
    },
}

impl OrderError {
    /// True for well-formed requests rejected by catalog rules.
    pub fn is_business_rejection(&self) -> bool {
        matches!(
            self,
            OrderError::ProductNotFound { .. } | OrderError::ProductOutOfStock { .. } | OrderError::OrderNotFound { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error(transparent)]
    Pricing(#[from] OrderError),

    #[error("Payment amount must be greater than zero")]
    InvalidAmount,

    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

pub type OrderResult<T, E = OrderError> = std::result::Result<T, E>;
