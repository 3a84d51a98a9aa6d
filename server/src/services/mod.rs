// storefront_server/src/services/mod.rs

//! Payment gateway adapters.

pub mod payment_mock;
pub mod razorpay;

pub use payment_mock::MockPaymentGateway;
pub use razorpay::RazorpayGateway;

use crate::config::AppConfig;
use std::sync::Arc;
use storefront::PaymentGateway;

/// Razorpay when credentials are configured, the mock gateway otherwise.
pub fn payment_gateway(config: &AppConfig) -> Arc<dyn PaymentGateway> {
  match &config.razorpay {
    Some(credentials) => {
      tracing::info!(key_id = %credentials.key_id, "Using Razorpay payment gateway.");
      Arc::new(RazorpayGateway::new(credentials.clone()))
    }
    None => {
      tracing::warn!("Razorpay credentials not set; using mock payment gateway.");
      Arc::new(MockPaymentGateway::new(config.mock_payment_key_id.clone()))
    }
  }
}
