// storefront_server/src/services/payment_mock.rs
use async_trait::async_trait;
use storefront::{PaymentError, PaymentGateway, PaymentIntent, PaymentIntentRequest};
use tracing::{info, instrument};
use uuid::Uuid;

/// Local stand-in for the payment provider. Used when no gateway credentials are
/// configured and in tests.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
  key_id: String,
}

impl MockPaymentGateway {
  pub fn new(key_id: impl Into<String>) -> Self {
    Self { key_id: key_id.into() }
  }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
  fn key_id(&self) -> &str {
    &self.key_id
  }

  #[instrument(name = "MockPaymentGateway::create_intent", skip_all, fields(amount = request.amount, currency = %request.currency, receipt = %request.receipt))]
  async fn create_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent, PaymentError> {
    if request.amount <= 0 {
      return Err(PaymentError::InvalidAmount);
    }
    tokio::time::sleep(std::time::Duration::from_millis(5)).await; // Simulate network latency

    let intent = PaymentIntent {
      id: format!("order_mock_{}", Uuid::new_v4().simple()),
      amount: request.amount,
      currency: request.currency,
      receipt: request.receipt,
      status: "created".to_string(),
    };
    info!("Simulated payment order {}", intent.id);
    Ok(intent)
  }
}
