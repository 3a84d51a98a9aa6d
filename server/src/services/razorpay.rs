// storefront_server/src/services/razorpay.rs

//! Razorpay Orders API client. Only order creation is used; capture happens
//! between the shopper's browser and Razorpay.

use crate::config::RazorpayCredentials;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront::{PaymentError, PaymentGateway, PaymentIntent, PaymentIntentRequest};
use tracing::{error, instrument};

const RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
  amount: i64,
  currency: &'a str,
  receipt: &'a str,
}

#[derive(Debug, Deserialize)]
struct RazorpayOrder {
  id: String,
  amount: i64,
  currency: String,
  #[serde(default)]
  receipt: Option<String>,
  status: String,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
  error: RazorpayErrorBody,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
  #[serde(default)]
  code: String,
  #[serde(default)]
  description: String,
}

#[derive(Debug, Clone)]
pub struct RazorpayGateway {
  http: reqwest::Client,
  credentials: RazorpayCredentials,
  base_url: String,
}

impl RazorpayGateway {
  pub fn new(credentials: RazorpayCredentials) -> Self {
    Self::with_base_url(credentials, RAZORPAY_API_BASE)
  }

  pub fn with_base_url(credentials: RazorpayCredentials, base_url: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      credentials,
      base_url: base_url.into(),
    }
  }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
  fn key_id(&self) -> &str {
    &self.credentials.key_id
  }

  #[instrument(name = "RazorpayGateway::create_intent", skip_all, fields(amount = request.amount, receipt = %request.receipt))]
  async fn create_intent(&self, request: PaymentIntentRequest) -> Result<PaymentIntent, PaymentError> {
    let response = self
      .http
      .post(format!("{}/orders", self.base_url))
      .basic_auth(&self.credentials.key_id, Some(&self.credentials.key_secret))
      .json(&CreateOrderBody {
        amount: request.amount,
        currency: &request.currency,
        receipt: &request.receipt,
      })
      .send()
      .await
      .map_err(|e| {
        error!("Razorpay request failed: {}", e);
        PaymentError::Gateway(format!("request failed: {}", e))
      })?;

    let status = response.status();
    if !status.is_success() {
      let detail = match response.json::<RazorpayErrorEnvelope>().await {
        Ok(envelope) => format!("{}: {}", envelope.error.code, envelope.error.description),
        Err(_) => status.to_string(),
      };
      error!(http_status = %status, "Razorpay rejected order creation: {}", detail);
      return Err(PaymentError::Gateway(detail));
    }

    let order: RazorpayOrder = response
      .json()
      .await
      .map_err(|e| PaymentError::Gateway(format!("unreadable response: {}", e)))?;

    Ok(PaymentIntent {
      id: order.id,
      amount: order.amount,
      currency: order.currency,
      receipt: order.receipt.unwrap_or(request.receipt),
      status: order.status,
    })
  }
}
