// storefront_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

/// Origins allowed when `ALLOWED_ORIGINS` is not set: the local dev servers.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
  "http://localhost:5173",
  "http://localhost:3000",
  "http://127.0.0.1:5173",
  "http://127.0.0.1:3000",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RazorpayCredentials {
  pub key_id: String,
  pub key_secret: String,
}

// Never print the secret.
impl std::fmt::Debug for RazorpayCredentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RazorpayCredentials")
      .field("key_id", &self.key_id)
      .field("key_secret", &"[REDACTED]")
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,
  pub allowed_origins: Vec<String>,
  pub seed_db: bool,
  pub payment_currency: String,
  /// `None` runs the mock gateway.
  pub razorpay: Option<RazorpayCredentials>,
  pub mock_payment_key_id: String,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source. Unset and empty
  /// variables are treated alike.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server_host = get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let server_port = get("SERVER_PORT")
      .or_else(|| get("PORT"))
      .unwrap_or_else(|| "8001".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get("DATABASE_URL")
      .ok_or_else(|| AppError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;
    let database_max_connections = get("DATABASE_MAX_CONNECTIONS")
      .unwrap_or_else(|| "10".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;

    let allowed_origins = match get("ALLOWED_ORIGINS") {
      Some(raw) => raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect(),
      None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
    };

    let seed_db = get("SEED_DB")
      .unwrap_or_else(|| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let payment_currency = get("PAYMENT_CURRENCY").unwrap_or_else(|| "INR".to_string());

    let razorpay = match (get("RAZORPAY_KEY_ID"), get("RAZORPAY_KEY_SECRET")) {
      (Some(key_id), Some(key_secret)) => Some(RazorpayCredentials { key_id, key_secret }),
      (None, None) => None,
      _ => {
        return Err(AppError::Config(
          "RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must be set together".to_string(),
        ))
      }
    };
    let mock_payment_key_id = get("MOCK_PAYMENT_KEY_ID").unwrap_or_else(|| "mock_key_id".to_string());

    let log_format = match get("LOG_FORMAT").as_deref() {
      None | Some("text") => LogFormat::Text,
      Some("json") => LogFormat::Json,
      Some(other) => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected text or json", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      allowed_origins,
      seed_db,
      payment_currency,
      razorpay,
      mock_payment_key_id,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_only_database_url_is_set() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://localhost/shop")]).unwrap();
    assert_eq!(cfg.bind_address(), "0.0.0.0:8001");
    assert_eq!(cfg.allowed_origins.len(), DEFAULT_ALLOWED_ORIGINS.len());
    assert!(cfg.seed_db);
    assert_eq!(cfg.payment_currency, "INR");
    assert!(cfg.razorpay.is_none());
    assert_eq!(cfg.log_format, LogFormat::Text);
  }

  #[test]
  fn missing_database_url_is_a_config_error() {
    assert!(matches!(config_from(&[]), Err(AppError::Config(_))));
  }

  #[test]
  fn allowed_origins_are_split_and_trimmed() {
    let cfg = config_from(&[
      ("DATABASE_URL", "postgres://localhost/shop"),
      ("ALLOWED_ORIGINS", " https://shop.example , https://admin.example,,"),
      ("PORT", "9000"),
    ])
    .unwrap();
    assert_eq!(cfg.allowed_origins, vec!["https://shop.example", "https://admin.example"]);
    assert_eq!(cfg.server_port, 9000);
  }

  #[test]
  fn half_configured_razorpay_is_rejected() {
    let result = config_from(&[("DATABASE_URL", "postgres://localhost/shop"), ("RAZORPAY_KEY_ID", "rzp_live")]);
    assert!(matches!(result, Err(AppError::Config(_))));
  }

  #[test]
  fn razorpay_secret_is_redacted_in_debug_output() {
    let cfg = config_from(&[
      ("DATABASE_URL", "postgres://localhost/shop"),
      ("RAZORPAY_KEY_ID", "rzp_test_1"),
      ("RAZORPAY_KEY_SECRET", "hunter2"),
    ])
    .unwrap();
    let printed = format!("{:?}", cfg);
    assert!(printed.contains("rzp_test_1"));
    assert!(!printed.contains("hunter2"));
  }
}
