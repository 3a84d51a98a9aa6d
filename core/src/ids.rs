// storefront/src/ids.rs

//! Identifier generation for orders and payment receipts.

use uuid::Uuid;

/// Produces identifiers that are unique across concurrent callers and processes.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Random v4 UUIDs behind a fixed prefix, e.g. `ord_5f0c…`.
///
/// 122 random bits per id; no shared counter, so concurrent callers never contend.
#[derive(Debug, Clone)]
pub struct PrefixedUuidIds {
  prefix: &'static str,
}

impl PrefixedUuidIds {
  pub const fn new(prefix: &'static str) -> Self {
    Self { prefix }
  }

  pub const fn orders() -> Self {
    Self::new("ord_")
  }

  pub const fn receipts() -> Self {
    Self::new("rcpt_")
  }
}

impl IdGenerator for PrefixedUuidIds {
  fn next_id(&self) -> String {
    format!("{}{}", self.prefix, Uuid::new_v4().simple())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn ids_carry_prefix_and_do_not_repeat() {
    let ids = PrefixedUuidIds::orders();
    let generated: HashSet<String> = (0..1_000).map(|_| ids.next_id()).collect();
    assert_eq!(generated.len(), 1_000);
    assert!(generated.iter().all(|id| id.starts_with("ord_") && id.len() == 4 + 32));
  }
}
