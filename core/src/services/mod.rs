// storefront/src/services/mod.rs

pub mod catalog;
pub mod orders;
pub mod payments;

pub use catalog::{default_catalog, CatalogService};
pub use orders::{CheckoutCtxData, OrderService, CHECKOUT_STEPS};
pub use payments::{
  CreatePaymentOrderRequest, PaymentGateway, PaymentIntent, PaymentIntentRequest, PaymentOrder, PaymentService,
};
