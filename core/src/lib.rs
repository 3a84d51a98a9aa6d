// storefront/src/lib.rs

//! Storefront: order validation, pricing and persistence contracts for a retail
//! shop backend.
//!
//!  - [`OrderService`] turns an untrusted checkout request into a priced, persisted
//!    [`Order`] or a typed [`OrderError`], with no partial writes.
//!  - [`ProductRepository`] and [`OrderRepository`] are the storage contracts it is
//!    built on; in-memory implementations ship in [`repository::memory`].
//!  - [`CatalogService`] and [`PaymentService`] are thin wrappers over the catalog
//!    and an external [`PaymentGateway`].
//!  - [`pipeline`] is the named-step runner checkout is expressed in.

pub mod error;
pub mod ids;
pub mod models;
pub mod pipeline;
pub mod pricing;
pub mod repository;
pub mod services;

pub use crate::error::{OrderError, OrderResult, PaymentError, PipelineError, StoreError};
pub use crate::ids::{IdGenerator, PrefixedUuidIds};
pub use crate::models::{CartItem, CreateOrderRequest, CustomerInfo, Order, OrderStatus, Product};
pub use crate::pipeline::{ContextData, Pipeline, PipelineControl, PipelineResult};
pub use crate::repository::{InMemoryOrderRepository, InMemoryProductRepository, OrderRepository, ProductRepository};
pub use crate::services::{
  CatalogService, CreatePaymentOrderRequest, OrderService, PaymentGateway, PaymentIntent, PaymentIntentRequest,
  PaymentOrder, PaymentService,
};
