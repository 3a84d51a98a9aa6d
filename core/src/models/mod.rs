// storefront/src/models/mod.rs

//! Catalog, cart and order records.

pub mod cart;
pub mod order;
pub mod product;

pub use cart::{CartItem, CreateOrderRequest, CustomerInfo};
pub use order::{Order, OrderStatus};
pub use product::Product;
