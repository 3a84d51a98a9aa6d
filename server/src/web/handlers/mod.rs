// storefront_server/src/web/handlers/mod.rs

pub mod order_handlers;
pub mod payment_handlers;
pub mod product_handlers;
