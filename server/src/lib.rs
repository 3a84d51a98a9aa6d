// storefront_server/src/lib.rs

//! HTTP gateway for the storefront: actix-web routes over the order engine,
//! Postgres repositories, and payment gateway adapters.

pub mod config;
pub mod db;
pub mod errors;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;
