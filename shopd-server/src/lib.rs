//! shopd-server: HTTP server for the users resource
//!
//! Exposes CRUD over `users` via HTTP and bootstraps the wider
//! store schema (products, orders, payments, shipping) at startup.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{run_server, ServerConfig};
