//! Database layer - connection pool, schema bootstrap, and repositories
//!
//! # Design Principles
//!
//! - Connection pool injected into handlers - no process-wide globals
//! - Every statement is parameterized; dynamic identifiers come from
//!   fixed allow-lists only
//! - Rely on DB constraints, surface violations as errors

pub mod admin;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
