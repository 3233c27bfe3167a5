//! Database layer - connection pool, query building, row decoding, repositories
//!
//! # Design Principles
//!
//! - Connection pool with a small fixed limit
//! - Identifiers from an allow-list, values always bound
//! - One query per request, no transactions

pub mod decode;
pub mod pool;
pub mod query;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
