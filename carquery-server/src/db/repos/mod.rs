//! Repository implementations for database access
//!
//! Read-only: the service never writes to the cars table.

pub mod cars;

pub use cars::{CarRepo, DbError};
