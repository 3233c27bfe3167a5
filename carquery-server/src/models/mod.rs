//! Domain models with validation at construction
//!
//! Query-string input is validated into a [`CarQuery`] before any SQL is built.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod car;
pub mod params;

pub use validation::ValidationError;
pub use car::{Car, CarColumn, CARS_TABLE};
pub use params::{CarQuery, Direction, Filter, ListParams, Pagination, SortOrder};
