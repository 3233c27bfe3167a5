//! carquery-server: filtered, paginated listing of the `cars` table
//!
//! Request path: query string → [`models::CarQuery`] → parameterized
//! SELECT → typed or dynamic row decoding → JSON.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DbSettings;
pub use http::{run_server, ServerConfig};
pub use models::{Car, CarColumn, CarQuery, ListParams};
