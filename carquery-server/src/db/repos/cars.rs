//! Car repository
//!
//! Two read paths over the same query builder:
//! - list: typed scan into [`Car`], all columns
//! - list_dynamic: generic scan of the selected columns into JSON objects

use serde_json::{Map, Value};
use sqlx::PgPool;

use crate::db::decode::row_to_map;
use crate::models::{Car, CarQuery};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Query could not be executed
    #[error("failed to fetch cars: {0}")]
    Fetch(#[source] sqlx::Error),

    /// A row could not be decoded
    #[error("failed to scan car: {0}")]
    Scan(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => Self::Scan(e),
            _ => Self::Fetch(e),
        }
    }
}

/// Car repository
pub struct CarRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CarRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List cars as typed records.
    ///
    /// The field selection of `query` is ignored; every column is read.
    pub async fn list(&self, query: &CarQuery) -> Result<Vec<Car>, DbError> {
        let query = query.clone().with_all_columns();
        let mut builder = query.build();
        let cars = builder
            .build_query_as::<Car>()
            .fetch_all(self.pool)
            .await?;

        tracing::debug!(count = cars.len(), "fetched cars");
        Ok(cars)
    }

    /// List cars as JSON objects holding only the selected columns.
    pub async fn list_dynamic(&self, query: &CarQuery) -> Result<Vec<Map<String, Value>>, DbError> {
        let mut builder = query.build();
        let rows = builder
            .build()
            .fetch_all(self.pool)
            .await
            .map_err(DbError::Fetch)?;

        let cars = rows
            .iter()
            .map(|row| row_to_map(row, &query.columns).map_err(DbError::Scan))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = cars.len(), "fetched cars");
        Ok(cars)
    }
}
