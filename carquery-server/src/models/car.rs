//! Car record and the column allow-list
//!
//! Every identifier that reaches SQL text comes from [`CarColumn`];
//! user input only ever selects among these variants.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// Table queried by every car listing.
pub const CARS_TABLE: &str = "cars";

/// Full car row, used by the typed listing.
///
/// Text columns are nullable; NULL serializes as `null`, same as the
/// dynamic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub state: Option<String>,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub body_type: Option<String>,
}

/// Columns of the `cars` table, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarColumn {
    Id,
    Brand,
    Model,
    Year,
    State,
    Color,
    FuelType,
    BodyType,
}

impl CarColumn {
    /// Every column, in table order.
    pub const ALL: [CarColumn; 8] = [
        Self::Id,
        Self::Brand,
        Self::Model,
        Self::Year,
        Self::State,
        Self::Color,
        Self::FuelType,
        Self::BodyType,
    ];

    /// Columns that accept an equality filter (everything but the key).
    pub const FILTERABLE: [CarColumn; 7] = [
        Self::Brand,
        Self::Model,
        Self::Year,
        Self::State,
        Self::Color,
        Self::FuelType,
        Self::BodyType,
    ];

    /// SQL column name, also used as the JSON key and query parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Year => "year",
            Self::State => "state",
            Self::Color => "color",
            Self::FuelType => "fuel_type",
            Self::BodyType => "body_type",
        }
    }

    /// Exact, case-sensitive lookup by column name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|col| col.as_str() == name)
    }
}

impl fmt::Display for CarColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
