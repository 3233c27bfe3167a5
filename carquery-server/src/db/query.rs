//! SELECT builder for car listings
//!
//! Identifiers come from [`CarColumn`]; every user-supplied value is bound.
//! Generated shape:
//!
//! ```text
//! SELECT <cols> FROM cars [WHERE c1 = $1 AND ...] ORDER BY <col> <dir>[, id ASC] LIMIT $n OFFSET $m
//! ```
//!
//! Sorting on a non-key column appends `id` so pages are stable.

use sqlx::{Postgres, QueryBuilder};

use crate::models::{CarColumn, CarQuery, CARS_TABLE};

impl CarQuery {
    /// Build the parameterized listing query for `self.columns`.
    pub fn build(&self) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new("SELECT ");
        push_columns(&mut builder, &self.columns);
        builder.push(" FROM ");
        builder.push(CARS_TABLE);

        for (i, filter) in self.filters.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(filter.column.as_str());
            builder.push(" = ");
            builder.push_bind(filter.value.as_str());
        }

        builder.push(" ORDER BY ");
        builder.push(self.sort.column.as_str());
        builder.push(" ");
        builder.push(self.sort.direction.as_sql());
        if self.sort.column != CarColumn::Id {
            builder.push(", ");
            builder.push(CarColumn::Id.as_str());
            builder.push(" ASC");
        }

        builder.push(" LIMIT ");
        builder.push_bind(to_sql_int(self.page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_sql_int(self.page.offset));

        let sql = builder.sql();
        tracing::debug!(sql, args = ?self.bound_args(), "built car listing query");

        builder
    }

    /// Bound values in placeholder order, for logging and debugging.
    pub fn bound_args(&self) -> Vec<String> {
        self.filters
            .iter()
            .map(|f| f.value.clone())
            .chain([self.page.limit.to_string(), self.page.offset.to_string()])
            .collect()
    }
}

fn push_columns(builder: &mut QueryBuilder<'_, Postgres>, columns: &[CarColumn]) {
    let mut separated = builder.separated(", ");
    for col in columns {
        separated.push(col.as_str());
    }
}

/// Postgres has no unsigned BIGINT; saturate at i64::MAX.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
