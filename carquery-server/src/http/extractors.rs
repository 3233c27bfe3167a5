//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::models::{ListParams, ValidationError};
use super::error::ApiError;

/// Listing parameters from the query string.
///
/// Keys may repeat; the first occurrence wins, matching
/// [`ListParams::from_pairs`]. Rejections are JSON like every other error.
pub struct ListQuery(pub ListParams);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::MalformedQuery {
                    reason: e.body_text(),
                })
            })?;

        Ok(Self(ListParams::from_pairs(pairs)))
    }
}
