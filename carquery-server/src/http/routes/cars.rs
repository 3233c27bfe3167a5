//! Car listing endpoints
//!
//! Both endpoints accept the same query string:
//! `fields`, `limit`, `page`, `sort` and one equality filter per column.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{Map, Value};

use crate::db::repos::CarRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ListQuery;
use crate::http::server::AppState;
use crate::models::{Car, CarQuery};

/// GET /cars - typed listing, always every column (`fields` is ignored)
async fn list_cars(
    State(state): State<Arc<AppState>>,
    ListQuery(params): ListQuery,
) -> Result<Json<Vec<Car>>, ApiError> {
    let query = CarQuery::typed_from_params(&params)?;
    let cars = CarRepo::new(&state.pool).list(&query).await?;
    Ok(Json(cars))
}

/// GET /query-builder - dynamic listing of the requested fields
async fn query_cars(
    State(state): State<Arc<AppState>>,
    ListQuery(params): ListQuery,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let query = CarQuery::from_params(&params)?;
    let cars = CarRepo::new(&state.pool).list_dynamic(&query).await?;
    Ok(Json(cars))
}

/// Car routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/query-builder", get(query_cars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::DbSettings;
    use crate::db::create_lazy_pool;

    fn app() -> Router {
        let pool = create_lazy_pool(&DbSettings::default()).expect("lazy pool");
        router().with_state(Arc::new(AppState { pool }))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn unknown_fields_rejected_before_query() {
        let (status, body) = get_json(app(), "/query-builder?fields=price,owner").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn unknown_sort_rejected_on_both_routes() {
        let (status, _) = get_json(app(), "/cars?sort=price").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json(app(), "/query-builder?sort=-owner").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid sort value: '-owner'");
    }

    #[tokio::test]
    async fn repeated_keys_use_first_value_and_json_errors() {
        let (status, body) = get_json(app(), "/query-builder?sort=price&sort=id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "invalid sort value: 'price'");

        let (status, body) = get_json(app(), "/cars?limit=5&limit=6&sort=nope&sort=id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid sort value: 'nope'");
    }

    #[tokio::test]
    async fn typed_route_does_not_validate_fields() {
        // The only rejection comes from sort; unknown fields are not an error here
        let (status, body) = get_json(app(), "/cars?fields=price&sort=owner").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid sort value: 'owner'");

        let (status, body) = get_json(app(), "/query-builder?fields=price&sort=owner").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "fields 'price' does not name any known column");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p carquery-server -- --ignored

    async fn live_app() -> Router {
        let settings = DbSettings {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..Default::default()
        };
        let pool = crate::db::create_pool(&settings)
            .await
            .expect("pool creation failed");
        router().with_state(Arc::new(AppState { pool }))
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn query_builder_returns_selected_fields() {
        let (status, body) = get_json(live_app().await, "/query-builder?fields=id,brand&limit=2").await;
        assert_eq!(status, StatusCode::OK);

        let rows = body.as_array().expect("array body");
        assert!(rows.len() <= 2);
        for row in rows {
            let obj = row.as_object().unwrap();
            assert_eq!(obj.len(), 2);
            assert!(obj["id"].is_number());
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn query_builder_keeps_field_order() {
        let (status, body) = get_json(live_app().await, "/query-builder?fields=year,id&limit=1").await;
        assert_eq!(status, StatusCode::OK);

        if let Some(row) = body.as_array().and_then(|rows| rows.first()) {
            let keys: Vec<&str> = row.as_object().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys, ["year", "id"]);
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn cars_returns_full_records() {
        let (status, body) = get_json(live_app().await, "/cars?fields=price&limit=1").await;
        assert_eq!(status, StatusCode::OK);

        if let Some(row) = body.as_array().and_then(|rows| rows.first()) {
            assert_eq!(row.as_object().unwrap().len(), 8);
        }
    }
}
