//! REST API endpoints for logo search

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::state::AppState;
use crate::search::MatchResult;

/// Query parameters for the logo endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LogoQuery {
    /// Search text; missing is treated as empty
    #[serde(default)]
    pub q: String,
}

/// Error payload for failed searches
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/logos", get(search_logos))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        catalog: state.search.backend_name().to_string(),
    })
}

/// `GET /api/logos?q=<text>`: ranked matches, at most `max_results`
pub async fn search_logos(
    State(state): State<AppState>,
    Query(params): Query<LogoQuery>,
) -> Result<Json<Vec<MatchResult>>, (StatusCode, Json<ErrorBody>)> {
    let results = state.search.search(&params.q).await.map_err(|e| {
        tracing::error!("Logo search failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Database error".to_string(),
            }),
        )
    })?;

    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, CatalogError, CatalogMatch, CatalogStore, MemoryCatalog};
    use crate::config::SearchConfig;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct DownStore;

    #[async_trait]
    impl CatalogStore for DownStore {
        async fn find_similar(
            &self,
            _needle: &str,
            _limit: usize,
        ) -> Result<Vec<CatalogMatch>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".to_string()))
        }

        fn backend_name(&self) -> &'static str {
            "down"
        }
    }

    fn router_with(store: Arc<dyn CatalogStore>) -> Router {
        create_router(AppState::new(store, &SearchConfig::default()))
    }

    fn sample_router() -> Router {
        router_with(Arc::new(MemoryCatalog::new(vec![
            CatalogEntry::new("apple", "Apple"),
            CatalogEntry::new("appsmith", "Appsmith"),
            CatalogEntry::new("react", "React"),
        ])))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_search_ranked() {
        let (status, body) = get(sample_router(), "/api/logos?q=app").await;
        assert_eq!(status, StatusCode::OK);

        let results: Vec<MatchResult> = serde_json::from_value(body).unwrap();
        let slugs: Vec<&str> = results.iter().map(|r| r.logo_slug.as_str()).collect();
        assert_eq!(slugs, vec!["apple", "appsmith"]);
        assert!(results[0].match_score > results[1].match_score);
    }

    #[tokio::test]
    async fn test_short_query_returns_empty_array() {
        let (status, body) = get(router_with(Arc::new(DownStore)), "/api/logos?q=ap").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_missing_query_returns_empty_array() {
        let (status, body) = get(sample_router(), "/api/logos").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let (status, body) = get(router_with(Arc::new(DownStore)), "/api/logos?q=react").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn test_encoded_query() {
        let (status, body) = get(sample_router(), "/api/logos?q=%20REAC%20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["logo_name"], "React");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(sample_router(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog"], "memory");
    }
}
