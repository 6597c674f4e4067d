//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness check endpoint (checks database connectivity)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.services.catalog.ping().await?;
    Ok(Json(HealthResponse::new("ready")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        error::AppError,
        repository::{MockBookRepository, MockLoanRepository},
        services::Services,
        AppState,
    };

    async fn ready_status(books: MockBookRepository) -> StatusCode {
        let app = crate::api::create_router(AppState {
            services: Arc::new(Services::new(
                Arc::new(books),
                Arc::new(MockLoanRepository::new()),
            )),
        });

        app.oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let mut books = MockBookRepository::new();
        books.expect_ping().returning(|| Ok(()));
        assert_eq!(ready_status(books).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_when_database_down() {
        let mut books = MockBookRepository::new();
        books
            .expect_ping()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
        assert_eq!(ready_status(books).await, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_does_not_touch_database() {
        let mut books = MockBookRepository::new();
        books.expect_ping().never();

        let app = crate::api::create_router(AppState {
            services: Arc::new(Services::new(
                Arc::new(books),
                Arc::new(MockLoanRepository::new()),
            )),
        });
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
