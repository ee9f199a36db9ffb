#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use foo_service::models::FooData;
use foo_service::services::{FooRepository, FooStream, InMemoryFooRepository};
use foo_service::{build_router, AppState};
use service_core::error::AppError;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const ID: &str = "test-1111";
pub const VALUE: &str = "value-1111";

pub fn foo(id: &str, value: &str) -> FooData {
    FooData {
        id: id.to_string(),
        value: value.to_string(),
    }
}

/// Store whose every call fails as if the connection had dropped.
pub struct UnreachableRepository;

#[async_trait]
impl FooRepository for UnreachableRepository {
    async fn find_by_id(&self, _id: &str) -> Result<Option<FooData>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "No servers available: connection refused"
        )))
    }

    async fn find_all_by_id_in(&self, _ids: &[String]) -> Result<FooStream, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "No servers available: connection refused"
        )))
    }

    async fn save(&self, _record: FooData) -> Result<FooData, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "No servers available: connection refused"
        )))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "No servers available: connection refused"
        )))
    }
}

pub struct TestApp {
    pub router: Router,
    pub repository: Arc<dyn FooRepository>,
}

impl TestApp {
    pub fn with_repository(repository: Arc<dyn FooRepository>) -> Self {
        let router = build_router(AppState::new(repository.clone()));
        Self { router, repository }
    }

    pub fn empty() -> Self {
        Self::with_repository(Arc::new(InMemoryFooRepository::new()))
    }

    pub fn seeded(records: impl IntoIterator<Item = FooData>) -> Self {
        Self::with_repository(Arc::new(InMemoryFooRepository::with_records(records)))
    }

    pub fn unreachable() -> Self {
        Self::with_repository(Arc::new(UnreachableRepository))
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: String) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
