//! Route behavior when the store is slow or failing.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use todo_server::{build_router, Item, ItemStore, NewItem, ServerConfig, StoreError};

/// Store that hangs on reads and fails every write.
struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    }

    async fn add(&self, _item: NewItem) -> Result<Item, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, StoreError> {
        Ok(Some(Item {
            id,
            name: Some("ghost".into()),
            is_complete: false,
        }))
    }

    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        Err(StoreError::Missing { id: item.id })
    }

    async fn remove(&self, item: &Item) -> Result<(), StoreError> {
        Err(StoreError::Missing { id: item.id })
    }
}

fn app() -> Router {
    let config = ServerConfig {
        request_timeout: Duration::from_secs(1),
        ..ServerConfig::default()
    };
    build_router(Arc::new(FailingStore), &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn slow_store_times_out_with_408() {
    let response = send(&app(), Method::GET, "/items", None).await;
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn database_error_is_generic_500() {
    let response = send(&app(), Method::POST, "/items", Some(r#"{"name":"x"}"#)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text(response).await, "an internal error occurred");
}

#[tokio::test]
async fn item_vanishing_before_delete_is_404() {
    let response = send(&app(), Method::DELETE, "/items/3", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text(response).await, "Item not found");
}

#[tokio::test]
async fn item_vanishing_before_update_is_404() {
    let response = send(&app(), Method::PUT, "/items/3", Some(r#"{"isComplete":true}"#)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_content_type_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/items")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"name":"x"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(response).await, "Invalid item data");
}
