#![allow(unused)]
#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use std::sync::Arc;
use support::*;

#[tokio::test]
async fn health_reports_connected_store_and_room_count() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request_json(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");

            assert_eq!(body["status"], "Healthy");
            assert_eq!(body["database"], "Connected");
            assert_eq!(body["roomCount"], 3);
            assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
            let timestamp = body["timestamp"].as_str().unwrap_or_default();
            assert!(
                chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
                "timestamp is RFC 3339: {timestamp}"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn health_room_count_tracks_writes() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.request(
                Method::POST,
                "/rooms",
                Some(to_json_body(&room_body("Room A", "Floor 1", 10))?),
            )
            .await?;

            let (_status, _headers, body) =
                app.request_json(Method::GET, "/health", None).await?;
            assert_eq!(body["roomCount"], 4);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unreachable_store_is_503() -> anyhow::Result<()> {
    with_test_app_with_store(Arc::new(UnavailableStore), |app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request_json(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::SERVICE_UNAVAILABLE, "health when down");

            assert_eq!(body["status"], "Unhealthy");
            assert_eq!(body["database"], "Disconnected");
            assert!(body["timestamp"].is_string());
            assert!(body.get("roomCount").is_none());
            // Backend details are not exposed.
            assert!(!body.to_string().contains("os error"));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn storage_faults_on_crud_are_generic_500s() -> anyhow::Result<()> {
    with_test_app_with_store(Arc::new(UnavailableStore), |app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request_json(Method::GET, "/rooms", None).await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "list when down");
            assert_eq!(body["message"], "An internal server error occurred");
            assert!(!body.to_string().contains("os error"));

            let (status, _headers, _body) = app
                .request(
                    Method::POST,
                    "/rooms",
                    Some(to_json_body(&room_body("Room A", "Floor 1", 10))?),
                )
                .await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "create when down");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn validation_runs_before_the_store_is_touched() -> anyhow::Result<()> {
    with_test_app_with_store(Arc::new(UnavailableStore), |app| {
        Box::pin(async move {
            let (status, _headers, _body) = app
                .request(
                    Method::PUT,
                    "/rooms/1",
                    Some(to_json_body(&room_body("Room A", "Floor 1", 0))?),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "invalid body with store down");
            Ok(())
        })
    })
    .await
}
