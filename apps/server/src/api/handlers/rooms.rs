//! Meeting room handlers.

use crate::{services::RoomRequest, state::AppState, Error, Result};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Reject non-integer ids with a JSON body instead of axum's plain-text default.
fn room_id(path: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::BadRequest(rejection.body_text()))
}

/// Every body rejection is a 400 except an exceeded size limit, which stays 413.
fn room_body(body: std::result::Result<Json<RoomRequest>, JsonRejection>) -> Result<RoomRequest> {
    body.map(|Json(request)| request).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge(rejection.body_text())
        } else {
            Error::BadRequest(rejection.body_text())
        }
    })
}

pub async fn list_rooms(State(state): State<AppState>) -> Result<Response> {
    tracing::debug!("Listing meeting rooms");
    let rooms = state.room_service.list().await?;

    Ok((StatusCode::OK, Json(rooms)).into_response())
}

pub async fn get_room(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Response> {
    let id = room_id(path)?;
    let room = state.room_service.get(id).await.inspect_err(|e| {
        if matches!(e, Error::RoomNotFound { .. }) {
            tracing::warn!(room_id = id, "Meeting room not found");
        }
    })?;

    Ok((StatusCode::OK, Json(room)).into_response())
}

pub async fn room_exists(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Response> {
    let id = room_id(path)?;
    let status = if state.room_service.exists(id).await? {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok(status.into_response())
}

pub async fn create_room(
    State(state): State<AppState>,
    body: std::result::Result<Json<RoomRequest>, JsonRejection>,
) -> Result<Response> {
    let request = room_body(body)?;
    let room = state.room_service.create(request).await?;
    let location = format!("/rooms/{}", room.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(room),
    )
        .into_response())
}

pub async fn update_room(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    body: std::result::Result<Json<RoomRequest>, JsonRejection>,
) -> Result<Response> {
    let id = room_id(path)?;
    let request = room_body(body)?;
    let room = state.room_service.update(id, request).await.inspect_err(|e| {
        if matches!(e, Error::RoomNotFound { .. }) {
            tracing::warn!(room_id = id, "Meeting room not found for update");
        }
    })?;

    Ok((StatusCode::OK, Json(room)).into_response())
}

pub async fn delete_room(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Response> {
    let id = room_id(path)?;
    state.room_service.delete(id).await.inspect_err(|e| {
        if matches!(e, Error::RoomNotFound { .. }) {
            tracing::warn!(room_id = id, "Meeting room not found for delete");
        }
    })?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
