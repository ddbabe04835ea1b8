//! Room service - request validation and store orchestration

use crate::{
    db::RoomStore,
    models::{
        validate_capacity, validate_location, validate_name, FieldViolation, MeetingRoom,
        RoomFields, RoomSummary,
    },
    Error, Result,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /rooms` and `PUT /rooms/{id}`.
///
/// Every field is optional at the wire level so a missing field is reported as a
/// field violation rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
}

impl RoomRequest {
    pub fn new(name: impl Into<String>, location: impl Into<String>, capacity: i64) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location.into()),
            capacity: Some(capacity),
        }
    }

    /// Check every field and build the value passed to the store.
    pub fn into_fields(self) -> std::result::Result<RoomFields, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = self.name.unwrap_or_default();
        violations.extend(validate_name(&name));

        let location = self.location.unwrap_or_default();
        violations.extend(validate_location(&location));

        let capacity = match self.capacity {
            Some(capacity) => {
                violations.extend(validate_capacity(capacity));
                capacity
            }
            None => {
                violations.push(FieldViolation::new("capacity", "Capacity is required"));
                0
            }
        };

        if !violations.is_empty() {
            return Err(violations);
        }

        let capacity = i32::try_from(capacity)
            .map_err(|_| vec![FieldViolation::new("capacity", "Capacity is out of range")])?;

        Ok(RoomFields {
            name,
            location,
            capacity,
        })
    }
}

pub struct RoomService {
    store: Arc<dyn RoomStore>,
}

impl RoomService {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// List projection of every room, ordered by name.
    pub async fn list(&self) -> Result<Vec<RoomSummary>> {
        let rooms = self.store.list_all().await?;
        Ok(rooms.iter().map(MeetingRoom::summary).collect())
    }

    pub async fn get(&self, id: i32) -> Result<MeetingRoom> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(Error::RoomNotFound { id })
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        self.store.exists(id).await
    }

    pub async fn create(&self, request: RoomRequest) -> Result<MeetingRoom> {
        let fields = request.into_fields().map_err(Error::Validation)?;

        let room = self.store.create(fields).await?;
        tracing::info!(room_id = room.id, name = %room.name, "Meeting room created");
        Ok(room)
    }

    /// Replace every field of room `id`. Validation runs before the existence
    /// check, so an invalid body for an unknown id is a validation error.
    pub async fn update(&self, id: i32, request: RoomRequest) -> Result<MeetingRoom> {
        let fields = request.into_fields().map_err(Error::Validation)?;

        match self.store.update(id, fields).await? {
            Some(room) => {
                tracing::info!(room_id = id, "Meeting room updated");
                Ok(room)
            }
            None => Err(Error::RoomNotFound { id }),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if self.store.delete(id).await? {
            tracing::info!(room_id = id, "Meeting room deleted");
            Ok(())
        } else {
            Err(Error::RoomNotFound { id })
        }
    }
}
