//! In-process `RoomStore` implementation.
//!
//! Keeps rooms in a map behind an async lock. Used by integration tests and by
//! `storage.kind = memory` deployments; contents are lost on shutdown.

use crate::{
    db::traits::{ensure_valid, RoomStore},
    models::{MeetingRoom, RoomFields, SEED_ROOMS},
    Result,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rooms: BTreeMap<i32, MeetingRoom>,
    last_id: i32,
}

/// Memory-backed room store.
#[derive(Default)]
pub struct InMemoryRoomStore {
    inner: RwLock<Inner>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the demo rooms (ids 1-3).
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for (id, name, location, capacity) in SEED_ROOMS {
            inner
                .rooms
                .insert(id, RoomFields::new(name, location, capacity).into_room(id));
            inner.last_id = inner.last_id.max(id);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn list_all(&self) -> Result<Vec<MeetingRoom>> {
        let inner = self.inner.read().await;
        let mut rooms: Vec<MeetingRoom> = inner.rooms.values().cloned().collect();
        // Byte-wise comparison, matching the "C" collation on meeting_rooms.name.
        rooms.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(rooms)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<MeetingRoom>> {
        Ok(self.inner.read().await.rooms.get(&id).cloned())
    }

    async fn create(&self, fields: RoomFields) -> Result<MeetingRoom> {
        ensure_valid(&fields)?;

        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| crate::Error::Internal("Room id space exhausted".to_string()))?;
        inner.last_id = id;

        let room = fields.into_room(id);
        inner.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn update(&self, id: i32, fields: RoomFields) -> Result<Option<MeetingRoom>> {
        ensure_valid(&fields)?;

        let mut inner = self.inner.write().await;
        let Some(slot) = inner.rooms.get_mut(&id) else {
            return Ok(None);
        };
        *slot = fields.into_room(id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.inner.write().await.rooms.remove(&id).is_some())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.inner.read().await.rooms.contains_key(&id))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.inner.read().await.rooms.len() as i64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
