//! Room store trait definition

use crate::{
    models::{MeetingRoom, RoomFields},
    Result,
};
use async_trait::async_trait;

/// Durable CRUD over meeting rooms.
///
/// Every mutating call commits before returning. Returned rooms are owned copies;
/// changing them has no effect until they are passed back to [`RoomStore::update`].
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// All rooms ordered by name ascending (ties by id).
    async fn list_all(&self) -> Result<Vec<MeetingRoom>>;

    async fn get_by_id(&self, id: i32) -> Result<Option<MeetingRoom>>;

    /// Persist a new room under a freshly assigned id.
    ///
    /// Fields are re-validated here; callers are expected to have done so already.
    async fn create(&self, fields: RoomFields) -> Result<MeetingRoom>;

    /// Replace all fields of an existing room. Returns `None` if `id` is unknown;
    /// never inserts.
    async fn update(&self, id: i32, fields: RoomFields) -> Result<Option<MeetingRoom>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool>;

    async fn exists(&self, id: i32) -> Result<bool>;

    async fn count(&self) -> Result<i64>;

    /// Verify that the backend is reachable.
    async fn ping(&self) -> Result<()>;
}

/// Store-side safety net shared by implementations.
pub(crate) fn ensure_valid(fields: &RoomFields) -> Result<()> {
    let violations = fields.validate();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(violations))
    }
}
