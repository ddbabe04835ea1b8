//! Meeting room model and field validation

use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MIN_CAPACITY: i32 = 1;
pub const MAX_CAPACITY: i32 = 1000;

/// Rooms inserted into an empty store at first startup: `(id, name, location, capacity)`.
pub const SEED_ROOMS: [(i32, &str, &str, i32); 3] = [
    (1, "Konferencesal A", "1. sal, bygning Nord", 20),
    (2, "Meeting Room B", "Stueetagen, bygning Syd", 8),
    (3, "Kreativt Rum", "2. sal, bygning Vest", 12),
];

/// A stored meeting room. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MeetingRoom {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

impl MeetingRoom {
    pub fn fields(&self) -> RoomFields {
        RoomFields {
            name: self.name.clone(),
            location: self.location.clone(),
            capacity: self.capacity,
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
}

/// The mutable part of a room.
///
/// Creating and replacing a room both take a complete `RoomFields` value; there is
/// no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFields {
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

impl RoomFields {
    pub fn new(name: impl Into<String>, location: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            capacity,
        }
    }

    /// Check every field and collect all violations (empty when valid).
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        violations.extend(validate_name(&self.name));
        violations.extend(validate_location(&self.location));
        violations.extend(validate_capacity(i64::from(self.capacity)));
        violations
    }

    pub fn into_room(self, id: i32) -> MeetingRoom {
        MeetingRoom {
            id,
            name: self.name,
            location: self.location,
            capacity: self.capacity,
        }
    }
}

/// List projection of a room. Capacity is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn validate_text(field: &str, label: &str, value: &str, max_len: usize) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        return Some(FieldViolation::new(field, format!("{label} is required")));
    }
    // varchar(n) counts characters, not bytes
    if value.chars().count() > max_len {
        return Some(FieldViolation::new(
            field,
            format!("{label} must not exceed {max_len} characters"),
        ));
    }
    None
}

pub fn validate_name(name: &str) -> Option<FieldViolation> {
    validate_text("name", "Name", name, MAX_NAME_LEN)
}

pub fn validate_location(location: &str) -> Option<FieldViolation> {
    validate_text("location", "Location", location, MAX_LOCATION_LEN)
}

/// Takes `i64` so out-of-range wire values are reported instead of overflowing.
pub fn validate_capacity(capacity: i64) -> Option<FieldViolation> {
    if !(i64::from(MIN_CAPACITY)..=i64::from(MAX_CAPACITY)).contains(&capacity) {
        return Some(FieldViolation::new(
            "capacity",
            format!("Capacity must be between {MIN_CAPACITY} and {MAX_CAPACITY}"),
        ));
    }
    None
}
