//! Domain types

pub mod room;

pub use room::{
    validate_capacity, validate_location, validate_name, FieldViolation, MeetingRoom, RoomFields,
    RoomSummary, MAX_CAPACITY, MAX_LOCATION_LEN, MAX_NAME_LEN, MIN_CAPACITY, SEED_ROOMS,
};
