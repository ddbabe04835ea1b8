//! Business logic layer
//!
//! Services validate incoming requests, call the room store, and turn store
//! outcomes into typed results for the HTTP layer.

pub mod health;
pub mod rooms;

pub use health::{HealthReport, HealthService};
pub use rooms::{RoomRequest, RoomService};
