//! Storage layer
//!
//! [`RoomStore`] is the CRUD contract the service layer depends on. Two
//! implementations exist: [`PostgresRoomStore`] for production and
//! [`InMemoryRoomStore`] for tests and database-less runs.

pub mod memory;
pub mod store;
pub mod traits;

pub use memory::InMemoryRoomStore;
pub use store::PostgresRoomStore;
pub use traits::RoomStore;
