//! Meeting room service
//!
//! An HTTP/JSON service for managing meeting-room records backed by PostgreSQL.
//!
//! The crate is split into a storage layer ([`db`]) exposing the [`db::RoomStore`]
//! trait, a service layer ([`services`]) that validates requests and maps store
//! outcomes, and the HTTP surface ([`api`]) built on axum.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod startup;
pub mod state;

pub use error::{Error, Result};
