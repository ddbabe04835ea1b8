//! Health reporting

use crate::{db::RoomStore, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub room_count: i64,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

pub struct HealthService {
    store: Arc<dyn RoomStore>,
}

impl HealthService {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// Probe the store and count rooms. Any storage error is returned to the
    /// caller, which reports the service as unhealthy.
    pub async fn check(&self) -> Result<HealthReport> {
        self.store.ping().await?;
        let room_count = self.store.count().await?;

        Ok(HealthReport {
            status: "Healthy",
            database: "Connected",
            room_count,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        })
    }
}
