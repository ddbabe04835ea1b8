//! Shared application state

use crate::{
    config::{Config, StorageKind},
    db::{InMemoryRoomStore, PostgresRoomStore, RoomStore},
    services::{HealthService, RoomService},
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    pub run_migrations: bool,
    pub seed_demo_rooms: bool,
}

impl AppStateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            run_migrations: config.database.run_migrations,
            seed_demo_rooms: config.storage.seed_demo_rooms,
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub room_service: Arc<RoomService>,
    pub health_service: Arc<HealthService>,
}

impl AppState {
    /// Initialize the application state, connecting to the configured store.
    pub async fn new(config: Config) -> Result<Self> {
        let options = AppStateOptions::from_config(&config);
        Self::new_with_options(config, options).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!(storage = ?config.storage.kind, "Initializing application state...");

        let store: Arc<dyn RoomStore> = match config.storage.kind {
            StorageKind::Postgres => {
                let db_pool = create_db_pool(&config).await?;
                let store = PostgresRoomStore::new(db_pool.clone());
                crate::startup::bootstrap_database(&db_pool, &options).await?;
                Arc::new(store)
            }
            StorageKind::Memory => {
                if options.seed_demo_rooms {
                    Arc::new(InMemoryRoomStore::seeded())
                } else {
                    Arc::new(InMemoryRoomStore::new())
                }
            }
        };

        let state = Self::with_store(config, store);
        tracing::info!("Application state initialized successfully");
        Ok(state)
    }

    /// Wire services around an already constructed store.
    pub fn with_store(config: Config, store: Arc<dyn RoomStore>) -> Self {
        Self {
            config: Arc::new(config),
            room_service: Arc::new(RoomService::new(store.clone())),
            health_service: Arc::new(HealthService::new(store)),
        }
    }
}

pub async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let statement_timeout = config.database.statement_timeout_seconds;
    let lock_timeout = config.database.lock_timeout_seconds;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                // Set statement timeout (max query execution time)
                sqlx::query(&format!("SET statement_timeout = '{}s'", statement_timeout))
                    .execute(&mut *conn)
                    .await?;

                // Set lock timeout (max lock wait time - fail fast)
                sqlx::query(&format!("SET lock_timeout = '{}s'", lock_timeout))
                    .execute(&mut *conn)
                    .await?;

                Ok(())
            })
        })
        .connect(&config.database.url)
        .await?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
