//! Database bootstrap
//!
//! Runs at every startup and is safe to repeat. Schema changes and the demo
//! rooms both live in `migrations/`, which sqlx records in `_sqlx_migrations`
//! and applies at most once per database.

use crate::{state::AppStateOptions, Result};
use sqlx::PgPool;

pub async fn bootstrap_database(db_pool: &PgPool, options: &AppStateOptions) -> Result<()> {
    if options.run_migrations {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(db_pool).await?;
        tracing::info!("Database migrations completed successfully");
    } else {
        tracing::info!("Migrations disabled (database.run_migrations=false)");
    }

    Ok(())
}
