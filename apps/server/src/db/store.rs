//! PostgreSQL-backed `RoomStore` implementation

use async_trait::async_trait;
use sqlx::{postgres::PgDatabaseError, PgPool, Row};

use crate::{
    db::traits::{ensure_valid, RoomStore},
    models::{FieldViolation, MeetingRoom, RoomFields},
    Error, Result,
};

/// PostgreSQL-backed RoomStore implementation
#[derive(Clone)]
pub struct PostgresRoomStore {
    pool: PgPool,
}

impl PostgresRoomStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Field-level violation for a constraint error raised by the table definition.
///
/// Only the table's own named constraints, and columns Postgres reports, are
/// attributed to a field. Anything else stays a storage fault.
fn constraint_violation(
    code: &str,
    constraint: Option<&str>,
    column: Option<&str>,
) -> Option<FieldViolation> {
    match code {
        // check_violation
        "23514" => match constraint? {
            "meeting_rooms_name_not_blank" => Some(FieldViolation::new("name", "Name is required")),
            "meeting_rooms_location_not_blank" => {
                Some(FieldViolation::new("location", "Location is required"))
            }
            "meeting_rooms_capacity_range" => Some(FieldViolation::new(
                "capacity",
                "Capacity must be between 1 and 1000",
            )),
            _ => None,
        },
        // not_null_violation, string_data_right_truncation
        "23502" | "22001" => {
            let field = column.filter(|c| matches!(*c, "name" | "location" | "capacity"))?;
            let message = if code == "23502" {
                "Field is required"
            } else {
                "Field exceeds its maximum length"
            };
            Some(FieldViolation::new(field, message))
        }
        _ => None,
    }
}

fn map_write_error(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        let column = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(PgDatabaseError::column);
        if let Some(violation) = db_err
            .code()
            .and_then(|code| constraint_violation(&code, db_err.constraint(), column))
        {
            return Error::Validation(vec![violation]);
        }
    }
    Error::from(err)
}

#[async_trait]
impl RoomStore for PostgresRoomStore {
    async fn list_all(&self) -> Result<Vec<MeetingRoom>> {
        let rooms = sqlx::query_as::<_, MeetingRoom>(
            "SELECT id, name, location, capacity
             FROM meeting_rooms
             ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<MeetingRoom>> {
        let room = sqlx::query_as::<_, MeetingRoom>(
            "SELECT id, name, location, capacity
             FROM meeting_rooms
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    async fn create(&self, fields: RoomFields) -> Result<MeetingRoom> {
        ensure_valid(&fields)?;

        let row = sqlx::query(
            "INSERT INTO meeting_rooms (name, location, capacity)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(fields.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        let id: i32 = row.get("id");
        Ok(fields.into_room(id))
    }

    async fn update(&self, id: i32, fields: RoomFields) -> Result<Option<MeetingRoom>> {
        ensure_valid(&fields)?;

        // Single statement: either every field is replaced or none is.
        let room = sqlx::query_as::<_, MeetingRoom>(
            "UPDATE meeting_rooms
             SET name = $2, location = $3, capacity = $4
             WHERE id = $1
             RETURNING id, name, location, capacity",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.location)
        .bind(fields.capacity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(room)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM meeting_rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(removed > 0)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM meeting_rooms WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meeting_rooms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
