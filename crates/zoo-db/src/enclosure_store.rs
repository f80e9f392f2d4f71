//! Queries and inserts on the `enclosures` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use zoo_types::{Enclosure, EnclosureId, NewEnclosure};

use crate::error::DbError;

/// Operations on the `enclosures` table.
pub struct EnclosureStore<'a> {
    pool: &'a PgPool,
}

impl<'a> EnclosureStore<'a> {
    /// Create a new enclosure store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an enclosure and return its new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, enclosure: &NewEnclosure) -> Result<EnclosureId, DbError> {
        let id: i64 = sqlx::query_scalar(
            r"INSERT INTO enclosures (name, climate, habitat_type, security_level, size)
              VALUES ($1, $2, $3, $4, $5)
              RETURNING id",
        )
        .bind(&enclosure.name)
        .bind(enclosure.climate.as_str())
        .bind(enclosure.habitat_type.as_str())
        .bind(enclosure.security_level.as_str())
        .bind(enclosure.size)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(enclosure_id = id, name = enclosure.name, "Inserted enclosure");
        Ok(EnclosureId::new(id))
    }

    /// Every enclosure, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<EnclosureRow>, DbError> {
        let rows = sqlx::query_as::<_, EnclosureRow>(
            r"SELECT id, name, climate, habitat_type, security_level, size, created_at
              FROM enclosures
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}

/// A row from the `enclosures` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EnclosureRow {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Climate, `snake_case`.
    pub climate: String,
    /// Habitat type, `snake_case`.
    pub habitat_type: String,
    /// Security level, `snake_case`.
    pub security_level: String,
    /// Floor area, in m².
    pub size: Decimal,
    /// Real-world creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<EnclosureRow> for Enclosure {
    type Error = DbError;

    /// Converts without occupants; callers attach them.
    fn try_from(row: EnclosureRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EnclosureId::new(row.id),
            name: row.name,
            climate: row.climate.parse()?,
            habitat_type: row.habitat_type.parse()?,
            security_level: row.security_level.parse()?,
            size: row.size,
            animals: Vec::new(),
        })
    }
}
