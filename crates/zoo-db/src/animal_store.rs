//! Queries and assignment updates on the `animals` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use zoo_types::{Animal, AnimalId, EnclosureId};

use crate::error::DbError;

const SELECT_ANIMALS: &str = r"SELECT id, name, species, size, dietary_class, activity_pattern,
                 prey, enclosure_id, space_requirement, security_requirement, created_at
          FROM animals";

/// Operations on the `animals` table.
pub struct AnimalStore<'a> {
    pool: &'a PgPool,
}

impl<'a> AnimalStore<'a> {
    /// Create a new animal store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an animal and return its new id. The id on `animal` is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, animal: &Animal) -> Result<AnimalId, DbError> {
        let id: i64 = sqlx::query_scalar(
            r"INSERT INTO animals
              (name, species, size, dietary_class, activity_pattern, prey,
               enclosure_id, space_requirement, security_requirement)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
              RETURNING id",
        )
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(animal.size.as_str())
        .bind(animal.dietary_class.as_str())
        .bind(animal.activity_pattern.as_str())
        .bind(animal.prey.as_deref())
        .bind(animal.enclosure_id.map(EnclosureId::into_inner))
        .bind(animal.space_requirement)
        .bind(animal.security_requirement.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(animal_id = id, name = animal.name, "Inserted animal");
        Ok(AnimalId::new(id))
    }

    /// Every animal, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<AnimalRow>, DbError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!("{SELECT_ANIMALS} ORDER BY id"))
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Animals with no enclosure, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_unassigned(&self) -> Result<Vec<AnimalRow>, DbError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!(
            "{SELECT_ANIMALS} WHERE enclosure_id IS NULL ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Animals that have an enclosure, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_assigned(&self) -> Result<Vec<AnimalRow>, DbError> {
        let rows = sqlx::query_as::<_, AnimalRow>(&format!(
            "{SELECT_ANIMALS} WHERE enclosure_id IS NOT NULL ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Set or clear one animal's enclosure.
    ///
    /// Updating an id that does not exist is not an error; nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails, including when
    /// `enclosure_id` names a missing enclosure.
    pub async fn set_enclosure(
        &self,
        animal_id: AnimalId,
        enclosure_id: Option<EnclosureId>,
    ) -> Result<(), DbError> {
        let result = sqlx::query(r"UPDATE animals SET enclosure_id = $2 WHERE id = $1")
            .bind(animal_id.into_inner())
            .bind(enclosure_id.map(EnclosureId::into_inner))
            .execute(self.pool)
            .await?;

        tracing::debug!(
            %animal_id,
            enclosure_id = enclosure_id.map(EnclosureId::into_inner),
            rows = result.rows_affected(),
            "Updated animal enclosure"
        );
        Ok(())
    }
}

/// A row from the `animals` table.
///
/// Enumerations arrive as text and are parsed on conversion to [`Animal`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnimalRow {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Free-text species.
    pub species: String,
    /// Size class, `snake_case`.
    pub size: String,
    /// Dietary class, `snake_case`.
    pub dietary_class: String,
    /// Activity pattern, `snake_case`.
    pub activity_pattern: String,
    /// Comma-separated prey fragments.
    pub prey: Option<String>,
    /// Assigned enclosure.
    pub enclosure_id: Option<i64>,
    /// Floor area needed, in m².
    pub space_requirement: Decimal,
    /// Required security level, `snake_case`.
    pub security_requirement: String,
    /// Real-world creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AnimalRow> for Animal {
    type Error = DbError;

    fn try_from(row: AnimalRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AnimalId::new(row.id),
            name: row.name,
            species: row.species,
            size: row.size.parse()?,
            dietary_class: row.dietary_class.parse()?,
            activity_pattern: row.activity_pattern.parse()?,
            prey: row.prey,
            enclosure_id: row.enclosure_id.map(EnclosureId::new),
            space_requirement: row.space_requirement,
            security_requirement: row.security_requirement.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use zoo_types::{ActivityPattern, AnimalSize, DietaryClass, SecurityLevel};

    use super::*;

    fn row() -> AnimalRow {
        AnimalRow {
            id: 3,
            name: "Alex".to_owned(),
            species: "Lion".to_owned(),
            size: "large".to_owned(),
            dietary_class: "carnivore".to_owned(),
            activity_pattern: "cathemeral".to_owned(),
            prey: Some("zebra".to_owned()),
            enclosure_id: Some(9),
            space_requirement: dec!(120.5),
            security_requirement: "high".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_to_animal() {
        let animal = Animal::try_from(row());
        let animal = animal.ok();
        assert_eq!(animal.as_ref().map(|a| a.size), Some(AnimalSize::Large));
        assert_eq!(animal.as_ref().map(|a| a.dietary_class), Some(DietaryClass::Carnivore));
        assert_eq!(
            animal.as_ref().map(|a| a.activity_pattern),
            Some(ActivityPattern::Cathemeral)
        );
        assert_eq!(
            animal.as_ref().map(|a| a.security_requirement),
            Some(SecurityLevel::High)
        );
        assert_eq!(animal.and_then(|a| a.enclosure_id), Some(EnclosureId::new(9)));
    }

    #[test]
    fn unknown_enum_text_is_rejected() {
        let mut bad = row();
        bad.security_requirement = "extreme".to_owned();
        assert!(matches!(Animal::try_from(bad), Err(DbError::InvalidValue(_))));
    }
}
