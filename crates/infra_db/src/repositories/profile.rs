//! Profile repository implementation
//!
//! Stores submitted user profiles, keyed by a generated identifier and
//! partitioned by country. Uniqueness of (country, first name) is enforced
//! by the schema's UNIQUE constraint rather than a check-then-insert
//! sequence, so concurrent submissions of the same name cannot both create
//! a row.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;

use core_kernel::{Country, ProfileId};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

const INSERT_PROFILE: &str = "\
    INSERT INTO profiles \
        (unique_id, country, first_name, age, street_name, city, state, zip_code, created_at) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_ID_BY_NAME: &str = "\
    SELECT unique_id FROM profiles \
    WHERE country = ? AND first_name = ?";

const SELECT_PROFILE: &str = "\
    SELECT unique_id, country, first_name, age, street_name, city, state, zip_code, created_at \
    FROM profiles \
    WHERE country = ? AND unique_id = ?";

/// Repository for submitted user profiles
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: DatabasePool,
}

/// Data for creating a new profile
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub first_name: String,
    pub age: u32,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Outcome of a registration attempt
///
/// `created` is false when the first name already existed in the country
/// partition; `id` is then the previously assigned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub id: ProfileId,
    pub created: bool,
}

/// Database row representation of a stored profile
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub unique_id: String,
    pub country: String,
    pub first_name: String,
    pub age: i64,
    pub street_name: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_at: DateTime<Utc>,
}

impl ProfileRepository {
    /// Creates a new ProfileRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Registers a profile, generating a fresh identifier
    ///
    /// If a profile with the same first name already exists in the country
    /// partition, the UNIQUE constraint rejects the insert and the existing
    /// identifier is returned with `created: false`.
    pub async fn register(
        &self,
        country: Country,
        profile: &NewProfile,
    ) -> Result<Registration, DatabaseError> {
        let id = ProfileId::new();
        let now = Utc::now();

        let inserted = sqlx::query(INSERT_PROFILE)
            .bind(id.as_uuid().to_string())
            .bind(country.code())
            .bind(&profile.first_name)
            .bind(profile.age as i64)
            .bind(&profile.street_name)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.zip_code)
            .bind(now)
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(_) => {
                debug!(%id, country = %country, "Profile registered");
                Ok(Registration { id, created: true })
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                let existing = self.find_id_by_name(country, &profile.first_name).await?;
                debug!(%existing, country = %country, "Duplicate profile submission");
                Ok(Registration {
                    id: existing,
                    created: false,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up a profile by identifier within a country partition
    pub async fn find(
        &self,
        country: Country,
        id: &ProfileId,
    ) -> Result<Option<ProfileRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ProfileRow>(SELECT_PROFILE)
            .bind(country.code())
            .bind(id.as_uuid().to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Returns the identifier previously assigned to a first name
    async fn find_id_by_name(
        &self,
        country: Country,
        first_name: &str,
    ) -> Result<ProfileId, DatabaseError> {
        let stored = sqlx::query_scalar::<_, String>(SELECT_ID_BY_NAME)
            .bind(country.code())
            .bind(first_name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Profile", first_name))?;

        stored.parse::<ProfileId>().map_err(|e| {
            DatabaseError::SerializationError(format!("Stored profile id is invalid: {}", e))
        })
    }
}

impl ProfileRow {
    /// Returns the stored age as the domain's unsigned type
    pub fn age_years(&self) -> Result<u32, DatabaseError> {
        u32::try_from(self.age).map_err(|_| {
            DatabaseError::SerializationError(format!("Stored age {} is out of range", self.age))
        })
    }

    /// Parses the stored identifier
    pub fn profile_id(&self) -> Result<ProfileId, DatabaseError> {
        self.unique_id.parse::<ProfileId>().map_err(|e| {
            DatabaseError::SerializationError(format!("Stored profile id is invalid: {}", e))
        })
    }
}
