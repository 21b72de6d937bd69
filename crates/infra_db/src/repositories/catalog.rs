//! Catalog repository implementation
//!
//! Read-only access to the per-country policy catalog. Results come back
//! ordered by premium ascending, which is the order the search endpoint
//! presents them in.

use rust_decimal::Decimal;
use sqlx::FromRow;

use core_kernel::{Country, Currency, Money};
use domain_catalog::Policy;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

const SELECT_TYPES: &str = "\
    SELECT DISTINCT insurance_type FROM policies \
    WHERE country = ? \
    ORDER BY insurance_type";

const SELECT_POLICIES: &str = "\
    SELECT id, country, policy_name, insurance_type, coverage_amount, \
           premium_usd, provider, description \
    FROM policies \
    WHERE country = ? \
    ORDER BY premium_usd, id";

const SELECT_POLICIES_BY_TYPE: &str = "\
    SELECT id, country, policy_name, insurance_type, coverage_amount, \
           premium_usd, provider, description \
    FROM policies \
    WHERE country = ? AND insurance_type = ? \
    ORDER BY premium_usd, id";

/// Repository for the static policy catalog
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::CatalogRepository;
///
/// let repo = CatalogRepository::new(pool);
/// let policies = repo.search(Country::Usa, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: DatabasePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Returns the distinct insurance types for a country, alphabetically
    pub async fn list_types(&self, country: Country) -> Result<Vec<String>, DatabaseError> {
        let types = sqlx::query_scalar::<_, String>(SELECT_TYPES)
            .bind(country.code())
            .fetch_all(&self.pool)
            .await?;

        Ok(types)
    }

    /// Searches a country's catalog, optionally filtered by insurance type
    ///
    /// Policies come back ordered by premium ascending.
    pub async fn search(
        &self,
        country: Country,
        insurance_type: Option<&str>,
    ) -> Result<Vec<Policy>, DatabaseError> {
        let rows = match insurance_type {
            Some(filter) => {
                sqlx::query_as::<_, PolicyRow>(SELECT_POLICIES_BY_TYPE)
                    .bind(country.code())
                    .bind(filter)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, PolicyRow>(SELECT_POLICIES)
                    .bind(country.code())
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(PolicyRow::into_policy).collect()
    }

}

/// Database row representation of a catalog policy
#[derive(Debug, Clone, FromRow)]
pub struct PolicyRow {
    pub id: i64,
    pub country: String,
    pub policy_name: String,
    pub insurance_type: String,
    pub coverage_amount: f64,
    pub premium_usd: f64,
    pub provider: String,
    pub description: String,
}

impl PolicyRow {
    /// Converts the row into the domain entity
    ///
    /// Amount columns are REAL; they are promoted to `Decimal` here so no
    /// floating-point arithmetic leaks into the domain.
    pub fn into_policy(self) -> Result<Policy, DatabaseError> {
        let country: Country = self.country.parse().map_err(|_| {
            DatabaseError::SerializationError(format!(
                "Policy {} has unknown country '{}'",
                self.id, self.country
            ))
        })?;

        Ok(Policy {
            id: self.id,
            country,
            name: self.policy_name,
            insurance_type: self.insurance_type,
            coverage: Money::new(decimal_from_real(self.coverage_amount)?, Currency::USD),
            premium: Money::new(decimal_from_real(self.premium_usd)?, Currency::USD),
            provider: self.provider,
            description: self.description,
        })
    }
}

/// Converts a REAL column value into a two-decimal `Decimal`
fn decimal_from_real(value: f64) -> Result<Decimal, DatabaseError> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| {
            DatabaseError::SerializationError(format!("Invalid monetary value: {}", value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_from_real() {
        assert_eq!(decimal_from_real(150.0).unwrap(), dec!(150.00));
        assert_eq!(decimal_from_real(99.99).unwrap(), dec!(99.99));
    }

    #[test]
    fn test_decimal_from_real_rejects_nan() {
        assert!(decimal_from_real(f64::NAN).is_err());
    }

    #[test]
    fn test_row_with_unknown_country_fails_conversion() {
        let row = PolicyRow {
            id: 1,
            country: "atlantis".to_string(),
            policy_name: "x".to_string(),
            insurance_type: "x".to_string(),
            coverage_amount: 1.0,
            premium_usd: 1.0,
            provider: "x".to_string(),
            description: "x".to_string(),
        };

        assert!(matches!(
            row.into_policy(),
            Err(DatabaseError::SerializationError(_))
        ));
    }
}
