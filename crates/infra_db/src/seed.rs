//! Catalog seed data
//!
//! The policy catalog is demo data loaded once, the first time the service
//! starts against an empty database. Amounts are USD; the India partition is
//! also priced in USD and converted at display time.

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

struct SeedPolicy {
    country: &'static str,
    policy_name: &'static str,
    insurance_type: &'static str,
    coverage_amount: f64,
    premium_usd: f64,
    provider: &'static str,
    description: &'static str,
}

const SEED_POLICIES: &[SeedPolicy] = &[
    // USA partition
    SeedPolicy {
        country: "usa",
        policy_name: "SafeDrive Standard",
        insurance_type: "Auto Insurance",
        coverage_amount: 50_000.0,
        premium_usd: 85.0,
        provider: "Liberty Shield",
        description: "Liability and collision coverage for everyday drivers",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "SafeDrive Premium",
        insurance_type: "Auto Insurance",
        coverage_amount: 150_000.0,
        premium_usd: 145.0,
        provider: "Liberty Shield",
        description: "Full coverage with roadside assistance and rental car",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "Family Health Essential",
        insurance_type: "Health Insurance",
        coverage_amount: 250_000.0,
        premium_usd: 320.0,
        provider: "Pinnacle Health",
        description: "Family health plan covering hospitalization and outpatient care",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "Individual Health Basic",
        insurance_type: "Health Insurance",
        coverage_amount: 100_000.0,
        premium_usd: 180.0,
        provider: "Pinnacle Health",
        description: "Individual coverage with preventive care included",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "Term Life 20",
        insurance_type: "Life Insurance",
        coverage_amount: 500_000.0,
        premium_usd: 45.0,
        provider: "Evergreen Life",
        description: "20-year term life policy with level premiums",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "Whole Life Secure",
        insurance_type: "Life Insurance",
        coverage_amount: 250_000.0,
        premium_usd: 210.0,
        provider: "Evergreen Life",
        description: "Permanent life insurance with cash value accumulation",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "HomeGuard Complete",
        insurance_type: "Home Insurance",
        coverage_amount: 400_000.0,
        premium_usd: 120.0,
        provider: "Fortress Property",
        description: "Dwelling, contents, and liability protection for homeowners",
    },
    SeedPolicy {
        country: "usa",
        policy_name: "Wanderer Annual",
        insurance_type: "Travel Insurance",
        coverage_amount: 25_000.0,
        premium_usd: 30.0,
        provider: "Globe Trek Assurance",
        description: "Annual multi-trip travel coverage with medical evacuation",
    },
    // India partition
    SeedPolicy {
        country: "india",
        policy_name: "City Motor Protect",
        insurance_type: "Auto Insurance",
        coverage_amount: 12_000.0,
        premium_usd: 18.0,
        provider: "Lotus General",
        description: "Comprehensive two-wheeler and car coverage for city driving",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Highway Motor Plus",
        insurance_type: "Auto Insurance",
        coverage_amount: 30_000.0,
        premium_usd: 32.0,
        provider: "Lotus General",
        description: "Extended motor coverage with zero-depreciation claims",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Arogya Family Care",
        insurance_type: "Health Insurance",
        coverage_amount: 60_000.0,
        premium_usd: 55.0,
        provider: "Sanjeevani Health",
        description: "Family floater plan covering cashless hospitalization",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Arogya Individual",
        insurance_type: "Health Insurance",
        coverage_amount: 25_000.0,
        premium_usd: 28.0,
        provider: "Sanjeevani Health",
        description: "Individual health cover with annual wellness checkup",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Jeevan Term Shield",
        insurance_type: "Life Insurance",
        coverage_amount: 120_000.0,
        premium_usd: 12.0,
        provider: "Kalpataru Life",
        description: "Affordable term life cover with accidental death benefit",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Jeevan Savings Plus",
        insurance_type: "Life Insurance",
        coverage_amount: 80_000.0,
        premium_usd: 48.0,
        provider: "Kalpataru Life",
        description: "Endowment plan combining life cover with guaranteed returns",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Griha Raksha",
        insurance_type: "Home Insurance",
        coverage_amount: 90_000.0,
        premium_usd: 22.0,
        provider: "Fortress Property",
        description: "Structure and contents protection against fire and flood",
    },
    SeedPolicy {
        country: "india",
        policy_name: "Yatra Secure",
        insurance_type: "Travel Insurance",
        coverage_amount: 15_000.0,
        premium_usd: 9.0,
        provider: "Globe Trek Assurance",
        description: "International travel cover with lost-baggage protection",
    },
];

/// Seeds the policy catalog if it is empty
///
/// Returns the number of policies inserted (zero when the catalog was
/// already populated).
pub async fn seed_catalog(pool: &DatabasePool) -> Result<u64, DatabaseError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM policies")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        info!(existing, "Catalog already seeded");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for policy in SEED_POLICIES {
        sqlx::query(
            "INSERT INTO policies \
                (country, policy_name, insurance_type, coverage_amount, premium_usd, provider, description) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(policy.country)
        .bind(policy.policy_name)
        .bind(policy.insurance_type)
        .bind(policy.coverage_amount)
        .bind(policy.premium_usd)
        .bind(policy.provider)
        .bind(policy.description)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    let inserted = SEED_POLICIES.len() as u64;
    info!(inserted, "Catalog seeded");
    Ok(inserted)
}
