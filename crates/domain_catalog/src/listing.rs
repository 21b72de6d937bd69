//! Country-localized listing view of a policy
//!
//! The listing carries both the raw USD amounts and the formatted display
//! strings. For India the amounts are additionally converted to INR at the
//! fixed exchange rate, matching what the search endpoint returns.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Country, ExchangeRate, MoneyError};

use crate::policy::Policy;

/// A policy rendered for display in a specific country
#[derive(Debug, Clone, Serialize)]
pub struct PolicyListing {
    pub id: i64,
    pub policy_name: String,
    pub insurance_type: String,
    pub provider: String,
    pub description: String,
    /// Coverage amount in USD
    pub coverage_amount: Decimal,
    /// Monthly premium in USD
    pub premium_usd: Decimal,
    /// Premium formatted in the display currency, e.g. "$150.00" or "₹12,525.00"
    pub premium_formatted: String,
    /// Coverage formatted in the display currency
    pub coverage_formatted: String,
    /// Premium converted to INR; present only for India
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_inr: Option<Decimal>,
    /// Coverage converted to INR; present only for India
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_inr: Option<Decimal>,
}

impl PolicyListing {
    /// Renders a policy for display in its country's currency
    pub fn render(policy: &Policy, rate: &ExchangeRate) -> Result<Self, MoneyError> {
        let premium_local = rate.localize(policy.premium, policy.country)?;
        let coverage_local = rate.localize(policy.coverage, policy.country)?;

        let (premium_inr, coverage_inr) = match policy.country {
            Country::Usa => (None, None),
            Country::India => (Some(premium_local.amount()), Some(coverage_local.amount())),
        };

        Ok(Self {
            id: policy.id,
            policy_name: policy.name.clone(),
            insurance_type: policy.insurance_type.clone(),
            provider: policy.provider.clone(),
            description: policy.description.clone(),
            coverage_amount: policy.coverage.amount(),
            premium_usd: policy.premium.amount(),
            premium_formatted: premium_local.format_grouped(),
            coverage_formatted: coverage_local.format_grouped(),
            premium_inr,
            coverage_inr,
        })
    }

    /// Renders a whole search result, preserving the incoming order
    pub fn render_all(policies: &[Policy], rate: &ExchangeRate) -> Result<Vec<Self>, MoneyError> {
        policies.iter().map(|p| Self::render(p, rate)).collect()
    }
}
