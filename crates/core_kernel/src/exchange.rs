//! Fixed USD to INR exchange rate
//!
//! The portal uses a single demo rate rather than a live currency feed.
//! The rate is configurable at startup and never changes while the process
//! runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::country::Country;
use crate::money::{Currency, Money, MoneyError};

/// Where the rate comes from, reported on the exchange-rate endpoint
pub const RATE_SOURCE: &str = "demo_fixed_rate";

/// The process-wide USD to INR conversion rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    usd_to_inr: Decimal,
}

impl ExchangeRate {
    /// The default demo rate
    pub const DEFAULT_USD_TO_INR: Decimal = dec!(83.50);

    /// Creates an exchange rate with a custom USD to INR factor
    pub fn new(usd_to_inr: Decimal) -> Self {
        Self { usd_to_inr }
    }

    /// Returns the USD to INR factor
    pub fn usd_to_inr(&self) -> Decimal {
        self.usd_to_inr
    }

    /// Converts a USD amount to INR, rounded to two decimal places
    pub fn convert(&self, usd: Money) -> Result<Money, MoneyError> {
        if usd.currency() != Currency::USD {
            return Err(MoneyError::CurrencyMismatch(
                usd.currency().to_string(),
                Currency::USD.to_string(),
            ));
        }
        let inr = usd.amount() * self.usd_to_inr;
        Ok(Money::new(inr.round_dp(2), Currency::INR))
    }

    /// Converts a USD amount into the display currency for `country`
    ///
    /// USD amounts pass through unchanged for the USA.
    pub fn localize(&self, usd: Money, country: Country) -> Result<Money, MoneyError> {
        match country {
            Country::Usa => Ok(usd),
            Country::India => self.convert(usd),
        }
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USD_TO_INR)
    }
}
