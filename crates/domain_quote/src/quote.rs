//! Country-localized quote rendering

use serde::Serialize;

use core_kernel::{Country, ExchangeRate, Money, MoneyError};

use crate::brackets::QuoteTable;

/// An estimated monthly premium, localized for display
#[derive(Debug, Clone, Serialize)]
pub struct PremiumQuote {
    /// The tier amount in USD
    pub monthly_usd: Money,
    /// The amount in the display currency
    pub monthly_local: Money,
    /// The country the quote was rendered for
    pub country: Country,
}

impl PremiumQuote {
    /// Estimates the monthly premium for an applicant
    ///
    /// Looks up the age bracket, converts to INR for India, and keeps the
    /// USD amount for reference.
    pub fn estimate(
        table: &QuoteTable,
        rate: &ExchangeRate,
        country: Country,
        age: u32,
    ) -> Result<Self, MoneyError> {
        let monthly_usd = table.monthly_premium(age);
        let monthly_local = rate.localize(monthly_usd, country)?;

        Ok(Self {
            monthly_usd,
            monthly_local,
            country,
        })
    }

    /// Renders the quote as the API's display string, e.g. "$100 per month"
    /// or "₹16,600 per month"
    pub fn display(&self) -> String {
        format!("{} per month", self.monthly_local.format_whole())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usa_quote_display() {
        let quote = PremiumQuote::estimate(
            &QuoteTable::default(),
            &ExchangeRate::default(),
            Country::Usa,
            20,
        )
        .unwrap();

        assert_eq!(quote.display(), "$100 per month");
    }

    #[test]
    fn test_india_quote_display_at_rate_83() {
        let quote = PremiumQuote::estimate(
            &QuoteTable::default(),
            &ExchangeRate::new(dec!(83)),
            Country::India,
            21,
        )
        .unwrap();

        // $200 tier converted at the fixed rate
        assert_eq!(quote.monthly_local.amount(), dec!(16600.00));
        assert_eq!(quote.display(), "₹16,600 per month");
    }
}
