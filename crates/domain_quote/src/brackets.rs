//! Static age-bracket premium table

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// One premium tier: ages up to and including `max_age` pay `monthly_usd`
///
/// A bracket with `max_age: None` is open-ended and catches every age above
/// the previous bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumBracket {
    pub max_age: Option<u32>,
    pub monthly_usd: Money,
}

/// The ordered set of premium brackets
///
/// Brackets are evaluated in order; the first bracket whose `max_age` is at
/// least the applicant's age wins. The table always ends with an open-ended
/// bracket, so every age maps to a tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTable {
    brackets: Vec<PremiumBracket>,
}

impl QuoteTable {
    /// Builds a table from brackets ordered by ascending `max_age`
    ///
    /// The caller is responsible for terminating the table with an
    /// open-ended bracket.
    pub fn new(brackets: Vec<PremiumBracket>) -> Self {
        Self { brackets }
    }

    /// Returns the monthly USD premium for the given age
    pub fn monthly_premium(&self, age: u32) -> Money {
        for bracket in &self.brackets {
            match bracket.max_age {
                Some(max) if age <= max => return bracket.monthly_usd,
                None => return bracket.monthly_usd,
                _ => continue,
            }
        }
        // Unreachable for a well-formed table; fall back to the last tier
        self.brackets
            .last()
            .map(|b| b.monthly_usd)
            .unwrap_or_else(|| Money::zero(Currency::USD))
    }
}

impl Default for QuoteTable {
    /// The demo tiers: age <= 20 pays $100, 21-50 pays $200, over 50 pays $500
    fn default() -> Self {
        Self::new(vec![
            PremiumBracket {
                max_age: Some(20),
                monthly_usd: Money::new(dec!(100), Currency::USD),
            },
            PremiumBracket {
                max_age: Some(50),
                monthly_usd: Money::new(dec!(200), Currency::USD),
            },
            PremiumBracket {
                max_age: None,
                monthly_usd: Money::new(dec!(500), Currency::USD),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_boundaries() {
        let table = QuoteTable::default();

        assert_eq!(table.monthly_premium(1).amount(), dec!(100));
        assert_eq!(table.monthly_premium(20).amount(), dec!(100));
        assert_eq!(table.monthly_premium(21).amount(), dec!(200));
        assert_eq!(table.monthly_premium(50).amount(), dec!(200));
        assert_eq!(table.monthly_premium(51).amount(), dec!(500));
        assert_eq!(table.monthly_premium(99).amount(), dec!(500));
    }

    #[test]
    fn test_custom_table() {
        let table = QuoteTable::new(vec![
            PremiumBracket {
                max_age: Some(30),
                monthly_usd: Money::new(dec!(50), Currency::USD),
            },
            PremiumBracket {
                max_age: None,
                monthly_usd: Money::new(dec!(75), Currency::USD),
            },
        ]);

        assert_eq!(table.monthly_premium(30).amount(), dec!(50));
        assert_eq!(table.monthly_premium(31).amount(), dec!(75));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The default table is monotone: older applicants never pay less
        #[test]
        fn premium_is_non_decreasing_in_age(age in 1u32..119u32) {
            let table = QuoteTable::default();
            let younger = table.monthly_premium(age);
            let older = table.monthly_premium(age + 1);
            prop_assert!(younger.amount() <= older.amount());
        }

        /// Every age maps to one of the three configured tiers
        #[test]
        fn every_age_hits_a_tier(age in 0u32..200u32) {
            let table = QuoteTable::default();
            let premium = table.monthly_premium(age).amount();
            prop_assert!(
                premium == dec!(100) || premium == dec!(200) || premium == dec!(500)
            );
        }
    }
}
