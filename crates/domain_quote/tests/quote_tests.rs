//! Premium estimation tests
//!
//! Exercises the static bracket boundaries and the localized display
//! strings for both countries.

use core_kernel::{Country, ExchangeRate};
use domain_quote::{PremiumQuote, QuoteTable};
use rust_decimal_macros::dec;

mod bracket_boundaries {
    use super::*;

    /// Ages at and around each boundary land in the expected tier
    #[test]
    fn test_boundary_ages() {
        let table = QuoteTable::default();
        let rate = ExchangeRate::default();

        let cases = [
            (19, "$100 per month"),
            (20, "$100 per month"),
            (21, "$200 per month"),
            (50, "$200 per month"),
            (51, "$500 per month"),
            (80, "$500 per month"),
        ];

        for (age, expected) in cases {
            let quote = PremiumQuote::estimate(&table, &rate, Country::Usa, age).unwrap();
            assert_eq!(quote.display(), expected, "age {}", age);
        }
    }
}

mod localized_display {
    use super::*;

    /// India quotes convert at the configured rate and group thousands
    #[test]
    fn test_india_tiers_at_rate_83() {
        let table = QuoteTable::default();
        let rate = ExchangeRate::new(dec!(83));

        let cases = [
            (20, "₹8,300 per month"),
            (35, "₹16,600 per month"),
            (60, "₹41,500 per month"),
        ];

        for (age, expected) in cases {
            let quote = PremiumQuote::estimate(&table, &rate, Country::India, age).unwrap();
            assert_eq!(quote.display(), expected, "age {}", age);
        }
    }

    /// The USD reference amount is kept regardless of country
    #[test]
    fn test_usd_reference_amount_is_preserved() {
        let quote = PremiumQuote::estimate(
            &QuoteTable::default(),
            &ExchangeRate::default(),
            Country::India,
            40,
        )
        .unwrap();

        assert_eq!(quote.monthly_usd.amount(), dec!(200));
    }
}
