//! Cross-module tests for the kernel's public API

use rust_decimal_macros::dec;

use core_kernel::{Country, Currency, ExchangeRate, Money, ProfileId};

#[test]
fn test_country_drives_currency_and_formatting() {
    let premium = Money::new(dec!(1000), Currency::USD);
    let rate = ExchangeRate::default();

    for country in Country::ALL {
        let localized = rate.localize(premium, country).unwrap();
        assert_eq!(localized.currency(), country.currency());
        assert!(localized
            .format_grouped()
            .starts_with(country.currency().symbol()));
    }
}

#[test]
fn test_localized_premium_display_chain() {
    // The full path a quote takes: USD tier -> INR -> display string
    let rate = ExchangeRate::new(dec!(83.50));
    let tier = Money::new(dec!(500), Currency::USD);

    let localized = rate.localize(tier, Country::India).unwrap();
    assert_eq!(localized.format_grouped(), "₹41,750.00");
    assert_eq!(localized.format_whole(), "₹41,750");
}

#[test]
fn test_profile_id_serde_is_bare_uuid() {
    let id = ProfileId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let back: ProfileId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
