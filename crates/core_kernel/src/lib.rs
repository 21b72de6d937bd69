//! Core Kernel - Foundational types for the insurance search portal
//!
//! This crate provides the fundamental building blocks used across all domain
//! modules:
//! - Money types with precise decimal arithmetic and grouped formatting
//! - The closed set of supported countries
//! - The fixed USD to INR exchange rate
//! - Strongly-typed identifiers

pub mod country;
pub mod exchange;
pub mod identifiers;
pub mod money;

pub use country::{Country, CountryParseError};
pub use exchange::ExchangeRate;
pub use identifiers::ProfileId;
pub use money::{Currency, Money, MoneyError};
