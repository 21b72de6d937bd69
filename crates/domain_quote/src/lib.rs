//! Premium Estimation Domain
//!
//! Maps an applicant's age onto one of three static monthly premium tiers and
//! renders the result in the requesting country's currency. The brackets are
//! demo placeholder values, kept configurable rather than derived from any
//! actuarial model.

pub mod brackets;
pub mod quote;

pub use brackets::{PremiumBracket, QuoteTable};
pub use quote::PremiumQuote;
