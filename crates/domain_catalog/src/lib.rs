//! Policy Catalog Domain
//!
//! The catalog is a fixed, per-country set of insurance policies seeded once
//! at startup and never mutated by the running service. This crate holds the
//! `Policy` entity and the listing view that renders premium and coverage
//! amounts in the requesting country's currency.

pub mod listing;
pub mod policy;

pub use listing::PolicyListing;
pub use policy::Policy;
