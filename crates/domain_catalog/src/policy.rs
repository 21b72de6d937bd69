//! The static insurance policy record

use serde::{Deserialize, Serialize};

use core_kernel::{Country, Money};

/// A static insurance product record
///
/// Policies are immutable seed data. Coverage and premium are always held in
/// USD; localization to the display currency happens in the listing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Catalog row identifier
    pub id: i64,
    /// The country partition this policy belongs to
    pub country: Country,
    /// Product name, e.g. "Family Health Shield"
    pub name: String,
    /// Free-text category, e.g. "Health Insurance"
    pub insurance_type: String,
    /// Coverage amount in USD
    pub coverage: Money,
    /// Monthly premium in USD
    pub premium: Money,
    /// Issuing provider name
    pub provider: String,
    /// Short product description
    pub description: String,
}

