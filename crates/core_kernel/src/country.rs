//! The closed set of supported countries
//!
//! Both the policy catalog and the profile store are partitioned by country.
//! The partition key is never interpolated from user input: requests carry a
//! free-text country code which must parse into this enumeration before any
//! query runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::money::Currency;

/// A supported country partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Usa,
    India,
}

/// Error returned when a country code is not supported
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported country: '{0}' (expected 'usa' or 'india')")]
pub struct CountryParseError(pub String);

impl Country {
    /// All supported countries
    pub const ALL: [Country; 2] = [Country::Usa, Country::India];

    /// Returns the canonical lowercase code used in URLs and storage
    pub fn code(&self) -> &'static str {
        match self {
            Country::Usa => "usa",
            Country::India => "india",
        }
    }

    /// Returns the human-readable country name
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Usa => "United States",
            Country::India => "India",
        }
    }

    /// Returns the currency amounts are displayed in for this country
    pub fn currency(&self) -> Currency {
        match self {
            Country::Usa => Currency::USD,
            Country::India => Currency::INR,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = CountryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usa" => Ok(Country::Usa),
            "india" => Ok(Country::India),
            other => Err(CountryParseError(other.to_string())),
        }
    }
}
