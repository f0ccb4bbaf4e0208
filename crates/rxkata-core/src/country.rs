//! Country record - the only data type the kata operates on.
//!  Records are immutable once built; equality is purely structural.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub population: u64,
    pub currency: String,
}

impl Country {
    pub fn new(name: impl Into<String>, population: u64, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.population, self.currency)
    }
}

/// Strictly-greater comparison against a population threshold
pub fn is_above(country: &Country, threshold: u64) -> bool {
    country.population > threshold
}
