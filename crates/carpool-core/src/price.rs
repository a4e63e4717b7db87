//! Prices and the non-negative invariant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A per-seat price in whole dollars. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    /// Wrap a dollar amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for amounts below zero.
    pub fn new(dollars: i64) -> Result<Self, PriceError> {
        if dollars < 0 {
            return Err(PriceError::Negative { dollars });
        }
        Ok(Self(dollars))
    }

    /// The amount in whole dollars.
    #[must_use]
    pub const fn dollars(self) -> i64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dollars: i64 = s.parse().map_err(|_| PriceError::NotANumber {
            input: s.to_string(),
        })?;
        Self::new(dollars)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Errors that can occur when parsing a price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    /// The input was not an integer.
    #[error("invalid price: {input:?} (expected an integer)")]
    NotANumber {
        /// The rejected input.
        input: String,
    },

    /// The amount was negative.
    #[error("invalid price: {dollars} (please choose a non negative price)")]
    Negative {
        /// The rejected amount.
        dollars: i64,
    },
}
