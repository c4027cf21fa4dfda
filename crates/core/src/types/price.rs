//! BRL price type with localized parsing and formatting.
//!
//! Prices on the storefront circulate as display text (`"R$ 12,50"`), both
//! in the product catalog and on rendered pages. [`Price::parse`] is the
//! single place that text becomes a number; everything downstream works
//! with a validated, non-negative decimal amount.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from display text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// The input string is empty or whitespace only.
    #[error("price text cannot be empty")]
    Empty,
    /// The input is not a readable pt-BR amount.
    #[error("not a valid price: {text:?}")]
    Invalid {
        /// The rejected input, trimmed.
        text: String,
    },
    /// The input parses to a negative amount.
    #[error("price cannot be negative: {text:?}")]
    Negative {
        /// The rejected input, trimmed.
        text: String,
    },
}

/// A non-negative amount in BRL.
///
/// Backed by [`Decimal`] arithmetic; never constructed from a float.
///
/// ## Accepted input
///
/// [`Price::parse`] reads pt-BR price text: an optional `R$` marker,
/// `.` as thousands grouping, and `,` as the decimal separator.
///
/// ```
/// use quitanda_core::Price;
///
/// let unit = Price::parse("R$ 1.234,56").unwrap();
/// assert_eq!(unit.to_string(), "R$ 1.234,56");
///
/// // The marker and the decimal part are both optional
/// assert!(Price::parse("12,50").is_ok());
/// assert!(Price::parse("R$ 12").is_ok());
///
/// // Malformed text is rejected, never coerced
/// assert!(Price::parse("R$ caro").is_err());
/// assert!(Price::parse("R$ -5,00").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount, `R$ 0,00`.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Price` from pt-BR display text.
    ///
    /// The `R$` marker is optional. `.` is treated as the thousands
    /// separator and stripped; `,` is the decimal separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or whitespace only
    /// - Does not read as a decimal amount after normalization
    /// - Is negative
    pub fn parse(text: &str) -> Result<Self, PriceParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let unmarked = trimmed.strip_prefix("R$").map_or(trimmed, str::trim_start);

        // pt-BR digits: "1.234,56" -> "1234.56"
        let normalized: String = unmarked
            .chars()
            .filter(|&c| c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let amount = Decimal::from_str(&normalized).map_err(|_| PriceParseError::Invalid {
            text: trimmed.to_owned(),
        })?;

        if amount.is_sign_negative() {
            return Err(PriceParseError::Negative {
                text: trimmed.to_owned(),
            });
        }

        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns this unit price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Formats as canonical pt-BR currency text, e.g. `R$ 1.234,56`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0.round_dp(2));
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));
        write!(f, "R$ {},{frac_part}", group_thousands(int_part))
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Insert `.` thousands separators into a run of integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
