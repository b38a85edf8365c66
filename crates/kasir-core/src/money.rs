//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (hundredths)                         │
//! │    Rp12.000,50 is stored as 1_200_050                                   │
//! │    Totals and change are exact integer sums                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! The operators saturate at the `i64` bounds instead of panicking. Code
//! that must reject an out-of-range amount (the cart) uses
//! [`Money::checked_multiply_quantity`] and [`Money::checked_add`].
//!
//! ## On Disk
//! The catalog and ledger files hold plain decimal numbers (`2000.0`,
//! `12000.5`). `Money` converts at the serde boundary only; arithmetic never
//! touches floating point.
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_major(2000);
//! let subtotal = price * 3;
//! assert_eq!(subtotal, Money::from_major(6000));
//!
//! let paid = Money::parse("6500.50").unwrap();
//! assert_eq!((paid - subtotal).minor(), 50_050);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::error::ValidationError;

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in hundredths of the currency unit.
///
/// ## Where Money is Used
/// ```text
/// Item.price ──► CartLine.unit_price ──► CartLine.subtotal
///                                              │
///                                              ▼
///                         Cart.total ──► payment ──► change
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (hundredths).
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(15_000).minor(), 1_500_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` if the result does not fit.
    ///
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let line = Money::from_major(2000).checked_multiply_quantity(3);
    /// assert_eq!(line, Some(Money::from_major(6000)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Parses a decimal amount typed by the operator.
    ///
    /// Accepts an optional sign, digits, and up to two fractional digits:
    /// `"12000"`, `"12000.5"`, `"0.75"`, `"-3"`. Anything else is an
    /// [`ValidationError::InvalidFormat`].
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = input.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a number (e.g. 12000 or 12000.5)"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("must be a number (e.g. 12000 or 12000.5)"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let too_large = || invalid("amount is too large");

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => frac.parse().map_err(|_| too_large())?,
        };

        let total = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -total } else { total }))
    }

    /// Rounds to whole currency units using round-half-to-even.
    ///
    /// ## Rounding Rule
    /// ```text
    /// 12.50 → 12   (12 is even)
    /// 13.50 → 14   (14 is even)
    /// 12.51 → 13
    /// ```
    pub fn round_to_major(&self) -> i64 {
        let abs = self.0.abs();
        let whole = abs / MINOR_PER_MAJOR;
        let rem = abs % MINOR_PER_MAJOR;
        let half = MINOR_PER_MAJOR / 2;

        let rounded = if rem > half || (rem == half && whole % 2 == 1) {
            whole + 1
        } else {
            whole
        };

        if self.0 < 0 {
            -rounded
        } else {
            rounded
        }
    }

    /// Formats the rounded whole amount with a thousands separator.
    ///
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1_234_567).format_grouped("."), "1.234.567");
    /// assert_eq!(Money::from_major(950).format_grouped("."), "950");
    /// ```
    pub fn format_grouped(&self, separator: &str) -> String {
        let units = self.round_to_major();
        let digits = units.unsigned_abs().to_string();

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
        if units < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(separator);
            }
            out.push(ch);
        }
        out
    }

    fn to_decimal(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor.abs() > i64::MAX as f64 {
            return None;
        }
        Some(Money(minor as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal with two fractional digits, for logs and error messages.
/// Console output uses [`Money::format_grouped`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / MINOR_PER_MAJOR,
            abs % MINOR_PER_MAJOR
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("invalid monetary amount: {value}")))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(2000);
        assert_eq!(money.minor(), 200_000);
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1_200_050)), "12000.50");
        assert_eq!(format!("{}", Money::from_major(5)), "5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(500);

        assert_eq!(a + b, Money::from_major(1500));
        assert_eq!(a - b, Money::from_major(500));
        assert_eq!(a * 3, Money::from_major(3000));

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_major(2000));
    }

    #[test]
    fn test_overflow_is_checked_or_saturated() {
        let huge = Money::from_minor(i64::MAX / 2 + 1);

        assert_eq!(huge.checked_multiply_quantity(2), None);
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(
            Money::from_major(10).checked_add(Money::from_major(5)),
            Some(Money::from_major(15))
        );

        assert_eq!(huge + huge, Money::from_minor(i64::MAX));
        assert_eq!(huge * 1000, Money::from_minor(i64::MAX));
        let total: Money = [huge, huge, huge].iter().sum();
        assert_eq!(total, Money::from_minor(i64::MAX));
    }

    #[test]
    fn test_parse_accepts_decimals() {
        assert_eq!(Money::parse("12000").unwrap(), Money::from_major(12000));
        assert_eq!(Money::parse(" 12000.5 ").unwrap(), Money::from_minor(1_200_050));
        assert_eq!(Money::parse("0.75").unwrap(), Money::from_minor(75));
        assert_eq!(Money::parse(".5").unwrap(), Money::from_minor(50));
        assert_eq!(Money::parse("-3").unwrap(), Money::from_major(-3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12,000").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(Money::from_minor(1250).round_to_major(), 12);
        assert_eq!(Money::from_minor(1350).round_to_major(), 14);
        assert_eq!(Money::from_minor(1251).round_to_major(), 13);
        assert_eq!(Money::from_minor(1249).round_to_major(), 12);
        assert_eq!(Money::from_minor(-1350).round_to_major(), -14);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_major(0).format_grouped("."), "0");
        assert_eq!(Money::from_major(999).format_grouped("."), "999");
        assert_eq!(Money::from_major(1000).format_grouped("."), "1.000");
        assert_eq!(Money::from_major(15_000).format_grouped("."), "15.000");
        assert_eq!(Money::from_major(1_234_567).format_grouped(","), "1,234,567");
        assert_eq!(Money::from_major(-2500).format_grouped("."), "-2.500");
        assert_eq!(Money::from_minor(1_999_950).format_grouped("."), "20.000");
    }

    #[test]
    fn test_serde_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_minor(1_200_050)).unwrap();
        assert_eq!(json, "12000.5");

        let back: Money = serde_json::from_str("2000").unwrap();
        assert_eq!(back, Money::from_major(2000));

        let back: Money = serde_json::from_str("12000.5").unwrap();
        assert_eq!(back, Money::from_minor(1_200_050));
    }
}
