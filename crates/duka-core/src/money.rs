//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a till that is off by one cent:                                     │
//! │    KES 250.00 × 16% VAT = KES 40.000000000000004 → printed as 40.00    │
//! │    but compared as ≠ 40.00 → "insufficient tender" on exact payment    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    25000 cents × 1600 bps = exactly 4000 cents, every time             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use duka_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(10000); // KES 100.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // KES 200.00
//! let total = doubled + Money::from_cents(5000); // KES 250.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(100.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;
use crate::CURRENCY_CODE;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (change previews can go below zero)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Product.price_cents ──► CartLine.line_total ──► Cart.subtotal         │
/// │                                                                         │
/// │  Cart.subtotal ──► VAT Calculation ──► Cart.total ──► tender check     │
/// │                                                                         │
/// │  tendered − total ──► change preview / settled change                  │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use duka_core::money::Money;
    ///
    /// let price = Money::from_cents(25000); // Represents KES 250.00
    /// assert_eq!(price.cents(), 25000);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The cart, tax math, and tender comparison all use cents. Only the
    /// wire layer converts to decimal units, and only at the boundary.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a plain decimal string ("300", "299.99", ".50") into Money.
    ///
    /// This is how free-text tender input becomes an amount. The whole
    /// string must be an unsigned decimal with at most two fraction
    /// digits; anything else (signs, thousands separators, sub-cent
    /// precision, trailing text) yields `None`. Callers treat `None` as
    /// zero tendered, which then fails the sufficiency check naturally.
    ///
    /// ## Example
    /// ```rust
    /// use duka_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("300"), Some(Money::from_cents(30000)));
    /// assert_eq!(Money::parse_decimal("299.9"), Some(Money::from_cents(29990)));
    /// assert_eq!(Money::parse_decimal("banana"), None);
    /// assert_eq!(Money::parse_decimal("1.005"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        // One dot at most, two fraction digits at most, digits only.
        if fraction.contains('.') || fraction.len() > 2 {
            return None;
        }
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return None;
        }

        let units: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut cents: i64 = if fraction.is_empty() { 0 } else { fraction.parse().ok()? };
        if fraction.len() == 1 {
            cents *= 10;
        }

        units.checked_mul(100)?.checked_add(cents).map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (shillings) portion.
    ///
    /// ## Example
    /// ```rust
    /// use duka_core::money::Money;
    ///
    /// let price = Money::from_cents(25099);
    /// assert_eq!(price.units(), 250);
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.units(), -5);
    /// ```
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax at the given rate with half-up rounding.
    ///
    /// ## Implementation
    /// Integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use duka_core::money::Money;
    /// use duka_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(25000); // KES 250.00
    /// let rate = TaxRate::from_bps(1600);      // 16% VAT
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // KES 250.00 × 16% = KES 40.00
    /// assert_eq!(tax.cents(), 4000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Cart Subtotal: KES 250.00
    ///      │
    ///      ▼
    /// calculate_tax(16%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// VAT: KES 40.00
    ///      │
    ///      ▼
    /// Grand Total: KES 290.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 1600 = 16%
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use duka_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(10000); // KES 100.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 20000); // KES 200.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. User-facing output goes through
/// `TerminalConfig::format_currency` in the app, which respects the
/// configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{} {}{}.{:02}",
            CURRENCY_CODE,
            sign,
            self.units().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(25099);
        assert_eq!(money.cents(), 25099);
        assert_eq!(money.units(), 250);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(10099)), "KES 100.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "KES 5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "KES -5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "KES 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_vat_calculation_exact() {
        // KES 250.00 at 16% = KES 40.00, no rounding involved
        let amount = Money::from_cents(25000);
        let rate = TaxRate::from_bps(1600);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 4000);
    }

    #[test]
    fn test_vat_calculation_with_rounding() {
        // KES 3.33 at 16% = 0.5328 → rounds to KES 0.53
        let amount = Money::from_cents(333);
        let rate = TaxRate::from_bps(1600);
        let tax = amount.calculate_tax(rate);
        assert_eq!(tax.cents(), 53);

        // KES 0.97 at 16% = 0.1552 → rounds to KES 0.16
        let small = Money::from_cents(97);
        assert_eq!(small.calculate_tax(rate).cents(), 16);
    }

    #[test]
    fn test_parse_decimal_accepts_plain_amounts() {
        assert_eq!(Money::parse_decimal("300"), Some(Money::from_cents(30000)));
        assert_eq!(Money::parse_decimal("300.00"), Some(Money::from_cents(30000)));
        assert_eq!(Money::parse_decimal("299.9"), Some(Money::from_cents(29990)));
        assert_eq!(Money::parse_decimal("0.05"), Some(Money::from_cents(5)));
        assert_eq!(Money::parse_decimal(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal("250."), Some(Money::from_cents(25000)));
        assert_eq!(Money::parse_decimal("  290.00 "), Some(Money::from_cents(29000)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("   "), None);
        assert_eq!(Money::parse_decimal("."), None);
        assert_eq!(Money::parse_decimal("abc"), None);
        assert_eq!(Money::parse_decimal("300abc"), None);
        assert_eq!(Money::parse_decimal("-300"), None);
        assert_eq!(Money::parse_decimal("1,000"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
        // Sub-cent precision is not representable
        assert_eq!(Money::parse_decimal("1.005"), None);
    }

    #[test]
    fn test_parse_decimal_overflow_is_none() {
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(5000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 15000);
    }

    /// A negative change preview (tendered below total) must display with
    /// the sign, since the payment screen shows it live while typing.
    #[test]
    fn test_negative_change_preview_display() {
        let total = Money::from_cents(29000);
        let tendered = Money::from_cents(20000);
        let preview = tendered - total;
        assert!(preview.is_negative());
        assert_eq!(format!("{preview}"), "KES -90.00");
    }
}
