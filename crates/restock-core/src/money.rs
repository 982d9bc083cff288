//! # Money Module
//!
//! Monetary values in integer cents, plus parsing of the noisy price text
//! carried on inventory rows.
//!
//! ## Integer Money
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every monetary computation in Restock runs in integer cents.          │
//! │                                                                         │
//! │    item.unit_price  "$4.99"  ──parse──►  Money(499)                    │
//! │    subtotal = Money(499) × ask_count                                   │
//! │    total    = Σ subtotal                                               │
//! │    discounted total = ceil-to-$5(total × (100 - pct) / 100)            │
//! │                                                                         │
//! │  The raw price TEXT stays on the item (users edit it in place); the    │
//! │  parsed cents value is derived on demand and never stored.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use crate::TOTAL_ROUNDING_STEP_CENTS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Single-field tuple struct over `i64`. Prices in this system are never
/// negative: parsing clamps at zero and no transition subtracts below it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use restock_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000); // $10.00
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 3000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the value as a bare two-decimal string, no currency symbol.
    ///
    /// Used for the `Subtotal` column of the invoice export.
    ///
    /// ## Example
    /// ```rust
    /// use restock_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3000).to_decimal_string(), "30.00");
    /// assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

/// Display shows money with a dollar sign, for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_decimal_string())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Price Text Parsing
// =============================================================================

/// Parses noisy price text into cents.
///
/// ## Behavior
/// - Skips any non-numeric prefix ("$4.99", "USD 4.99")
/// - Reads one decimal literal: digits, at most one point, more digits
/// - Stops at the first character that cannot extend the literal, so
///   grouping commas cut the number short ("1,299.99" parses as $1.00,
///   matching the legacy parser)
/// - Rounds to cents on the third fraction digit
/// - No digits at all parses as zero; the result is never negative
///
/// ## Example
/// ```rust
/// use restock_core::money::parse_price;
///
/// assert_eq!(parse_price("$10.00").cents(), 1000);
/// assert_eq!(parse_price("4.99").cents(), 499);
/// assert_eq!(parse_price(".5").cents(), 50);
/// assert_eq!(parse_price("n/a").cents(), 0);
/// ```
pub fn parse_price(text: &str) -> Money {
    let mut chars = text.chars().peekable();

    // Skip the non-numeric prefix. A '.' only starts the literal when a
    // digit follows it, same as the legacy float parser.
    loop {
        match chars.peek() {
            Some(c) if c.is_ascii_digit() => break,
            Some('.') => {
                let mut ahead = chars.clone();
                ahead.next();
                if matches!(ahead.peek(), Some(d) if d.is_ascii_digit()) {
                    break;
                }
                chars.next();
            }
            Some(_) => {
                chars.next();
            }
            None => return Money::zero(),
        }
    }

    let mut saw_digit = false;
    let mut whole: i64 = 0;
    while let Some(c) = chars.peek() {
        if let Some(d) = c.to_digit(10) {
            saw_digit = true;
            whole = whole.saturating_mul(10).saturating_add(d as i64);
            chars.next();
        } else {
            break;
        }
    }

    let mut cents = whole.saturating_mul(100);
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut frac_digits = [None, None, None];
        let mut i = 0;
        while let Some(c) = chars.peek() {
            if let Some(d) = c.to_digit(10) {
                saw_digit = true;
                if i < frac_digits.len() {
                    frac_digits[i] = Some(d as i64);
                }
                i += 1;
                chars.next();
            } else {
                break;
            }
        }
        cents = cents
            .saturating_add(frac_digits[0].unwrap_or(0) * 10)
            .saturating_add(frac_digits[1].unwrap_or(0));
        // Round half up on the third fraction digit.
        if frac_digits[2].unwrap_or(0) >= 5 {
            cents = cents.saturating_add(1);
        }
    }

    if saw_digit {
        Money::from_cents(cents)
    } else {
        Money::zero()
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount on the invoice total, in whole percent.
///
/// Clamped to 0..=100 on construction: values outside the range degrade
/// to the nearest bound rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u8);

impl DiscountRate {
    /// Creates a discount rate from a whole percent, clamping to 0..=100.
    #[inline]
    pub fn from_percent(pct: i64) -> Self {
        DiscountRate(pct.clamp(0, 100) as u8)
    }

    /// Returns the rate as a whole percent.
    #[inline]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }
}

/// Applies the discount to a total and rounds UP to the next $5 step.
///
/// Computed as `ceil(total_cents × (100 - pct) / (100 × 500)) × 500`, in
/// one integer division so sub-cent remainders from the percentage never
/// get truncated before the ceiling is taken.
///
/// ## Example
/// ```rust
/// use restock_core::money::{discounted_total, DiscountRate, Money};
///
/// // $30.00 at 10% off is $27.00, rounded up to the next $5: $30.00
/// let total = Money::from_cents(3000);
/// let rate = DiscountRate::from_percent(10);
/// assert_eq!(discounted_total(total, rate).cents(), 3000);
/// ```
pub fn discounted_total(total: Money, discount: DiscountRate) -> Money {
    let remaining = (100 - discount.percent() as i64) as i128;
    let numer = total.cents() as i128 * remaining;
    let denom = 100i128 * TOTAL_ROUNDING_STEP_CENTS as i128;
    let steps = (numer + denom - 1) / denom;
    Money::from_cents((steps * TOTAL_ROUNDING_STEP_CENTS as i128) as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_display() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(format!("{}", money), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(3000).to_decimal_string(), "30.00");
        assert_eq!(Money::from_cents(1).to_decimal_string(), "0.01");
        assert_eq!(Money::from_cents(1234).to_decimal_string(), "12.34");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(4).cents(), 4000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("10").cents(), 1000);
        assert_eq!(parse_price("10.5").cents(), 1050);
        assert_eq!(parse_price("4.99").cents(), 499);
        assert_eq!(parse_price("10.").cents(), 1000);
        assert_eq!(parse_price(".5").cents(), 50);
    }

    #[test]
    fn test_parse_price_with_prefix() {
        assert_eq!(parse_price("$10.00").cents(), 1000);
        assert_eq!(parse_price("USD 4.25").cents(), 425);
        assert_eq!(parse_price("  $0.99").cents(), 99);
    }

    #[test]
    fn test_parse_price_garbage_is_zero() {
        assert_eq!(parse_price("").cents(), 0);
        assert_eq!(parse_price("n/a").cents(), 0);
        assert_eq!(parse_price("$").cents(), 0);
        assert_eq!(parse_price("...").cents(), 0);
    }

    #[test]
    fn test_parse_price_stops_at_first_non_numeric() {
        // Grouping commas cut the literal short, matching the legacy parser.
        assert_eq!(parse_price("1,299.99").cents(), 100);
        assert_eq!(parse_price("10.50 per box").cents(), 1050);
    }

    #[test]
    fn test_parse_price_rounds_third_fraction_digit() {
        assert_eq!(parse_price("1.005").cents(), 101);
        assert_eq!(parse_price("1.004").cents(), 100);
        assert_eq!(parse_price("1.0049").cents(), 100);
    }

    #[test]
    fn test_discount_rate_clamps() {
        assert_eq!(DiscountRate::from_percent(10).percent(), 10);
        assert_eq!(DiscountRate::from_percent(-3).percent(), 0);
        assert_eq!(DiscountRate::from_percent(250).percent(), 100);
    }

    #[test]
    fn test_discounted_total_spec_example() {
        // total $30, 10% discount: ceil(27 / 5) * 5 = $30
        let total = Money::from_cents(3000);
        assert_eq!(
            discounted_total(total, DiscountRate::from_percent(10)).cents(),
            3000
        );
    }

    #[test]
    fn test_discounted_total_rounds_up_without_discount() {
        // $27.00 at 0% still rounds up to $30.00
        let total = Money::from_cents(2700);
        assert_eq!(discounted_total(total, DiscountRate::zero()).cents(), 3000);

        // Exact multiples stay put
        let total = Money::from_cents(2500);
        assert_eq!(discounted_total(total, DiscountRate::zero()).cents(), 2500);
    }

    #[test]
    fn test_discounted_total_sub_cent_remainder() {
        // $10.01 at 10% is 900.9 cents; the ceiling acts on the exact
        // product, landing on $10.00 rather than $9.something.
        let total = Money::from_cents(1001);
        assert_eq!(
            discounted_total(total, DiscountRate::from_percent(10)).cents(),
            1000
        );
    }

    #[test]
    fn test_discounted_total_edges() {
        assert_eq!(
            discounted_total(Money::zero(), DiscountRate::from_percent(10)).cents(),
            0
        );
        assert_eq!(
            discounted_total(Money::from_cents(3000), DiscountRate::from_percent(100)).cents(),
            0
        );
    }
}
