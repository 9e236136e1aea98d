//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (kopecks, cents) as i64 so that
//! sums reported to the user never pick up binary floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of minor units in one major unit
const MINOR_PER_MAJOR: i64 = 100;

/// Largest magnitude a single transaction or budget may carry, in minor units.
///
/// Ten trillion major units. Keeps sums over any realistic ledger inside `i64`.
pub const MAX_AMOUNT_MINOR: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use family_budget::models::Money;
    /// let amount = Money::from_minor(350_050); // 3500.50
    /// assert_eq!(amount.major(), 3500);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    ///
    /// # Examples
    /// ```
    /// use family_budget::models::Money;
    /// let amount = Money::from_major(-3500);
    /// assert_eq!(amount.minor(), -350_000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major * MINOR_PER_MAJOR)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude is within [`MAX_AMOUNT_MINOR`]
    pub const fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= MAX_AMOUNT_MINOR as u64
    }

    /// The share of `total` this amount represents, in percent.
    ///
    /// Returns 0 when `total` is zero.
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        self.0 as f64 / total.0 as f64 * 100.0
    }

    /// Divide evenly across `count` items, rounding half away from zero.
    ///
    /// Returns zero when `count` is zero.
    pub fn divide_rounded(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        let n = count as i128;
        let v = self.0 as i128;
        let adjust = if v < 0 { -n } else { n };
        Self(((2 * v + adjust) / (2 * n)) as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10,50", "1 250.00", "10 ₽", "$10"
    ///
    /// Rejects amounts that cannot be represented exactly: more than two
    /// fractional digits, or a lone comma followed by three digits ("1,250"),
    /// which reads as digit grouping as easily as a decimal separator.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Drop currency symbols and digit grouping
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '$' | '₽' | '€' | ' ' | '\u{a0}' | '_'))
            .collect();
        let cleaned = if cleaned.contains('.') {
            cleaned
        } else {
            if let Some((_, after)) = cleaned.rsplit_once(',') {
                if after.len() == 3 {
                    return Err(MoneyParseError::InvalidFormat(original.to_string()));
                }
            }
            cleaned.replace(',', ".")
        };

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let minor = match cleaned.split_once('.') {
            Some((whole, fraction)) => {
                if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
                    return Err(MoneyParseError::InvalidFormat(original.to_string()));
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))?
                };
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().unwrap_or(0) * 10,
                    2 => fraction.parse().unwrap_or(0),
                    _ => return Err(MoneyParseError::InvalidFormat(original.to_string())),
                };
                whole
                    .checked_mul(MINOR_PER_MAJOR)
                    .and_then(|w| w.checked_add(fraction))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?
            }
            None => cleaned
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(MINOR_PER_MAJOR))
                .ok_or_else(|| MoneyParseError::InvalidFormat(original.to_string()))?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a trailing currency symbol, e.g. `-3500.00 ₽`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_negative() {
            format!("-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            format!("{}.{:02}", self.major(), self.minor_part())
        };
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1050)), "10.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{}", Money::from_minor(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_minor(5)), "0.05");
        assert_eq!(format!("{:>8}", Money::from_minor(5)), "    0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_major(-3500).format_with_symbol("₽"), "-3500.00 ₽");
        assert_eq!(Money::from_major(12).format_with_symbol(""), "12.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert_eq!(Money::parse("10,25").unwrap().minor(), 1025);
        assert_eq!(Money::parse("-3 500 ₽").unwrap().minor(), -350_000);
        assert_eq!(Money::parse(".5").unwrap().minor(), 50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12x").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_parse_rejects_inexact_amounts() {
        assert!(Money::parse("10.999").is_err());
        assert!(Money::parse("10,999").is_err());
        assert!(Money::parse("1,250").is_err());
        assert!(Money::parse("-1,250 ₽").is_err());
        assert!(Money::parse("99999999999999999999").is_err());

        assert_eq!(Money::parse("1,25").unwrap().minor(), 125);
        assert_eq!(Money::parse("1 250,50").unwrap().minor(), 125_050);
        assert_eq!(Money::parse("1250.00").unwrap().minor(), 125_000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_minor(i64::MAX / 2 + 10);
        assert_eq!((big + big).minor(), i64::MAX);
        assert_eq!((-big - big).minor(), i64::MIN);

        let total: Money = vec![big, big, big].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    #[test]
    fn test_within_limit() {
        assert!(Money::from_minor(MAX_AMOUNT_MINOR).is_within_limit());
        assert!(Money::from_minor(-MAX_AMOUNT_MINOR).is_within_limit());
        assert!(!Money::from_minor(MAX_AMOUNT_MINOR + 1).is_within_limit());
        assert!(!Money::from_minor(i64::MIN).is_within_limit());
    }

    #[test]
    fn test_percentage_of() {
        let part = Money::from_major(3500);
        let total = Money::from_major(6300);
        assert!((part.percentage_of(total) - 55.555_555).abs() < 1e-4);
        assert_eq!(part.percentage_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_divide_rounded() {
        assert_eq!(Money::from_minor(7).divide_rounded(2), Money::from_minor(4));
        assert_eq!(Money::from_minor(-7).divide_rounded(2), Money::from_minor(-4));
        assert_eq!(Money::from_minor(10).divide_rounded(3), Money::from_minor(3));
        assert_eq!(Money::from_minor(10).divide_rounded(0), Money::zero());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.minor(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
