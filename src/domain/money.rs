use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A currency amount, normalized to four decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const TARGET_DECIMALS: u32 = 4;

    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Rounds to the target scale using banker's rounding (half to even).
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.round_dp(Self::TARGET_DECIMALS))
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let value = Decimal::from_str(s.trim()).ok()?;
        Some(Self::from_decimal(value))
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl core::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl core::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn bankers_round_half_even() {
        let v = Money::from_decimal_str("1.23445").unwrap(); // 1.23445 -> 1.2344
        assert_eq!(format!("{}", v), "1.2344");
        let v = Money::from_decimal_str("1.23455").unwrap(); // 1.23455 -> 1.2346
        assert_eq!(format!("{}", v), "1.2346");
        let v = Money::from_decimal_str("-1.23445").unwrap();
        assert_eq!(format!("{}", v), "-1.2344");
        let v = Money::from_decimal_str("-1.23455").unwrap();
        assert_eq!(format!("{}", v), "-1.2346");
    }

    #[test]
    fn display_pads_to_four_decimals() {
        let v = Money::from_decimal_str("7.5").unwrap();
        assert_eq!(format!("{}", v), "7.5000");
        assert_eq!(format!("{}", Money::ZERO), "0.0000");
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!(Money::from_decimal_str("").is_none());
        assert!(Money::from_decimal_str("abc").is_none());
        assert!(Money::from_decimal_str("1.2.3").is_none());
    }

    #[test]
    fn scale_does_not_affect_equality() {
        assert_eq!(
            Money::from_decimal_str("1.5").unwrap(),
            Money::from_decimal_str("1.5000").unwrap()
        );
    }
}
