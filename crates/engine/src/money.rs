use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::EngineError;

/// Money amount represented as **integer cents**.
///
/// Every expense amount goes through this type so that totals never suffer
/// from floating-point drift. On disk the value is written as a JSON number in
/// major units (`1050` cents is stored as `10.5`).
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert_eq!(".5".parse::<MoneyCents>().unwrap().cents(), 50);
/// assert_eq!("1e2".parse::<MoneyCents>().unwrap().cents(), 10000);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Sums `amounts`, returning `None` if the total does not fit.
    pub fn checked_sum<I: IntoIterator<Item = MoneyCents>>(amounts: I) -> Option<MoneyCents> {
        amounts
            .into_iter()
            .try_fold(MoneyCents::ZERO, MoneyCents::checked_add)
    }

    /// Value in major units, as written to the expense file.
    #[must_use]
    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a major-unit value to cents, rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and values that do not fit in cents.
    #[must_use]
    pub fn from_major(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl Serialize for MoneyCents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for MoneyCents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        MoneyCents::from_major(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {value}")))
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator, an optional leading `+`/`-`,
    /// an empty integer part (`.5`) and exponent notation (`1e2`).
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`, `1e-3`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {s}"));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        if rest.contains(['e', 'E']) {
            let total = parse_exponent(&rest).ok_or_else(invalid)??;
            return Ok(MoneyCents(if negative { -total } else { total }));
        }

        let (units_str, frac_str) = match rest.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (rest.as_str(), None),
        };

        if units_str.is_empty() && frac_str.is_none_or(str::is_empty) {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| overflow())?
        };

        let cents: i64 = match frac_str {
            None => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}

/// Parses an unsigned number in exponent notation into cents.
///
/// Returns `None` when `s` is not a plain decimal mantissa with an integer
/// exponent, and an error when the value has sub-cent digits or is too large.
fn parse_exponent(s: &str) -> Option<Result<i64, EngineError>> {
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    let digits = mantissa.replace('.', "");
    let mantissa_ok = !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && mantissa.matches('.').count() <= 1;
    let exponent_digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
    let exponent_ok =
        !exponent_digits.is_empty() && exponent_digits.chars().all(|c| c.is_ascii_digit());
    if !mantissa_ok || !exponent_ok {
        return None;
    }

    let value: f64 = s.parse().ok()?;
    let scaled = value * 100.0;
    if (scaled - scaled.round()).abs() > 1e-6 {
        return Some(Err(EngineError::InvalidAmount(
            "too many decimals".to_string(),
        )));
    }
    Some(
        MoneyCents::from_major(value)
            .map(MoneyCents::cents)
            .ok_or_else(|| EngineError::InvalidAmount("amount too large".to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(350).to_string(), "3.50");
        assert_eq!(MoneyCents::new(1550).to_string(), "15.50");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("3.5".parse::<MoneyCents>().unwrap().cents(), 350);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("-0.01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<MoneyCents>().unwrap().cents(), 100);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
        assert_eq!("7.".parse::<MoneyCents>().unwrap().cents(), 700);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("abc".parse::<MoneyCents>().is_err());
        assert!("".parse::<MoneyCents>().is_err());
        assert!("1.2.3".parse::<MoneyCents>().is_err());
        assert!(".".parse::<MoneyCents>().is_err());
        assert!("1e".parse::<MoneyCents>().is_err());
        assert!("e5".parse::<MoneyCents>().is_err());
        assert!("1e-3".parse::<MoneyCents>().is_err());
        assert!("1e400".parse::<MoneyCents>().is_err());
        assert!("inf".parse::<MoneyCents>().is_err());
        assert!("99999999999999999999".parse::<MoneyCents>().is_err());
    }

    #[test]
    fn json_uses_major_units() {
        let json = serde_json::to_string(&MoneyCents::new(350)).unwrap();
        assert_eq!(json, "3.5");
        let back: MoneyCents = serde_json::from_str("12").unwrap();
        assert_eq!(back.cents(), 1200);
        let rounded: MoneyCents = serde_json::from_str("2.999").unwrap();
        assert_eq!(rounded.cents(), 300);
    }

    #[test]
    fn parse_accepts_leading_dot_and_exponent() {
        assert_eq!(".5".parse::<MoneyCents>().unwrap().cents(), 50);
        assert_eq!(",05".parse::<MoneyCents>().unwrap().cents(), 5);
        assert_eq!("1e2".parse::<MoneyCents>().unwrap().cents(), 10_000);
        assert_eq!("2.5E1".parse::<MoneyCents>().unwrap().cents(), 2_500);
        assert_eq!("2.5e-1".parse::<MoneyCents>().unwrap().cents(), 25);
        assert_eq!("-1e1".parse::<MoneyCents>().unwrap().cents(), -1_000);
    }

    #[test]
    fn checked_sum_adds_cents() {
        let amounts = [350, 1200].into_iter().map(MoneyCents::new);
        assert_eq!(MoneyCents::checked_sum(amounts), Some(MoneyCents::new(1550)));
        assert_eq!(MoneyCents::checked_sum([]), Some(MoneyCents::ZERO));
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let half = MoneyCents::new(i64::MAX / 2 + 1);
        assert_eq!(MoneyCents::checked_sum([half, half]), None);
    }
}
