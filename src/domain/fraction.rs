// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fractional scale keys.
//!
//! Sizing and flex scales name their entries with fraction keys such as
//! `1/2` or `3/4`. The key is the semantic name; the value it maps to must
//! stay consistent with it (`1/2` maps to `50%`, `3/4` to a flex factor of
//! `0.75`). `Fraction` parses those keys and derives the values a consistent
//! entry must carry.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a fraction key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FractionParseError {
    /// The key is not `N` or `N/D` with integer parts.
    #[error("invalid fraction key: '{0}'")]
    Invalid(String),

    /// The denominator was zero.
    #[error("fraction denominator must be non-zero: '{0}'")]
    ZeroDenominator(String),
}

/// Errors produced when parsing a percentage string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PercentageParseError {
    /// The value did not end with `%`.
    #[error("percentage must end with '%': '{0}'")]
    MissingPercentSign(String),

    /// The numeric part could not be parsed.
    #[error("invalid percentage number: '{0}'")]
    InvalidNumber(String),
}

/// Parses a CSS percentage string (`"50%"`) into its numeric value.
///
/// # Examples
///
/// ```
/// use themecfg::domain::fraction::parse_percentage;
///
/// assert_eq!(parse_percentage("20%").unwrap(), 20.0);
/// assert!(parse_percentage("20").is_err());
/// ```
pub fn parse_percentage(s: &str) -> Result<f64, PercentageParseError> {
    let value = s.trim();
    let digits = value
        .strip_suffix('%')
        .ok_or_else(|| PercentageParseError::MissingPercentSign(value.to_string()))?;
    let parsed: f64 = digits
        .trim()
        .parse()
        .map_err(|_| PercentageParseError::InvalidNumber(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(PercentageParseError::InvalidNumber(value.to_string()));
    }
    Ok(parsed)
}

/// A fraction key from a sizing or flex scale.
///
/// Whole-number keys (the `1` in a flex scale) parse as a fraction over one.
///
/// # Examples
///
/// ```
/// use themecfg::domain::fraction::Fraction;
///
/// let half: Fraction = "1/2".parse().unwrap();
/// assert_eq!(half.percentage_string(), "50%");
///
/// let third: Fraction = "1/3".parse().unwrap();
/// assert_eq!(third.flex_factor(), 0.33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Creates a fraction from a numerator and a non-zero denominator.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, FractionParseError> {
        if denominator == 0 {
            return Err(FractionParseError::ZeroDenominator(format!(
                "{}/{}",
                numerator, denominator
            )));
        }
        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// The numerator.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// The denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// The fraction as a percentage value, e.g. `50.0` for `1/2`.
    pub fn percentage(&self) -> f64 {
        f64::from(self.numerator) * 100.0 / f64::from(self.denominator)
    }

    /// The percentage string a consistent sizing entry carries.
    ///
    /// Exact percentages print as integers (`50%`); inexact ones keep up to
    /// six decimal places with trailing zeros trimmed.
    pub fn percentage_string(&self) -> String {
        if (self.numerator * 100) % self.denominator == 0 {
            format!("{}%", self.numerator * 100 / self.denominator)
        } else {
            let formatted = format!("{:.6}", self.percentage());
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            format!("{}%", trimmed)
        }
    }

    /// The grow/shrink factor a consistent flex entry carries.
    ///
    /// Flex shorthands write factors truncated to two decimal places
    /// (`1/3` is written `0.33`, `2/3` is written `0.66`).
    pub fn flex_factor(&self) -> f64 {
        let ratio = f64::from(self.numerator) / f64::from(self.denominator);
        (ratio * 100.0).trunc() / 100.0
    }
}

impl FromStr for Fraction {
    type Err = FractionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();

        match key.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator: u32 = numerator
                    .parse()
                    .map_err(|_| FractionParseError::Invalid(key.to_string()))?;
                let denominator: u32 = denominator
                    .parse()
                    .map_err(|_| FractionParseError::Invalid(key.to_string()))?;
                Fraction::new(numerator, denominator)
            }
            None => {
                let numerator: u32 = key
                    .parse()
                    .map_err(|_| FractionParseError::Invalid(key.to_string()))?;
                Fraction::new(numerator, 1)
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction() {
        let fraction: Fraction = "3/4".parse().unwrap();
        assert_eq!(fraction.numerator(), 3);
        assert_eq!(fraction.denominator(), 4);
    }

    #[test]
    fn test_parse_whole_number() {
        let fraction: Fraction = "1".parse().unwrap();
        assert_eq!(fraction.numerator(), 1);
        assert_eq!(fraction.denominator(), 1);
        assert_eq!(fraction.percentage_string(), "100%");
    }

    #[test]
    fn test_percentage() {
        let fraction: Fraction = "1/5".parse().unwrap();
        assert_eq!(fraction.percentage(), 20.0);
        assert_eq!(fraction.percentage_string(), "20%");
    }

    #[test]
    fn test_percentage_string_exact() {
        for (key, expected) in [("1/2", "50%"), ("1/4", "25%"), ("3/4", "75%"), ("1/5", "20%")] {
            let fraction: Fraction = key.parse().unwrap();
            assert_eq!(fraction.percentage_string(), expected, "key {}", key);
        }
    }

    #[test]
    fn test_percentage_string_inexact() {
        let fraction: Fraction = "1/3".parse().unwrap();
        assert_eq!(fraction.percentage_string(), "33.333333%");
    }

    #[test]
    fn test_flex_factor_truncates() {
        assert_eq!("3/4".parse::<Fraction>().unwrap().flex_factor(), 0.75);
        assert_eq!("1/4".parse::<Fraction>().unwrap().flex_factor(), 0.25);
        assert_eq!("1/3".parse::<Fraction>().unwrap().flex_factor(), 0.33);
        assert_eq!("2/3".parse::<Fraction>().unwrap().flex_factor(), 0.66);
        assert_eq!("1".parse::<Fraction>().unwrap().flex_factor(), 1.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "a/b".parse::<Fraction>(),
            Err(FractionParseError::Invalid(_))
        ));
        assert!(matches!(
            "".parse::<Fraction>(),
            Err(FractionParseError::Invalid(_))
        ));
        assert!(matches!(
            "1/2/3".parse::<Fraction>(),
            Err(FractionParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert!(matches!(
            "1/0".parse::<Fraction>(),
            Err(FractionParseError::ZeroDenominator(_))
        ));
    }

    #[test]
    fn test_display() {
        let fraction: Fraction = "3/4".parse().unwrap();
        assert_eq!(fraction.to_string(), "3/4");
        let whole: Fraction = "1".parse().unwrap();
        assert_eq!(whole.to_string(), "1");
    }
}
