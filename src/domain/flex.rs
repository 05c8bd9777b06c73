// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flex shorthand values.
//!
//! Flex-scale tokens carry the three-part CSS shorthand `grow shrink basis`,
//! e.g. `0.75 0.75 0%`. The shorthand is parsed so validation can compare the
//! declared factors against the entry's fraction key.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a flex shorthand.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FlexParseError {
    /// The shorthand did not have exactly three components.
    #[error("flex shorthand must have grow, shrink, and basis: '{0}'")]
    WrongComponentCount(String),

    /// A grow or shrink factor was not a non-negative number.
    #[error("invalid flex factor '{component}' in '{value}'")]
    InvalidFactor {
        /// The full shorthand being parsed
        value: String,
        /// The component that failed to parse
        component: String,
    },
}

/// A parsed `grow shrink basis` flex shorthand.
///
/// # Examples
///
/// ```
/// use themecfg::domain::flex::FlexShorthand;
///
/// let flex: FlexShorthand = "0.75 0.75 0%".parse().unwrap();
/// assert_eq!(flex.grow(), 0.75);
/// assert_eq!(flex.basis(), "0%");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlexShorthand {
    grow: f64,
    shrink: f64,
    basis: String,
}

impl FlexShorthand {
    /// Creates a shorthand from its three components.
    pub fn new(grow: f64, shrink: f64, basis: impl Into<String>) -> Self {
        FlexShorthand {
            grow,
            shrink,
            basis: basis.into(),
        }
    }

    /// The flex-grow factor.
    pub fn grow(&self) -> f64 {
        self.grow
    }

    /// The flex-shrink factor.
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// The flex-basis, kept verbatim (`0%`, `auto`, ...).
    pub fn basis(&self) -> &str {
        &self.basis
    }
}

impl FromStr for FlexShorthand {
    type Err = FlexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split_whitespace().collect();
        if components.len() != 3 {
            return Err(FlexParseError::WrongComponentCount(s.to_string()));
        }

        let factor = |component: &str| -> Result<f64, FlexParseError> {
            let parsed: f64 = component
                .parse()
                .map_err(|_| FlexParseError::InvalidFactor {
                    value: s.to_string(),
                    component: component.to_string(),
                })?;
            if parsed < 0.0 || !parsed.is_finite() {
                return Err(FlexParseError::InvalidFactor {
                    value: s.to_string(),
                    component: component.to_string(),
                });
            }
            Ok(parsed)
        };

        Ok(FlexShorthand {
            grow: factor(components[0])?,
            shrink: factor(components[1])?,
            basis: components[2].to_string(),
        })
    }
}

impl fmt::Display for FlexShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.grow, self.shrink, self.basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fractional() {
        let flex: FlexShorthand = "0.33 0.33 0%".parse().unwrap();
        assert_eq!(flex.grow(), 0.33);
        assert_eq!(flex.shrink(), 0.33);
        assert_eq!(flex.basis(), "0%");
    }

    #[test]
    fn test_parse_whole() {
        let flex: FlexShorthand = "1 1 0%".parse().unwrap();
        assert_eq!(flex.grow(), 1.0);
        assert_eq!(flex.shrink(), 1.0);
    }

    #[test]
    fn test_display_roundtrip() {
        let flex: FlexShorthand = "0.75 0.75 0%".parse().unwrap();
        assert_eq!(flex.to_string(), "0.75 0.75 0%");

        let whole: FlexShorthand = "1 1 0%".parse().unwrap();
        assert_eq!(whole.to_string(), "1 1 0%");
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(matches!(
            "1 1".parse::<FlexShorthand>(),
            Err(FlexParseError::WrongComponentCount(_))
        ));
        assert!(matches!(
            "1 1 0% auto".parse::<FlexShorthand>(),
            Err(FlexParseError::WrongComponentCount(_))
        ));
    }

    #[test]
    fn test_invalid_factor() {
        assert!(matches!(
            "x 1 0%".parse::<FlexShorthand>(),
            Err(FlexParseError::InvalidFactor { .. })
        ));
        assert!(matches!(
            "-1 1 0%".parse::<FlexShorthand>(),
            Err(FlexParseError::InvalidFactor { .. })
        ));
    }

    #[test]
    fn test_basis_kept_verbatim() {
        let flex: FlexShorthand = "0.25 0.25 auto".parse().unwrap();
        assert_eq!(flex.basis(), "auto");
    }
}
