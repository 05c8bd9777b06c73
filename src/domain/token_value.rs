// SPDX-License-Identifier: MIT OR Apache-2.0

//! Design-token value type with typed conversions.
//!
//! This module provides the `TokenValue` type, which wraps token values and
//! provides conversion methods to the value types a theme declares. Values
//! are stored verbatim; they stay opaque strings to the consuming build tool
//! and are only interpreted at the point of use.

use crate::domain::color::Color;
use crate::domain::errors::{Result, ThemeError};
use crate::domain::flex::FlexShorthand;
use crate::domain::fraction::{parse_percentage, Fraction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CSS-wide keywords a token may carry instead of a color literal.
const CSS_KEYWORDS: &[&str] = &["currentColor", "transparent", "inherit", "initial", "unset"];

/// A type-safe wrapper for design-token values.
///
/// `TokenValue` stores values as strings internally and provides typed
/// conversion methods for the shapes tokens take: colors, percentages,
/// fractions, and flex shorthands. This allows token sources to return a
/// uniform type while still providing type safety at the point of use.
///
/// # Examples
///
/// ```
/// use themecfg::domain::token_value::TokenValue;
///
/// let value = TokenValue::new("hsl(178, 100%, 50%)".to_string());
/// assert!(value.as_color("colors.cyan").is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenValue(String);

impl TokenValue {
    /// Creates a new `TokenValue` from a `String`.
    pub fn new(value: String) -> Self {
        TokenValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Returns true when the value is a CSS-wide keyword
    /// (`currentColor`, `transparent`, ...), which color-valued scales
    /// accept in place of a literal.
    pub fn is_css_keyword(&self) -> bool {
        CSS_KEYWORDS.contains(&self.0.as_str())
    }

    /// Parses the value as a color literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_value::TokenValue;
    ///
    /// let value = TokenValue::from("#5946bc");
    /// assert!(value.as_color("borderColor.play-hand-btn").is_ok());
    /// ```
    pub fn as_color(&self, key: &str) -> Result<Color> {
        self.0
            .parse::<Color>()
            .map_err(|e| ThemeError::from_color_parse_error(key.to_string(), e))
    }

    /// Parses the value as a fraction (`1/2`, `3/4`, or a whole number).
    pub fn as_fraction(&self, key: &str) -> Result<Fraction> {
        self.0
            .parse::<Fraction>()
            .map_err(|e| ThemeError::from_fraction_parse_error(key.to_string(), e))
    }

    /// Parses the value as a percentage string, returning the numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_value::TokenValue;
    ///
    /// let value = TokenValue::from("50%");
    /// assert_eq!(value.as_percentage("maxWidth.1/2").unwrap(), 50.0);
    /// ```
    pub fn as_percentage(&self, key: &str) -> Result<f64> {
        parse_percentage(&self.0)
            .map_err(|e| ThemeError::from_percentage_parse_error(key.to_string(), e))
    }

    /// Parses the value as a `grow shrink basis` flex shorthand.
    pub fn as_flex(&self, key: &str) -> Result<FlexShorthand> {
        self.0
            .parse::<FlexShorthand>()
            .map_err(|e| ThemeError::from_flex_parse_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_value::TokenValue;
    /// use themecfg::domain::font_stack::FontStack;
    ///
    /// let value = TokenValue::from("\"Press Start 2P\", cursive");
    /// let stack: FontStack = value.parse("fontFamily.press-start").unwrap();
    /// assert_eq!(stack.len(), 2);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ThemeError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue(s)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue(s.to_string())
    }
}

impl From<TokenValue> for String {
    fn from(value: TokenValue) -> Self {
        value.0
    }
}

impl AsRef<str> for TokenValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
