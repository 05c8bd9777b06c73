// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the theme configuration crate.
//!
//! This module defines the error types that can occur when resolving, parsing,
//! or validating design tokens. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

use crate::domain::color::ColorParseError;
use crate::domain::flex::FlexParseError;
use crate::domain::fraction::{FractionParseError, PercentageParseError};

/// The main error type for theme configuration operations.
///
/// This enum represents all possible errors that can occur when reading,
/// parsing, or validating design-token values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use themecfg::domain::errors::ThemeError;
///
/// fn get_token() -> Result<String, ThemeError> {
///     Err(ThemeError::TokenNotFound {
///         key: "colors.nav".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
    /// The requested design token was not found in any source.
    #[error("Design token not found: {key}")]
    TokenNotFound {
        /// The key that was not found
        key: String,
    },

    /// Failed to convert a token value to the requested type.
    #[error("Failed to convert token value for key '{key}' to {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a token source.
    #[error("Token source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a theme file or value.
    #[error("Failed to parse theme configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A manifest failed structural validation.
    #[error("Theme validation failed for '{scale}.{key}': {reason}")]
    ValidationError {
        /// The scale the offending token belongs to
        scale: String,
        /// The offending token key
        key: String,
        /// Why the token was rejected
        reason: String,
    },

    /// An I/O error occurred while reading theme configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ThemeError {
    /// Creates a TypeConversionError from a ColorParseError.
    pub fn from_color_parse_error(key: String, err: ColorParseError) -> Self {
        ThemeError::TypeConversionError {
            key,
            target_type: "color".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a FractionParseError.
    pub fn from_fraction_parse_error(key: String, err: FractionParseError) -> Self {
        ThemeError::TypeConversionError {
            key,
            target_type: "fraction".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a PercentageParseError.
    pub fn from_percentage_parse_error(key: String, err: PercentageParseError) -> Self {
        ThemeError::TypeConversionError {
            key,
            target_type: "percentage".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a FlexParseError.
    pub fn from_flex_parse_error(key: String, err: FlexParseError) -> Self {
        ThemeError::TypeConversionError {
            key,
            target_type: "flex shorthand".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for theme configuration operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_found_error() {
        let error = ThemeError::TokenNotFound {
            key: "colors.nav".to_string(),
        };
        assert_eq!(error.to_string(), "Design token not found: colors.nav");
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "oops".parse::<f64>().unwrap_err();
        let error = ThemeError::TypeConversionError {
            key: "maxWidth.1/2".to_string(),
            target_type: "percentage".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("maxWidth.1/2"));
        assert!(error.to_string().contains("percentage"));
    }

    #[test]
    fn test_source_error() {
        let error = ThemeError::SourceError {
            source_name: "env".to_string(),
            message: "Failed to read environment".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Token source 'env' error: Failed to read environment"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ThemeError::ParseError {
            message: "Invalid YAML".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse theme configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = ThemeError::ValidationError {
            scale: "colors".to_string(),
            key: "nav".to_string(),
            reason: "not a recognized color syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Theme validation failed for 'colors.nav': not a recognized color syntax"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ThemeError::from(io_error);
        assert!(matches!(error, ThemeError::IoError(_)));
    }

    #[test]
    fn test_from_color_parse_error() {
        let parse_err = "#12".parse::<crate::domain::Color>().unwrap_err();
        let error = ThemeError::from_color_parse_error("colors.nav".to_string(), parse_err);
        assert!(matches!(error, ThemeError::TypeConversionError { .. }));
        assert!(error.to_string().contains("color"));
    }

    #[test]
    fn test_from_percentage_parse_error() {
        let parse_err = crate::domain::fraction::parse_percentage("50").unwrap_err();
        let error = ThemeError::from_percentage_parse_error("maxWidth.1/2".to_string(), parse_err);
        assert!(error.to_string().contains("percentage"));
    }

    #[test]
    fn test_from_flex_parse_error() {
        let parse_err = "1 1".parse::<crate::domain::FlexShorthand>().unwrap_err();
        let error = ThemeError::from_flex_parse_error("flex.1".to_string(), parse_err);
        assert!(error.to_string().contains("flex shorthand"));
    }

    #[test]
    fn test_from_fraction_parse_error() {
        let parse_err = "a/b".parse::<crate::domain::Fraction>().unwrap_err();
        let error = ThemeError::from_fraction_parse_error("maxWidth.1/2".to_string(), parse_err);
        assert!(matches!(error, ThemeError::TypeConversionError { .. }));
        assert!(error.to_string().contains("fraction"));
    }
}
