// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color value parsing and classification.
//!
//! Design-token color values are written in one of four syntaxes: `#RRGGBB`,
//! `#RRGGBBAA`, `rgba(r, g, b, a)`, or `hsl(h, s%, l%)`. This module provides
//! the `Color` type, which parses those syntaxes into normalized channels so
//! tokens can be validated without rewriting the declared string.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ColorParseError {
    /// The value matches none of the supported color syntaxes.
    #[error("unrecognized color syntax: '{0}'")]
    UnrecognizedSyntax(String),

    /// A hex literal had a digit count other than 6 or 8.
    #[error("hex color literal must have 6 or 8 digits: '{0}'")]
    InvalidHexLength(String),

    /// A hex literal contained a non-hexadecimal digit.
    #[error("invalid hex digit in '{0}'")]
    InvalidHexDigit(String),

    /// A functional syntax had the wrong number of components.
    #[error("expected {expected} components in '{value}'")]
    WrongComponentCount {
        /// The full value being parsed
        value: String,
        /// How many components the syntax requires
        expected: usize,
    },

    /// A component could not be parsed as a number.
    #[error("invalid component '{component}' in '{value}'")]
    InvalidComponent {
        /// The full value being parsed
        value: String,
        /// The component that failed to parse
        component: String,
    },

    /// A component parsed but fell outside its allowed range.
    #[error("component out of range in '{value}': {component}")]
    OutOfRange {
        /// The full value being parsed
        value: String,
        /// The offending component
        component: String,
    },
}

/// The syntax family a color value was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RRGGBB`
    Hex,
    /// `#RRGGBBAA`
    HexAlpha,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
}

/// A parsed design-token color.
///
/// Parsing normalizes channels but the original token string stays the value
/// of record; `Color` exists so validation can classify a declaration without
/// rewriting it.
///
/// # Examples
///
/// ```
/// use themecfg::domain::color::{Color, ColorFormat};
///
/// let nav: Color = "#00000080".parse().unwrap();
/// assert_eq!(nav.format(), ColorFormat::HexAlpha);
///
/// let cyan: Color = "hsl(178, 100%, 50%)".parse().unwrap();
/// assert_eq!(cyan.format(), ColorFormat::Hsl);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// A hex literal, with an optional alpha byte.
    Hex {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
        /// Alpha byte, present only for 8-digit literals
        alpha: Option<u8>,
    },
    /// An `rgba()` functional value.
    Rgba {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
        /// Alpha in the range 0.0..=1.0
        alpha: f32,
    },
    /// An `hsl()` functional value.
    Hsl {
        /// Hue in degrees, 0..=360
        hue: u16,
        /// Saturation percentage, 0..=100
        saturation: u8,
        /// Lightness percentage, 0..=100
        lightness: u8,
    },
}

impl Color {
    /// Returns the syntax family this color was written in.
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Hex { alpha: None, .. } => ColorFormat::Hex,
            Color::Hex { alpha: Some(_), .. } => ColorFormat::HexAlpha,
            Color::Rgba { .. } => ColorFormat::Rgba,
            Color::Hsl { .. } => ColorFormat::Hsl,
        }
    }

    /// Returns the alpha channel as a fraction in 0.0..=1.0.
    ///
    /// Fully opaque syntaxes (`#RRGGBB`, `hsl()`) report 1.0.
    pub fn alpha(&self) -> f32 {
        match self {
            Color::Hex { alpha: None, .. } | Color::Hsl { .. } => 1.0,
            Color::Hex {
                alpha: Some(a), ..
            } => f32::from(*a) / 255.0,
            Color::Rgba { alpha, .. } => *alpha,
        }
    }

    /// Returns true when the color carries any transparency.
    pub fn is_translucent(&self) -> bool {
        self.alpha() < 1.0
    }

    fn parse_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = &value[1..];
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidHexLength(value.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(value.to_string()));
        }

        let byte = |range: std::ops::Range<usize>| {
            // Digits are validated hex, so the fallback is unreachable.
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        Ok(Color::Hex {
            r: byte(0..2),
            g: byte(2..4),
            b: byte(4..6),
            alpha: if digits.len() == 8 {
                Some(byte(6..8))
            } else {
                None
            },
        })
    }

    fn parse_rgba(value: &str, body: &str) -> Result<Self, ColorParseError> {
        let components: Vec<&str> = body.split(',').map(str::trim).collect();
        if components.len() != 4 {
            return Err(ColorParseError::WrongComponentCount {
                value: value.to_string(),
                expected: 4,
            });
        }

        let channel = |component: &str| -> Result<u8, ColorParseError> {
            component
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent {
                    value: value.to_string(),
                    component: component.to_string(),
                })
        };

        let alpha: f32 =
            components[3]
                .parse()
                .map_err(|_| ColorParseError::InvalidComponent {
                    value: value.to_string(),
                    component: components[3].to_string(),
                })?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorParseError::OutOfRange {
                value: value.to_string(),
                component: components[3].to_string(),
            });
        }

        Ok(Color::Rgba {
            r: channel(components[0])?,
            g: channel(components[1])?,
            b: channel(components[2])?,
            alpha,
        })
    }

    fn parse_hsl(value: &str, body: &str) -> Result<Self, ColorParseError> {
        let components: Vec<&str> = body.split(',').map(str::trim).collect();
        if components.len() != 3 {
            return Err(ColorParseError::WrongComponentCount {
                value: value.to_string(),
                expected: 3,
            });
        }

        let hue: u16 = components[0]
            .parse()
            .map_err(|_| ColorParseError::InvalidComponent {
                value: value.to_string(),
                component: components[0].to_string(),
            })?;
        if hue > 360 {
            return Err(ColorParseError::OutOfRange {
                value: value.to_string(),
                component: components[0].to_string(),
            });
        }

        let percent = |component: &str| -> Result<u8, ColorParseError> {
            let digits =
                component
                    .strip_suffix('%')
                    .ok_or_else(|| ColorParseError::InvalidComponent {
                        value: value.to_string(),
                        component: component.to_string(),
                    })?;
            let parsed: u8 =
                digits
                    .trim()
                    .parse()
                    .map_err(|_| ColorParseError::InvalidComponent {
                        value: value.to_string(),
                        component: component.to_string(),
                    })?;
            if parsed > 100 {
                return Err(ColorParseError::OutOfRange {
                    value: value.to_string(),
                    component: component.to_string(),
                });
            }
            Ok(parsed)
        };

        Ok(Color::Hsl {
            hue,
            saturation: percent(components[1])?,
            lightness: percent(components[2])?,
        })
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if value.starts_with('#') {
            return Self::parse_hex(value);
        }
        if let Some(body) = value
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgba(value, body);
        }
        if let Some(body) = value
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_hsl(value, body);
        }

        Err(ColorParseError::UnrecognizedSyntax(value.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex {
                r,
                g,
                b,
                alpha: None,
            } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Hex {
                r,
                g,
                b,
                alpha: Some(a),
            } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
            Color::Rgba { r, g, b, alpha } => {
                write!(f, "rgba({}, {}, {}, {})", r, g, b, alpha)
            }
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}
