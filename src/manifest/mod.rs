// SPDX-License-Identifier: MIT OR Apache-2.0

//! The exported theme manifest.
//!
//! This module defines the record shape the consuming build tool reads: the
//! recognized top-level keys (`purge`, `darkMode`, `theme`, `variants`,
//! `plugins`) and, within `theme.extend`, the named scales whose value
//! shapes the tool expects. The manifest serializes to JSON with the tool's
//! key spelling (`darkMode`, `fontFamily`, `maxWidth`, ...); function-valued
//! entries (the border-color derivation) are resolved against the base theme
//! at export time.

pub mod derived;
pub mod scales;
pub mod validate;

pub use derived::DerivedScale;
pub use scales::{FontScale, TokenScale};
pub use validate::{validate, ValidationIssue};

use crate::domain::{Result, ThemeError, ThemeResolver, TokenKey};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when parsing a dark-mode strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dark mode must be false, 'media', or 'class': '{0}'")]
pub struct DarkModeParseError(String);

/// The dark-mode strategy the consuming tool should apply.
///
/// Serializes the way the tool spells it: `false` when disabled, otherwise
/// the strategy name as a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DarkMode {
    /// Dark mode variants are not generated (serialized as `false`).
    #[default]
    Disabled,
    /// Dark mode follows the `prefers-color-scheme` media query.
    Media,
    /// Dark mode is toggled with a CSS class.
    Class,
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DarkMode::Disabled => serializer.serialize_bool(false),
            DarkMode::Media => serializer.serialize_str("media"),
            DarkMode::Class => serializer.serialize_str("class"),
        }
    }
}

impl<'de> Deserialize<'de> for DarkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DarkModeVisitor;

        impl Visitor<'_> for DarkModeVisitor {
            type Value = DarkMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("false, \"media\", or \"class\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<DarkMode, E> {
                if v {
                    Err(E::custom("dark mode cannot be true; use 'media' or 'class'"))
                } else {
                    Ok(DarkMode::Disabled)
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<DarkMode, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DarkModeVisitor)
    }
}

impl FromStr for DarkMode {
    type Err = DarkModeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "false" => Ok(DarkMode::Disabled),
            "media" => Ok(DarkMode::Media),
            "class" => Ok(DarkMode::Class),
            other => Err(DarkModeParseError(other.to_string())),
        }
    }
}

/// The `theme.extend` block: scales merged additively over the base
/// design-token set by the consuming tool.
#[derive(Debug, Default)]
pub struct ThemeExtension {
    /// Semantic color names mapped to color values.
    pub colors: TokenScale,
    /// Font aliases mapped to family stacks.
    pub font_family: FontScale,
    /// Background image tokens (`url(...)` values).
    pub background_image: TokenScale,
    /// Fractional max-width scale.
    pub max_width: TokenScale,
    /// Fractional min-width scale.
    pub min_width: TokenScale,
    /// Fractional max-height scale.
    pub max_height: TokenScale,
    /// Border colors, derived from the base theme at export time.
    pub border_color: DerivedScale,
    /// Flex shorthand scale.
    pub flex: TokenScale,
}

impl ThemeExtension {
    /// The fractional sizing scales, paired with their manifest key names.
    pub fn sizing_scales(&self) -> [(&'static str, &TokenScale); 3] {
        [
            ("maxWidth", &self.max_width),
            ("minWidth", &self.min_width),
            ("maxHeight", &self.max_height),
        ]
    }
}

/// The `theme` block of the manifest.
#[derive(Debug, Default)]
pub struct Theme {
    /// Additive extensions over the base design-token set.
    pub extend: ThemeExtension,
}

/// The `variants.extend` block. The shipped theme declares no extra
/// variants, but the key must be present in the exported record.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Variants {
    /// Variant extensions, keyed by core plugin name.
    pub extend: TokenScale,
}

/// The full manifest the crate exports for the consuming build tool.
///
/// `ThemeManifest::new()` creates an empty manifest to build up;
/// [`ThemeManifest::shipped`] carries the design tokens this crate
/// declares.
///
/// # Examples
///
/// ```
/// use themecfg::manifest::ThemeManifest;
/// use themecfg::service::ThemeService;
///
/// # fn main() -> themecfg::domain::Result<()> {
/// let manifest = ThemeManifest::shipped();
/// let theme = ThemeService::builder().with_base_theme().build()?;
///
/// let json = manifest.to_json(&theme)?;
/// assert_eq!(json["darkMode"], serde_json::json!(false));
/// assert_eq!(json["theme"]["extend"]["colors"]["nav"], "#00000080");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ThemeManifest {
    /// Content globs the tool scans for used class names.
    pub purge: Vec<String>,
    /// Dark-mode strategy.
    pub dark_mode: DarkMode,
    /// Theme extensions.
    pub theme: Theme,
    /// Variant extensions.
    pub variants: Variants,
    /// Plugin names. The shipped theme declares none.
    pub plugins: Vec<String>,
}

impl ThemeManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The design-token manifest this crate ships.
    pub fn shipped() -> Self {
        let mut extend = ThemeExtension {
            colors: TokenScale::from_pairs(&[
                ("nav", "#00000080"),
                ("navFont", "#FFFFFFA6"),
                ("modal-bg-color", "rgba(75, 85, 99,0.20)"),
                ("play-hand-color", "#1B0D2A"),
                ("play-comp-color", "#FFFFFF14"),
                ("dark-purple", "#461464CC"),
                ("heading-color", "#A5B9F6"),
                ("btn-purple", "#5A32E6"),
                ("btn-input", "#1B0D2A"),
                ("nft-heading", "#34f2f7"),
                ("lightGray", "#6f7886"),
                ("softblue", "hsl(215, 51%, 70%)"),
                ("cyan", "hsl(178, 100%, 50%)"),
                ("darkbluemain", "hsl(217, 54%, 11%)"),
                ("darkbluecard", "hsl(216, 50%, 16%)"),
                ("darkblueline", "hsl(215, 32%, 27%)"),
            ]),
            background_image: TokenScale::from_pairs(&[(
                "main-bg",
                "url('/src/assets/main-background.jpg')",
            )]),
            max_width: TokenScale::from_pairs(&[("1/2", "50%"), ("1/4", "25%"), ("3/4", "75%")]),
            min_width: TokenScale::from_pairs(&[("1/5", "20%"), ("1/4", "25%")]),
            max_height: TokenScale::from_pairs(&[("1/2", "50%"), ("1/4", "25%"), ("3/4", "75%")]),
            border_color: DerivedScale::new(|theme| {
                let mut out = TokenScale::new();
                out.insert(
                    "DEFAULT",
                    theme.get_or_default(&TokenKey::from("colors.gray.300"), "currentColor"),
                );
                out.insert("play-hand-btn", "#5946bc");
                out
            }),
            flex: TokenScale::from_pairs(&[
                ("1", "1 1 0%"),
                ("3/4", "0.75 0.75 0%"),
                ("1/4", "0.25 0.25 0%"),
                ("1/3", "0.33 0.33 0%"),
                ("2/3", "0.66 0.66 0%"),
            ]),
            ..ThemeExtension::default()
        };

        extend.font_family.insert_names("poppins", &["Poppins"]);
        extend.font_family.insert_names("montserrat", &["Montserrat"]);
        extend
            .font_family
            .insert_names("press-start", &["Press Start 2P", "cursive"]);
        extend.font_family.insert_names("out", &["Outfit"]);

        ThemeManifest {
            purge: vec![
                "./src/**/*.{js,jsx,ts,tsx}".to_string(),
                "./public/index.html".to_string(),
            ],
            dark_mode: DarkMode::Disabled,
            theme: Theme { extend },
            variants: Variants::default(),
            plugins: Vec::new(),
        }
    }

    /// Exports the manifest as the JSON record the consuming tool reads.
    ///
    /// Derived scales are resolved against `theme` here; the exported
    /// record carries values, not functions. Key order follows declaration
    /// order throughout.
    pub fn to_json(&self, theme: &dyn ThemeResolver) -> Result<serde_json::Value> {
        let extend = &self.theme.extend;
        let border_color = extend.border_color.resolve(theme);

        Ok(serde_json::json!({
            "purge": &self.purge,
            "darkMode": self.dark_mode,
            "theme": {
                "extend": {
                    "colors": &extend.colors,
                    "fontFamily": &extend.font_family,
                    "backgroundImage": &extend.background_image,
                    "maxWidth": &extend.max_width,
                    "minWidth": &extend.min_width,
                    "maxHeight": &extend.max_height,
                    "borderColor": border_color,
                    "flex": &extend.flex,
                }
            },
            "variants": &self.variants,
            "plugins": &self.plugins,
        }))
    }

    /// Exports the manifest as a pretty-printed JSON string.
    pub fn to_json_string(&self, theme: &dyn ThemeResolver) -> Result<String> {
        let value = self.to_json(theme)?;
        serde_json::to_string_pretty(&value).map_err(|e| ThemeError::ParseError {
            message: format!("Failed to serialize manifest: {}", e),
            source: Some(Box::new(e)),
        })
    }
}
