// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in base theme token source.
//!
//! This module provides the base design-token set a theme extension merges
//! over. It carries the neutral color ramp and the CSS keyword colors that
//! derivations reference, e.g. `colors.gray.300` for the default border
//! color.

use crate::domain::{Result, TokenKey, TokenValue};
use crate::ports::TokenSource;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The base design tokens, keyed with dot notation.
static BASE_TOKENS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("colors.transparent", "transparent"),
        ("colors.current", "currentColor"),
        ("colors.black", "#000000"),
        ("colors.white", "#FFFFFF"),
        ("colors.gray.50", "#F9FAFB"),
        ("colors.gray.100", "#F3F4F6"),
        ("colors.gray.200", "#E5E7EB"),
        ("colors.gray.300", "#D1D5DB"),
        ("colors.gray.400", "#9CA3AF"),
        ("colors.gray.500", "#6B7280"),
        ("colors.gray.600", "#4B5563"),
        ("colors.gray.700", "#374151"),
        ("colors.gray.800", "#1F2937"),
        ("colors.gray.900", "#111827"),
    ])
});

/// Token source for the built-in base theme.
///
/// The base theme is inert data compiled into the crate. It has the lowest
/// priority (1), so theme files and environment overrides shadow it — this
/// is the "extension merged into a base design-token set" semantics of the
/// consuming build tool.
///
/// # Examples
///
/// ```rust
/// use themecfg::adapters::BaseThemeAdapter;
/// use themecfg::ports::TokenSource;
///
/// let adapter = BaseThemeAdapter::new();
/// let value = adapter.get_str("colors.gray.300").unwrap();
/// assert_eq!(value.unwrap().as_str(), "#D1D5DB");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaseThemeAdapter;

impl BaseThemeAdapter {
    /// Creates a new base theme adapter.
    pub fn new() -> Self {
        BaseThemeAdapter
    }
}

impl TokenSource for BaseThemeAdapter {
    fn name(&self) -> &str {
        "base-theme"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
        Ok(BASE_TOKENS.get(key.as_str()).map(|v| TokenValue::from(*v)))
    }

    fn all_keys(&self) -> Result<Vec<TokenKey>> {
        Ok(BASE_TOKENS.keys().map(|k| TokenKey::from(*k)).collect())
    }

    fn reload(&mut self) -> Result<()> {
        // Compiled-in data, nothing to reload.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_theme_name_and_priority() {
        let adapter = BaseThemeAdapter::new();
        assert_eq!(adapter.name(), "base-theme");
        assert_eq!(adapter.priority(), 1);
    }

    #[test]
    fn test_base_theme_gray_ramp() {
        let adapter = BaseThemeAdapter::new();
        let value = adapter.get(&TokenKey::from("colors.gray.300")).unwrap();
        assert_eq!(value.unwrap().as_str(), "#D1D5DB");

        let value = adapter.get(&TokenKey::from("colors.gray.900")).unwrap();
        assert_eq!(value.unwrap().as_str(), "#111827");
    }

    #[test]
    fn test_base_theme_keywords() {
        let adapter = BaseThemeAdapter::new();
        let value = adapter.get(&TokenKey::from("colors.current")).unwrap();
        assert!(value.unwrap().is_css_keyword());
    }

    #[test]
    fn test_base_theme_missing_key() {
        let adapter = BaseThemeAdapter::new();
        let value = adapter.get(&TokenKey::from("colors.nav")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_base_theme_all_keys() {
        let adapter = BaseThemeAdapter::new();
        let keys = adapter.all_keys().unwrap();
        assert!(keys.contains(&TokenKey::from("colors.gray.300")));
        assert!(keys.contains(&TokenKey::from("colors.white")));
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn test_base_theme_colors_parse() {
        let adapter = BaseThemeAdapter::new();
        for key in adapter.all_keys().unwrap() {
            let value = adapter.get(&key).unwrap().unwrap();
            assert!(
                value.is_css_keyword() || value.as_color(key.as_str()).is_ok(),
                "base token {} must be a color or keyword",
                key
            );
        }
    }

    #[test]
    fn test_base_theme_reload_is_noop() {
        let mut adapter = BaseThemeAdapter::new();
        assert!(adapter.reload().is_ok());
    }
}
