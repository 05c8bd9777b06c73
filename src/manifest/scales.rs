// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token scales: the named maps inside a theme extension.
//!
//! A scale maps semantic names to values within one styling concern —
//! `colors`, `maxWidth`, `flex`. Scales preserve declaration order through
//! serialization, and keys within a scale are unique: inserting an existing
//! key replaces its value in place.

use crate::domain::{FontStack, TokenValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map from token names to values.
///
/// # Examples
///
/// ```
/// use themecfg::manifest::TokenScale;
///
/// let mut colors = TokenScale::new();
/// colors.insert("nav", "#00000080");
/// colors.insert("cyan", "hsl(178, 100%, 50%)");
///
/// assert_eq!(colors.get("nav").unwrap().as_str(), "#00000080");
/// assert_eq!(colors.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenScale(IndexMap<String, TokenValue>);

impl TokenScale {
    /// Creates an empty scale.
    pub fn new() -> Self {
        TokenScale(IndexMap::new())
    }

    /// Creates a scale from name/value pairs, preserving their order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut scale = TokenScale::new();
        for (key, value) in pairs {
            scale.insert(*key, *value);
        }
        scale
    }

    /// Inserts a token. Inserting an existing key replaces its value in
    /// place without changing its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TokenValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a token by name.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.0.get(key)
    }

    /// Returns true when the scale declares the given name.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.0.iter()
    }

    /// Iterates token names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of tokens in the scale.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the scale declares no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An insertion-ordered map from font aliases to font stacks.
///
/// # Examples
///
/// ```
/// use themecfg::manifest::FontScale;
///
/// let mut fonts = FontScale::new();
/// fonts.insert_names("press-start", &["Press Start 2P", "cursive"]);
/// assert_eq!(fonts.get("press-start").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontScale(IndexMap<String, FontStack>);

impl FontScale {
    /// Creates an empty scale.
    pub fn new() -> Self {
        FontScale(IndexMap::new())
    }

    /// Inserts a font stack under an alias.
    pub fn insert(&mut self, alias: impl Into<String>, stack: FontStack) {
        self.0.insert(alias.into(), stack);
    }

    /// Inserts a font stack given as a list of family names.
    pub fn insert_names(&mut self, alias: impl Into<String>, names: &[&str]) {
        self.insert(alias, FontStack::from_names(names));
    }

    /// Looks up a stack by alias.
    pub fn get(&self, alias: &str) -> Option<&FontStack> {
        self.0.get(alias)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FontStack)> {
        self.0.iter()
    }

    /// Number of aliases in the scale.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the scale declares no aliases.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_scale_preserves_order() {
        let scale = TokenScale::from_pairs(&[
            ("nav", "#00000080"),
            ("navFont", "#FFFFFFA6"),
            ("lightGray", "#6f7886"),
        ]);

        let keys: Vec<&String> = scale.keys().collect();
        assert_eq!(keys, ["nav", "navFont", "lightGray"]);
    }

    #[test]
    fn test_token_scale_duplicate_insert_replaces_in_place() {
        let mut scale = TokenScale::from_pairs(&[("nav", "#00000080"), ("cyan", "#00FFFF")]);
        scale.insert("nav", "#111111");

        assert_eq!(scale.len(), 2);
        assert_eq!(scale.get("nav").unwrap().as_str(), "#111111");
        // Replacement keeps the original position.
        let keys: Vec<&String> = scale.keys().collect();
        assert_eq!(keys, ["nav", "cyan"]);
    }

    #[test]
    fn test_token_scale_contains() {
        let scale = TokenScale::from_pairs(&[("1/2", "50%")]);
        assert!(scale.contains("1/2"));
        assert!(!scale.contains("1/3"));
    }

    #[test]
    fn test_token_scale_serializes_in_order() {
        let scale = TokenScale::from_pairs(&[("1/2", "50%"), ("1/4", "25%"), ("3/4", "75%")]);
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(json, r#"{"1/2":"50%","1/4":"25%","3/4":"75%"}"#);
    }

    #[test]
    fn test_token_scale_deserialize() {
        let scale: TokenScale =
            serde_json::from_str(r#"{"1/5":"20%","1/4":"25%"}"#).unwrap();
        assert_eq!(scale.get("1/5").unwrap().as_str(), "20%");
        assert_eq!(scale.len(), 2);
    }

    #[test]
    fn test_font_scale_insert_names() {
        let mut fonts = FontScale::new();
        fonts.insert_names("poppins", &["Poppins"]);
        fonts.insert_names("press-start", &["Press Start 2P", "cursive"]);

        assert_eq!(fonts.len(), 2);
        assert_eq!(
            fonts.get("press-start").unwrap().families(),
            &["Press Start 2P".to_string(), "cursive".to_string()]
        );
    }

    #[test]
    fn test_font_scale_serializes_as_lists() {
        let mut fonts = FontScale::new();
        fonts.insert_names("out", &["Outfit"]);
        let json = serde_json::to_value(&fonts).unwrap();
        assert_eq!(json, serde_json::json!({"out": ["Outfit"]}));
    }

    #[test]
    fn test_empty_scales() {
        assert!(TokenScale::new().is_empty());
        assert!(FontScale::new().is_empty());
    }
}
