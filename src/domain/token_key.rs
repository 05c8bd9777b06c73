// SPDX-License-Identifier: MIT OR Apache-2.0

//! Design-token key newtype for type-safe key handling.
//!
//! This module provides the `TokenKey` type, a newtype wrapper around `String`
//! that provides type safety for token keys and prevents accidental string
//! confusion. Keys address nested scales with dot notation, e.g.
//! `colors.gray.300` or `maxWidth.1/2`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for design-token keys.
///
/// `TokenKey` wraps a `String` to provide type safety when working with token
/// keys. Dot notation addresses entries within a scale: the first segment is
/// the scale name, the remainder the entry name (which may itself contain
/// dots, as in `colors.gray.300`).
///
/// # Examples
///
/// ```
/// use themecfg::domain::token_key::TokenKey;
///
/// let key = TokenKey::from("colors.nav");
/// assert_eq!(key.as_str(), "colors.nav");
/// assert_eq!(key.scale(), Some("colors"));
/// assert_eq!(key.entry(), Some("nav"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenKey(String);

impl TokenKey {
    /// Creates a new `TokenKey` from a `String`.
    pub fn new(key: String) -> Self {
        TokenKey(key)
    }

    /// Builds a key from a scale name and an entry name.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_key::TokenKey;
    ///
    /// let key = TokenKey::scoped("colors", "gray.300");
    /// assert_eq!(key.as_str(), "colors.gray.300");
    /// ```
    pub fn scoped(scale: &str, entry: &str) -> Self {
        TokenKey(format!("{}.{}", scale, entry))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `TokenKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the scale segment of the key, if the key is scoped.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_key::TokenKey;
    ///
    /// assert_eq!(TokenKey::from("colors.gray.300").scale(), Some("colors"));
    /// assert_eq!(TokenKey::from("plain").scale(), None);
    /// ```
    pub fn scale(&self) -> Option<&str> {
        self.0.split_once('.').map(|(scale, _)| scale)
    }

    /// Returns the entry segment of the key (everything after the scale),
    /// if the key is scoped.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecfg::domain::token_key::TokenKey;
    ///
    /// assert_eq!(TokenKey::from("colors.gray.300").entry(), Some("gray.300"));
    /// assert_eq!(TokenKey::from("plain").entry(), None);
    /// ```
    pub fn entry(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, entry)| entry)
    }
}

impl From<String> for TokenKey {
    fn from(s: String) -> Self {
        TokenKey(s)
    }
}

impl From<&str> for TokenKey {
    fn from(s: &str) -> Self {
        TokenKey(s.to_string())
    }
}

impl From<TokenKey> for String {
    fn from(key: TokenKey) -> Self {
        key.0
    }
}

impl AsRef<str> for TokenKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for TokenKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_token_key_new() {
        let key = TokenKey::new("colors.nav".to_string());
        assert_eq!(key.as_str(), "colors.nav");
    }

    #[test]
    fn test_token_key_scoped() {
        let key = TokenKey::scoped("fontFamily", "press-start");
        assert_eq!(key.as_str(), "fontFamily.press-start");
    }

    #[test]
    fn test_token_key_from_string() {
        let key = TokenKey::from("colors.nav".to_string());
        assert_eq!(key.as_str(), "colors.nav");
    }

    #[test]
    fn test_token_key_into_string() {
        let key = TokenKey::from("colors.nav");
        assert_eq!(key.into_string(), "colors.nav");
    }

    #[test]
    fn test_token_key_scale_and_entry() {
        let key = TokenKey::from("colors.gray.300");
        assert_eq!(key.scale(), Some("colors"));
        assert_eq!(key.entry(), Some("gray.300"));
    }

    #[test]
    fn test_token_key_unscoped() {
        let key = TokenKey::from("purge");
        assert_eq!(key.scale(), None);
        assert_eq!(key.entry(), None);
    }

    #[test]
    fn test_token_key_display() {
        let key = TokenKey::from("maxWidth.1/2");
        assert_eq!(format!("{}", key), "maxWidth.1/2");
    }

    #[test]
    fn test_token_key_equality() {
        let key1 = TokenKey::from("colors.cyan");
        let key2 = TokenKey::from("colors.cyan");
        let key3 = TokenKey::from("colors.nav");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_token_key_hash() {
        let key1 = TokenKey::from("colors.cyan");
        let key2 = TokenKey::from("colors.cyan");
        let key3 = TokenKey::from("colors.nav");

        let mut map = HashMap::new();
        map.insert(key1.clone(), "hsl(178, 100%, 50%)");

        assert_eq!(map.get(&key2), Some(&"hsl(178, 100%, 50%)"));
        assert_eq!(map.get(&key3), None);
    }

    #[test]
    fn test_token_key_with_fraction_entry() {
        // Fraction keys contain a slash, which must survive untouched.
        let key = TokenKey::from("flex.3/4");
        assert_eq!(key.scale(), Some("flex"));
        assert_eq!(key.entry(), Some("3/4"));
    }

    #[test]
    fn test_token_key_as_ref() {
        let key = TokenKey::from("colors.nav");
        let s: &str = key.as_ref();
        assert_eq!(s, "colors.nav");
    }
}
