// SPDX-License-Identifier: MIT OR Apache-2.0

//! Theme resolver trait definition.
//!
//! This module defines the `ThemeResolver` trait, the main interface for
//! looking up design tokens. Derived scales (border colors) are computed by
//! invoking this interface against the base theme, so anything that can
//! answer `get`/`get_or_default` can back a derivation.

use crate::domain::{Result, TokenKey, TokenValue};

/// The main token lookup trait.
///
/// A resolver aggregates one or more token sources and provides a unified
/// API for retrieving values with proper precedence handling. It is also the
/// lookup-with-default interface handed to derived scales.
///
/// # Examples
///
/// ```rust
/// use themecfg::domain::{Result, ThemeResolver, TokenKey, TokenValue};
///
/// struct FixedResolver;
///
/// impl ThemeResolver for FixedResolver {
///     fn get(&self, _key: &TokenKey) -> Result<TokenValue> {
///         Ok(TokenValue::from("#D1D5DB"))
///     }
///
///     fn get_or_default(&self, key: &TokenKey, default: &str) -> TokenValue {
///         self.get(key).unwrap_or_else(|_| TokenValue::from(default))
///     }
///
///     fn has(&self, key: &TokenKey) -> bool {
///         self.get(key).is_ok()
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let resolver = FixedResolver;
/// let key = TokenKey::from("colors.gray.300");
/// assert_eq!(resolver.get_or_default(&key, "currentColor").as_str(), "#D1D5DB");
/// ```
pub trait ThemeResolver {
    /// Retrieves a token value for the given key.
    ///
    /// Sources are queried in priority order and the first value found is
    /// returned. If no source provides a value, an error is returned.
    fn get(&self, key: &TokenKey) -> Result<TokenValue>;

    /// Retrieves a token value or returns a default if not found.
    ///
    /// This is the lookup shape derived scales use: the border-color
    /// derivation asks for `colors.gray.300` and falls back to
    /// `currentColor` when the base theme does not declare it.
    fn get_or_default(&self, key: &TokenKey, default: &str) -> TokenValue;

    /// Checks if a token exists in any source.
    fn has(&self, key: &TokenKey) -> bool;

    /// Reloads tokens from all sources.
    ///
    /// Sources that don't support reloading are skipped.
    fn reload(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResolver;

    impl ThemeResolver for TestResolver {
        fn get(&self, key: &TokenKey) -> Result<TokenValue> {
            if key.as_str() == "colors.gray.300" {
                Ok(TokenValue::from("#D1D5DB"))
            } else {
                Err(crate::domain::ThemeError::TokenNotFound {
                    key: key.as_str().to_string(),
                })
            }
        }

        fn get_or_default(&self, key: &TokenKey, default: &str) -> TokenValue {
            self.get(key).unwrap_or_else(|_| TokenValue::from(default))
        }

        fn has(&self, key: &TokenKey) -> bool {
            self.get(key).is_ok()
        }

        fn reload(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_resolver_get() {
        let resolver = TestResolver;
        let value = resolver.get(&TokenKey::from("colors.gray.300")).unwrap();
        assert_eq!(value.as_str(), "#D1D5DB");
    }

    #[test]
    fn test_resolver_get_or_default_falls_back() {
        let resolver = TestResolver;
        let value = resolver.get_or_default(&TokenKey::from("colors.gray.999"), "currentColor");
        assert_eq!(value.as_str(), "currentColor");
    }

    #[test]
    fn test_resolver_has() {
        let resolver = TestResolver;
        assert!(resolver.has(&TokenKey::from("colors.gray.300")));
        assert!(!resolver.has(&TokenKey::from("colors.missing")));
    }

    #[test]
    fn test_resolver_usable_as_trait_object() {
        let resolver: &dyn ThemeResolver = &TestResolver;
        assert!(resolver.has(&TokenKey::from("colors.gray.300")));
    }
}
