// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token source trait definition.
//!
//! This module defines the `TokenSource` trait, the primary port (interface)
//! for implementing different design-token sources. Any token source (the
//! built-in base theme, theme files, environment overrides) must implement
//! this trait.

use crate::domain::{Result, TokenKey, TokenValue};

/// A trait for design-token sources.
///
/// This trait defines the interface that all token sources must implement.
/// It provides methods for retrieving token values, listing all available
/// keys, and reloading the source if supported.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Priority
///
/// Each source has a priority value (0-255) that determines the order in
/// which sources are queried. Higher priority values take precedence over
/// lower ones. The typical priority values are:
///
/// - **3 (highest)**: Environment overrides
/// - **2**: Theme files
/// - **1 (lowest)**: The built-in base theme
///
/// This ordering is the merge semantics of a theme extension: anything a
/// higher-priority source declares shadows the base design-token set.
///
/// # Examples
///
/// ```rust
/// use themecfg::ports::TokenSource;
/// use themecfg::domain::{Result, TokenKey, TokenValue};
///
/// struct MySource;
///
/// impl TokenSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
///         Ok(None)
///     }
///
///     fn all_keys(&self) -> Result<Vec<TokenKey>> {
///         Ok(vec![])
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait TokenSource: Send + Sync {
    /// Returns the name of this token source.
    ///
    /// The name is used for logging, error messages, and debugging. It
    /// should be a short, descriptive identifier like "base-theme",
    /// "theme-file", or "env".
    fn name(&self) -> &str;

    /// Returns the priority of this token source.
    ///
    /// Priority determines the order in which sources are queried. When
    /// multiple sources provide a value for the same key, the value from
    /// the source with the highest priority wins.
    fn priority(&self) -> u8;

    /// Retrieves a token value for the given key.
    ///
    /// Returns `Ok(Some(value))` if the key exists in this source,
    /// `Ok(None)` if it does not, or `Err` if an error occurred while
    /// retrieving the value.
    fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>>;

    /// Returns all token keys available in this source.
    ///
    /// Useful for discovering declared tokens, debugging, and validation.
    fn all_keys(&self) -> Result<Vec<TokenKey>>;

    /// Reloads the tokens from the source.
    ///
    /// Sources backed by inert data (the built-in base theme) treat this as
    /// a no-op and return `Ok(())`.
    fn reload(&mut self) -> Result<()>;

    /// Retrieves a token value for the given key string.
    ///
    /// Convenience wrapper equivalent to `get(&TokenKey::from(key))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use themecfg::ports::TokenSource;
    /// # use themecfg::domain::{Result, TokenKey, TokenValue};
    /// # struct MySource;
    /// # impl TokenSource for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn priority(&self) -> u8 { 1 }
    /// #     fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
    /// #         if key.as_str() == "colors.nav" {
    /// #             Ok(Some(TokenValue::from("#00000080")))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// #     fn all_keys(&self) -> Result<Vec<TokenKey>> { Ok(vec![]) }
    /// #     fn reload(&mut self) -> Result<()> { Ok(()) }
    /// # }
    /// let source = MySource;
    /// let value = source.get_str("colors.nav").unwrap();
    /// assert!(value.is_some());
    /// ```
    fn get_str(&self, key: &str) -> Result<Option<TokenValue>> {
        self.get(&TokenKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        name: String,
        priority: u8,
    }

    impl TokenSource for TestSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn get(&self, _key: &TokenKey) -> Result<Option<TokenValue>> {
            Ok(None)
        }

        fn all_keys(&self) -> Result<Vec<TokenKey>> {
            Ok(vec![])
        }

        fn reload(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_token_source_name() {
        let source = TestSource {
            name: "test-source".to_string(),
            priority: 1,
        };
        assert_eq!(source.name(), "test-source");
    }

    #[test]
    fn test_token_source_priority() {
        let source = TestSource {
            name: "test-source".to_string(),
            priority: 2,
        };
        assert_eq!(source.priority(), 2);
    }

    #[test]
    fn test_token_source_get_returns_none() {
        let source = TestSource {
            name: "test-source".to_string(),
            priority: 1,
        };
        let result = source.get(&TokenKey::from("colors.missing")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_token_source_get_str() {
        let source = TestSource {
            name: "test-source".to_string(),
            priority: 1,
        };
        assert!(source.get_str("colors.missing").unwrap().is_none());
    }

    #[test]
    fn test_token_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn TokenSource>>();
    }
}
