// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable token source adapter.
//!
//! This module provides an adapter that reads design-token overrides from
//! environment variables, so a build pipeline can retint a theme without
//! editing the theme file.

use crate::domain::{Result, TokenKey, TokenValue};
use crate::ports::TokenSource;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

/// Maximum length for environment variable keys; longer entries are skipped.
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values; longer entries are skipped.
const MAX_ENV_VALUE_LEN: usize = 65536;

/// The prefix token overrides are read from by default.
const DEFAULT_PREFIX: &str = "THEME_";

/// Token source adapter for environment variables.
///
/// Variables are matched by prefix and mapped to token keys by stripping the
/// prefix, lowercasing, and replacing underscores with dots:
/// `THEME_COLORS_NAV` becomes `colors.nav`.
///
/// Keys containing dashes or mixed case (`colors.play-hand-color`,
/// `maxWidth`) cannot be addressed from the environment; they can only come
/// from the theme file or the manifest itself.
///
/// # Priority
///
/// Environment overrides have the highest priority (3): they shadow both
/// theme files (priority 2) and the built-in base theme (priority 1).
///
/// # Examples
///
/// ```rust
/// use themecfg::adapters::EnvVarAdapter;
///
/// // Read THEME_-prefixed variables
/// let adapter = EnvVarAdapter::new();
///
/// // Or choose a custom prefix
/// let adapter = EnvVarAdapter::with_prefix("BRAND_");
/// ```
#[derive(Debug)]
pub struct EnvVarAdapter {
    /// Prefix used to filter environment variables
    prefix: String,
    /// Cached variables with interior mutability for thread-safe lazy loading
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl EnvVarAdapter {
    /// Creates an adapter reading `THEME_`-prefixed variables.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Creates an adapter with a custom prefix.
    ///
    /// Only variables starting with the given prefix are read; the prefix is
    /// stripped when mapping to token keys.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cache: RwLock::new(None),
        }
    }

    /// Creates an adapter with pre-populated token keys for testing.
    ///
    /// **Note**: intended for tests; keys are taken as-is with no prefix or
    /// case mapping applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use themecfg::adapters::EnvVarAdapter;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("colors.nav".to_string(), "#FF0000".to_string());
    /// let adapter = EnvVarAdapter::with_values(values);
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: String::new(),
            cache: RwLock::new(Some(values)),
        }
    }

    /// Maps an environment variable name to a token key.
    fn token_key(&self, var: &str) -> Option<String> {
        var.strip_prefix(&self.prefix)
            .map(|rest| rest.to_lowercase().replace('_', "."))
    }

    /// Loads matching environment variables into a fresh map.
    fn load(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();

        for (var, value) in env::vars() {
            if var.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={}",
                    var.len(),
                    value.len()
                );
                continue;
            }
            if let Some(key) = self.token_key(&var) {
                if !key.is_empty() {
                    values.insert(key, value);
                }
            }
        }

        values
    }

    /// Returns the cached variables, loading them on first use.
    fn values(&self) -> HashMap<String, String> {
        if let Ok(cache) = self.cache.read() {
            if let Some(values) = cache.as_ref() {
                return values.clone();
            }
        }

        let loaded = self.load();
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(loaded.clone());
        }
        loaded
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
        Ok(self
            .values()
            .get(key.as_str())
            .map(|v| TokenValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<TokenKey>> {
        Ok(self
            .values()
            .keys()
            .map(|k| TokenKey::from(k.as_str()))
            .collect())
    }

    fn reload(&mut self) -> Result<()> {
        if let Ok(mut cache) = self.cache.write() {
            *cache = None;
        }
        Ok(())
    }
}
