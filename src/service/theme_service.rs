// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default theme resolver implementation.
//!
//! This module provides the default implementation of the `ThemeResolver`
//! trait, which aggregates multiple token sources and provides a unified
//! interface for looking up design tokens.

use crate::domain::{Result, ThemeError, ThemeResolver, TokenKey, TokenValue};
use crate::ports::TokenSource;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Default implementation of the theme resolver.
///
/// This service manages multiple token sources and queries them in priority
/// order to resolve design tokens. Sources with higher priority values are
/// queried first, and the first value found is returned — this is how a
/// theme extension shadows the base design-token set.
///
/// # Examples
///
/// ```rust
/// use themecfg::prelude::*;
/// use themecfg::service::ThemeService;
///
/// # fn main() -> Result<()> {
/// let service = ThemeService::builder().with_base_theme().build()?;
///
/// let key = TokenKey::from("colors.gray.300");
/// assert_eq!(service.get(&key)?.as_str(), "#D1D5DB");
/// # Ok(())
/// # }
/// ```
pub struct ThemeService {
    /// Token sources, maintained in priority order (highest first)
    sources: Vec<Box<dyn TokenSource>>,
    /// Cache for resolved tokens
    cache: Arc<RwLock<HashMap<String, TokenValue>>>,
}

impl ThemeService {
    /// Creates a new empty theme service.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a new theme service builder.
    pub fn builder() -> ThemeServiceBuilder {
        ThemeServiceBuilder::new()
    }

    /// Creates a theme service with default sources.
    ///
    /// This includes the built-in base theme, environment overrides, and a
    /// YAML theme file from the default OS-appropriate location. If the
    /// theme file doesn't exist, the remaining sources are used alone.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use themecfg::service::ThemeService;
    ///
    /// # fn main() -> themecfg::domain::Result<()> {
    /// let service = ThemeService::with_defaults("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        let mut builder = Self::builder().with_base_theme();

        #[cfg(feature = "env")]
        {
            builder = builder.with_env_overrides();
        }

        #[cfg(feature = "yaml")]
        {
            use crate::adapters::ThemeFileAdapter;
            if let Ok(adapter) = ThemeFileAdapter::from_default_location(app_name, qualifier) {
                builder = builder.with_source(Box::new(adapter));
            }
        }

        #[cfg(not(feature = "yaml"))]
        {
            let _ = (app_name, qualifier);
        }

        builder.build()
    }

    /// Adds a token source to the service.
    ///
    /// Sources are automatically sorted by priority after being added.
    pub fn add_source(&mut self, source: Box<dyn TokenSource>) {
        self.sources.push(source);
        self.sort_sources();
        self.invalidate_cache();
    }

    /// Sorts sources by priority (highest first).
    fn sort_sources(&mut self) {
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Invalidates the cache.
    fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Queries all sources for a token, respecting priority order.
    fn query_sources(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => continue,
                Err(e) => {
                    // Fall through to the next source.
                    tracing::debug!(
                        "Error querying source '{}' for token '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        Ok(None)
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeResolver for ThemeService {
    fn get(&self, key: &TokenKey) -> Result<TokenValue> {
        // Check cache first
        if let Ok(cache) = self.cache.read() {
            if let Some(value) = cache.get(key.as_str()) {
                return Ok(value.clone());
            }
        }

        // Query sources
        let value = self
            .query_sources(key)?
            .ok_or_else(|| ThemeError::TokenNotFound {
                key: key.as_str().to_string(),
            })?;

        // Update cache
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key.as_str().to_string(), value.clone());
        }

        Ok(value)
    }

    fn get_or_default(&self, key: &TokenKey, default: &str) -> TokenValue {
        self.get(key).unwrap_or_else(|_| TokenValue::from(default))
    }

    fn has(&self, key: &TokenKey) -> bool {
        self.get(key).is_ok()
    }

    fn reload(&mut self) -> Result<()> {
        for source in &mut self.sources {
            if let Err(e) = source.reload() {
                tracing::warn!("Failed to reload source '{}': {}", source.name(), e);
            }
        }

        self.invalidate_cache();
        Ok(())
    }
}

/// Builder for constructing a `ThemeService`.
///
/// # Examples
///
/// ```rust
/// use themecfg::service::ThemeServiceBuilder;
///
/// # fn main() -> themecfg::domain::Result<()> {
/// let service = ThemeServiceBuilder::new().with_base_theme().build()?;
/// # Ok(())
/// # }
/// ```
pub struct ThemeServiceBuilder {
    sources: Vec<Box<dyn TokenSource>>,
}

impl ThemeServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a token source to the builder.
    pub fn with_source(mut self, source: Box<dyn TokenSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds the built-in base theme as a token source.
    pub fn with_base_theme(self) -> Self {
        use crate::adapters::BaseThemeAdapter;
        self.with_source(Box::new(BaseThemeAdapter::new()))
    }

    /// Adds `THEME_`-prefixed environment variables as a token source.
    #[cfg(feature = "env")]
    pub fn with_env_overrides(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Adds environment variables with a custom prefix as a token source.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::with_prefix(prefix)))
    }

    /// Adds a YAML theme file as a token source.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use themecfg::service::ThemeServiceBuilder;
    ///
    /// # fn main() -> themecfg::domain::Result<()> {
    /// let service = ThemeServiceBuilder::new()
    ///     .with_theme_file("/etc/myapp/theme.yaml")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn with_theme_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::ThemeFileAdapter;
        let adapter = ThemeFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Builds the theme service.
    pub fn build(self) -> Result<ThemeService> {
        let mut service = ThemeService::new();

        for source in self.sources {
            service.add_source(source);
        }

        Ok(service)
    }
}

impl Default for ThemeServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
