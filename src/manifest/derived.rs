// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived scales: function-valued manifest entries.
//!
//! Most scales are plain name/value maps, but a manifest entry may instead
//! be a function of the base theme — the border-color scale reads
//! `colors.gray.300` from whatever base theme is in effect and overrides
//! individual keys. A `DerivedScale` holds that function and is resolved
//! against a `ThemeResolver` when the manifest is exported, since the
//! exported record carries values, not functions.

use crate::domain::ThemeResolver;
use crate::manifest::TokenScale;
use std::fmt;

/// The derivation function type.
type DeriveFn = dyn Fn(&dyn ThemeResolver) -> TokenScale + Send + Sync;

/// A scale computed from the base theme at export time.
///
/// # Examples
///
/// ```
/// use themecfg::domain::TokenKey;
/// use themecfg::manifest::{DerivedScale, TokenScale};
/// use themecfg::service::ThemeService;
///
/// # fn main() -> themecfg::domain::Result<()> {
/// let scale = DerivedScale::new(|theme| {
///     let mut out = TokenScale::new();
///     out.insert(
///         "DEFAULT",
///         theme.get_or_default(&TokenKey::from("colors.gray.300"), "currentColor"),
///     );
///     out.insert("play-hand-btn", "#5946bc");
///     out
/// });
///
/// let service = ThemeService::builder().with_base_theme().build()?;
/// let resolved = scale.resolve(&service);
/// assert_eq!(resolved.get("DEFAULT").unwrap().as_str(), "#D1D5DB");
/// assert_eq!(resolved.get("play-hand-btn").unwrap().as_str(), "#5946bc");
/// # Ok(())
/// # }
/// ```
pub struct DerivedScale {
    derive: Box<DeriveFn>,
}

impl DerivedScale {
    /// Creates a derived scale from a derivation function.
    pub fn new(derive: impl Fn(&dyn ThemeResolver) -> TokenScale + Send + Sync + 'static) -> Self {
        DerivedScale {
            derive: Box::new(derive),
        }
    }

    /// Creates a derived scale that always yields the same entries.
    ///
    /// Useful when a manifest overrides a normally-derived scale with plain
    /// values.
    pub fn fixed(scale: TokenScale) -> Self {
        DerivedScale::new(move |_| scale.clone())
    }

    /// Computes the scale against the given base theme.
    ///
    /// Derivations hold no cached state; every call recomputes from the
    /// resolver.
    pub fn resolve(&self, theme: &dyn ThemeResolver) -> TokenScale {
        (self.derive)(theme)
    }
}

impl Default for DerivedScale {
    /// An empty fixed scale.
    fn default() -> Self {
        DerivedScale::fixed(TokenScale::new())
    }
}

impl fmt::Debug for DerivedScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedScale").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Result, ThemeError, TokenKey, TokenValue};

    struct EmptyResolver;

    impl ThemeResolver for EmptyResolver {
        fn get(&self, key: &TokenKey) -> Result<TokenValue> {
            Err(ThemeError::TokenNotFound {
                key: key.as_str().to_string(),
            })
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
    fn test_derived_scale_falls_back_without_base() {
        let scale = DerivedScale::new(|theme| {
            let mut out = TokenScale::new();
            out.insert(
                "DEFAULT",
                theme.get_or_default(&TokenKey::from("colors.gray.300"), "currentColor"),
            );
            out
        });

        let resolved = scale.resolve(&EmptyResolver);
        assert_eq!(resolved.get("DEFAULT").unwrap().as_str(), "currentColor");
    }

    #[test]
    fn test_derived_scale_fixed() {
        let fixed = DerivedScale::fixed(TokenScale::from_pairs(&[("DEFAULT", "#000000")]));
        let resolved = fixed.resolve(&EmptyResolver);
        assert_eq!(resolved.get("DEFAULT").unwrap().as_str(), "#000000");
    }

    #[test]
    fn test_derived_scale_recomputes_each_call() {
        let scale = DerivedScale::new(|theme| {
            let mut out = TokenScale::new();
            out.insert(
                "DEFAULT",
                theme.get_or_default(&TokenKey::from("colors.gray.300"), "currentColor"),
            );
            out
        });

        // Two resolutions against different resolvers see different values.
        let first = scale.resolve(&EmptyResolver);
        let service = crate::service::ThemeService::builder()
            .with_base_theme()
            .build()
            .unwrap();
        let second = scale.resolve(&service);

        assert_eq!(first.get("DEFAULT").unwrap().as_str(), "currentColor");
        assert_eq!(second.get("DEFAULT").unwrap().as_str(), "#D1D5DB");
    }

    #[test]
    fn test_derived_scale_debug() {
        let fixed = DerivedScale::fixed(TokenScale::new());
        assert!(format!("{:?}", fixed).contains("DerivedScale"));
    }
}
