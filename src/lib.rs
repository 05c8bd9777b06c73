// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture design-token configuration crate.
//!
//! This crate declares the design-token configuration of a front-end theme —
//! color palettes, font family stacks, fractional sizing scales, flex
//! shorthands, and derived border colors — and exports it in the record
//! shape a build-time CSS generator consumes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`TokenKey`, `TokenValue`,
//!   color/fraction/font value types, errors)
//! - **Ports**: Trait definitions that define interfaces (`TokenSource`,
//!   `ThemeParser`)
//! - **Adapters**: Implementations for specific token sources (the built-in
//!   base theme, YAML theme files, environment overrides)
//! - **Service**: The theme resolver that merges sources by precedence
//! - **Manifest**: The exported record (`purge`, `darkMode`, `theme.extend`,
//!   `variants`, `plugins`), its derived scales, and structural validation
//!
//! # Features
//!
//! - **Precedence**: Environment overrides > theme files > base theme
//! - **Typed Values**: Colors, percentages, fractions, and flex shorthands
//!   are parsed at the point of use; declared strings stay verbatim
//! - **Derived Scales**: Function-valued manifest entries resolved against
//!   the base theme at export time
//! - **Validation**: Structural checks for color syntax, fraction/value
//!   consistency, and the border-color derivation
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML theme file support (default)
//! - `env`: Enable environment variable overrides (default)
//!
//! # Quick Start
//!
//! ```rust
//! use themecfg::manifest::{validate, ThemeManifest};
//! use themecfg::service::ThemeService;
//!
//! # fn main() -> themecfg::domain::Result<()> {
//! let theme = ThemeService::builder().with_base_theme().build()?;
//! let manifest = ThemeManifest::shipped();
//!
//! assert!(validate(&manifest, &theme).is_empty());
//! let record = manifest.to_json(&theme)?;
//! assert_eq!(record["theme"]["extend"]["borderColor"]["DEFAULT"], "#D1D5DB");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod manifest;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::domain::{
        Color, FlexShorthand, FontStack, Fraction, Result, ThemeError, ThemeResolver, TokenKey,
        TokenValue,
    };
    pub use crate::manifest::{
        validate, DarkMode, DerivedScale, FontScale, ThemeManifest, TokenScale, ValidationIssue,
    };
    pub use crate::ports::{ThemeParser, TokenSource};
    pub use crate::service::{ThemeService, ThemeServiceBuilder};

    // Re-export adapters based on feature flags
    pub use crate::adapters::BaseThemeAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{ThemeFileAdapter, YamlParser};
}
