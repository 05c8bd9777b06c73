// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing token source implementations.
//!
//! This module contains concrete implementations of the token source traits
//! defined in the ports layer. Each adapter implements the `TokenSource`
//! trait to provide design tokens from a specific source.

pub mod base_theme;
#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use base_theme::BaseThemeAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
#[cfg(feature = "yaml")]
pub use yaml_file::{ThemeFileAdapter, YamlParser};
