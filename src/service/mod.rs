// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the theme resolver implementations.
//!
//! This module contains the concrete implementations of the `ThemeResolver`
//! trait, which provides the main interface for looking up design tokens.

pub mod theme_service;

// Re-export commonly used types
pub use theme_service::{ThemeService, ThemeServiceBuilder};
