// SPDX-License-Identifier: MIT OR Apache-2.0

//! Theme parser trait definition.
//!
//! This module defines the `ThemeParser` trait, which provides an interface
//! for parsing theme files in different formats into the flat token map a
//! source serves.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing theme files.
///
/// Parsers convert a file's content into a flat key-value map. Nested
/// structures are flattened with dot notation: a theme file declaring
///
/// ```yaml
/// colors:
///   nav: "#00000080"
/// ```
///
/// parses into `colors.nav` -> `#00000080`.
///
/// # Examples
///
/// ```rust
/// use themecfg::ports::ThemeParser;
/// use themecfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct MyParser;
///
/// impl ThemeParser for MyParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(HashMap::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["myformat"]
///     }
/// }
/// ```
pub trait ThemeParser {
    /// Parses theme file content into a flat key-value map.
    ///
    /// Keys use dot notation for nested structures; values are kept as the
    /// verbatim strings the file declared.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// Returns the file extensions this parser can handle.
    fn supported_extensions(&self) -> &[&str];
}
