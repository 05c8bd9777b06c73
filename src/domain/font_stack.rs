// SPDX-License-Identifier: MIT OR Apache-2.0

//! Font family stacks.
//!
//! A font-family token maps an alias to an ordered list of family names with
//! fallbacks, e.g. `press-start` to `"Press Start 2P", cursive`. The stack
//! serializes as a list of names; the CSS rendition quotes names containing
//! whitespace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered list of font family names.
///
/// # Examples
///
/// ```
/// use themecfg::domain::font_stack::FontStack;
///
/// let stack = FontStack::from_names(&["Press Start 2P", "cursive"]);
/// assert_eq!(stack.to_string(), "\"Press Start 2P\", cursive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Creates a stack from a list of family names.
    pub fn new(families: Vec<String>) -> Self {
        FontStack(families)
    }

    /// Creates a stack from string slices.
    pub fn from_names(names: &[&str]) -> Self {
        FontStack(names.iter().map(|n| n.to_string()).collect())
    }

    /// The family names in fallback order.
    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// Number of families in the stack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the stack declares no families.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for FontStack {
    type Err = std::convert::Infallible;

    /// Parses a CSS-style comma-separated family list. Quoting with single
    /// or double quotes is accepted and stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let families = s
            .split(',')
            .map(|name| {
                name.trim()
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string()
            })
            .filter(|name| !name.is_empty())
            .collect();
        Ok(FontStack(families))
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for family in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            if family.contains(char::is_whitespace) {
                write!(f, "\"{}\"", family)?;
            } else {
                write!(f, "{}", family)?;
            }
        }
        Ok(())
    }
}
