// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML theme file token source adapter.
//!
//! This module provides an adapter that reads design-token values from YAML
//! theme files, the on-disk form of a theme extension.

use crate::domain::{Result, ThemeError, TokenKey, TokenValue};
use crate::ports::{ThemeParser, TokenSource};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for theme files (1MB). Theme files are small; a
/// larger file is almost certainly not one.
const MAX_THEME_FILE_SIZE: u64 = 1024 * 1024;

/// YAML parser implementation.
///
/// Converts YAML theme files into flat key-value maps using dot notation
/// for nested scales.
///
/// # Examples
///
/// ```rust
/// use themecfg::adapters::YamlParser;
/// use themecfg::ports::ThemeParser;
///
/// let parser = YamlParser::new();
/// let yaml = "colors:\n  nav: \"#00000080\"";
/// let result = parser.parse(yaml).unwrap();
/// assert_eq!(result.get("colors.nav"), Some(&"#00000080".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        let new_prefix = if prefix.is_empty() {
                            key_str.to_string()
                        } else {
                            format!("{}.{}", prefix, key_str)
                        };
                        Self::flatten_yaml(val, &new_prefix, result);
                    }
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                // Font stacks are the one list-valued scale; flatten them
                // back to the comma-separated CSS form.
                let names: Vec<String> = seq
                    .iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect();
                if names.len() == seq.len() {
                    result.insert(prefix.to_string(), names.join(", "));
                } else {
                    for (i, val) in seq.iter().enumerate() {
                        let new_prefix = format!("{}.{}", prefix, i);
                        Self::flatten_yaml(val, &new_prefix, result);
                    }
                }
            }
            serde_yaml::Value::String(s) => {
                result.insert(prefix.to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(prefix.to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(prefix.to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                result.insert(prefix.to_string(), String::new());
            }
            _ => {}
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ThemeError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        Self::flatten_yaml(&value, "", &mut result);
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Token source adapter for YAML theme files.
///
/// # Priority
///
/// Theme files have a priority of 2: they shadow the built-in base theme
/// (priority 1) and are shadowed by environment overrides (priority 3).
///
/// # Examples
///
/// ```rust,no_run
/// use themecfg::adapters::ThemeFileAdapter;
///
/// // Load from a specific file
/// let adapter = ThemeFileAdapter::from_file("/path/to/theme.yaml").unwrap();
///
/// // Load from the OS default location
/// let adapter = ThemeFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ThemeFileAdapter {
    /// Path to the theme file
    file_path: PathBuf,
    /// Parsed token values
    values: HashMap<String, String>,
    /// YAML parser
    parser: YamlParser,
}

impl ThemeFileAdapter {
    /// Creates a new theme file adapter from a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let parser = YamlParser::new();

        // Canonicalize to prevent directory traversal.
        let canonical_path =
            file_path
                .canonicalize()
                .map_err(|e| ThemeError::SourceError {
                    source_name: "theme-file".to_string(),
                    message: format!(
                        "Invalid or inaccessible path: {}",
                        file_path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("<unknown>")
                    ),
                    source: Some(Box::new(e)),
                })?;

        let content = Self::read_checked(&canonical_path)?;
        let values = parser.parse(&content)?;

        Ok(Self {
            file_path: canonical_path,
            values,
            parser,
        })
    }

    /// Creates a theme file adapter from the default OS-appropriate
    /// location, `<config dir>/theme.yaml`.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "theme.yaml")
    }

    /// Creates a theme file adapter with a custom file name in the default
    /// location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ThemeError::SourceError {
                source_name: "theme-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        let theme_file = proj_dirs.config_dir().join(filename);
        Self::from_file(theme_file)
    }

    /// Returns the path to the theme file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads the file after checking its size against the cap.
    fn read_checked(path: &Path) -> Result<String> {
        let file_name = || {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
                .to_string()
        };

        let metadata = fs::metadata(path).map_err(|e| ThemeError::SourceError {
            source_name: "theme-file".to_string(),
            message: format!("Failed to read file metadata: {}", file_name()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_THEME_FILE_SIZE {
            return Err(ThemeError::SourceError {
                source_name: "theme-file".to_string(),
                message: format!(
                    "Theme file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_THEME_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read_to_string(path).map_err(|e| ThemeError::SourceError {
            source_name: "theme-file".to_string(),
            message: format!("Failed to read theme file: {}", file_name()),
            source: Some(Box::new(e)),
        })
    }
}

impl TokenSource for ThemeFileAdapter {
    fn name(&self) -> &str {
        "theme-file"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &TokenKey) -> Result<Option<TokenValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| TokenValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<TokenKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| TokenKey::from(k.as_str()))
            .collect())
    }

    fn reload(&mut self) -> Result<()> {
        let content = Self::read_checked(&self.file_path)?;
        self.values = self.parser.parse(&content)?;
        Ok(())
    }
}
