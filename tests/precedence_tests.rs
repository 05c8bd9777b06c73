// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for token source precedence.

use themecfg::prelude::*;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

#[test]
#[cfg(all(feature = "env", feature = "yaml"))]
fn test_precedence_env_over_theme_file() {
    let mut env_guard = EnvGuard::new();

    let mut theme_file = NamedTempFile::new().unwrap();
    writeln!(theme_file, "colors:\n  envtest: \"#111111\"").unwrap();

    env_guard.set("THEME_COLORS_ENVTEST", "#222222");

    let service = ThemeService::builder()
        .with_theme_file(theme_file.path())
        .unwrap()
        .with_env_overrides()
        .build()
        .unwrap();

    // Environment overrides win (priority 3 > 2)
    let value = service.get(&TokenKey::from("colors.envtest")).unwrap();
    assert_eq!(value.as_str(), "#222222");
}

#[test]
#[cfg(feature = "yaml")]
fn test_precedence_theme_file_over_base() {
    let mut theme_file = NamedTempFile::new().unwrap();
    writeln!(theme_file, "colors:\n  gray:\n    \"300\": \"#ABCDEF\"").unwrap();

    let service = ThemeService::builder()
        .with_base_theme()
        .with_theme_file(theme_file.path())
        .unwrap()
        .build()
        .unwrap();

    // The theme file shadows the built-in base theme (priority 2 > 1)
    let value = service.get(&TokenKey::from("colors.gray.300")).unwrap();
    assert_eq!(value.as_str(), "#ABCDEF");
}

#[test]
fn test_base_theme_resolves_alone() {
    let service = ThemeService::builder().with_base_theme().build().unwrap();

    let value = service.get(&TokenKey::from("colors.gray.300")).unwrap();
    assert_eq!(value.as_str(), "#D1D5DB");
}

#[test]
fn test_missing_token_falls_back_to_default() {
    let service = ThemeService::builder().with_base_theme().build().unwrap();

    let value = service.get_or_default(&TokenKey::from("colors.not-declared"), "currentColor");
    assert_eq!(value.as_str(), "currentColor");
}

#[test]
#[cfg(feature = "yaml")]
fn test_reload_picks_up_theme_file_changes() {
    let theme_file = NamedTempFile::new().unwrap();
    let path = theme_file.path().to_path_buf();

    std::fs::write(&path, "colors:\n  reloaded: \"#111111\"\n").unwrap();

    let mut service = ThemeService::builder()
        .with_theme_file(&path)
        .unwrap()
        .build()
        .unwrap();

    let key = TokenKey::from("colors.reloaded");
    assert_eq!(service.get(&key).unwrap().as_str(), "#111111");

    std::fs::write(&path, "colors:\n  reloaded: \"#222222\"\n").unwrap();
    service.reload().unwrap();

    // Reload refreshes the source and invalidates the resolver cache.
    assert_eq!(service.get(&key).unwrap().as_str(), "#222222");
}

#[test]
#[cfg(feature = "yaml")]
fn test_border_derivation_reads_merged_theme() {
    // When the theme file retints the neutral ramp, the border-color
    // derivation picks the override up through the resolver.
    let mut theme_file = NamedTempFile::new().unwrap();
    writeln!(theme_file, "colors:\n  gray:\n    \"300\": \"#C0C0C0\"").unwrap();

    let service = ThemeService::builder()
        .with_base_theme()
        .with_theme_file(theme_file.path())
        .unwrap()
        .build()
        .unwrap();

    let manifest = ThemeManifest::shipped();
    let borders = manifest.theme.extend.border_color.resolve(&service);

    assert_eq!(borders.get("DEFAULT").unwrap().as_str(), "#C0C0C0");
    assert_eq!(borders.get("play-hand-btn").unwrap().as_str(), "#5946bc");
}
