// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural validation of theme manifests.
//!
//! A manifest has no runtime behavior, so the only verifiable properties are
//! structural: required sections are non-empty, every color token parses,
//! fractional keys map to values consistent with their names, and the
//! border-color derivation yields a usable default. Validation classifies
//! declared values; it never rewrites them.

use crate::domain::fraction::parse_percentage;
use crate::domain::{Color, FlexShorthand, Fraction, ThemeResolver};
use crate::manifest::ThemeManifest;
use std::fmt;

/// Factors and percentages are compared to the declared strings after
/// parsing; anything beyond this is a real mismatch, not float noise.
const CONSISTENCY_EPSILON: f64 = 1e-9;

/// A single defect found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The scale (or top-level section) the issue was found in.
    pub scale: String,
    /// The offending key, empty for section-level issues.
    pub key: String,
    /// Why the entry was rejected.
    pub reason: String,
}

impl ValidationIssue {
    fn section(scale: &str, reason: impl Into<String>) -> Self {
        ValidationIssue {
            scale: scale.to_string(),
            key: String::new(),
            reason: reason.into(),
        }
    }

    fn entry(scale: &str, key: &str, reason: impl Into<String>) -> Self {
        ValidationIssue {
            scale: scale.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{}: {}", self.scale, self.reason)
        } else {
            write!(f, "{}.{}: {}", self.scale, self.key, self.reason)
        }
    }
}

/// Validates a manifest against the consuming tool's structural
/// expectations.
///
/// Derived scales are resolved against `theme`, so the same manifest can be
/// validated against different base themes. Returns all issues found; an
/// empty list means the manifest is clean.
///
/// # Examples
///
/// ```
/// use themecfg::manifest::{validate, ThemeManifest};
/// use themecfg::service::ThemeService;
///
/// # fn main() -> themecfg::domain::Result<()> {
/// let manifest = ThemeManifest::shipped();
/// let theme = ThemeService::builder().with_base_theme().build()?;
///
/// assert!(validate(&manifest, &theme).is_empty());
/// # Ok(())
/// # }
/// ```
pub fn validate(manifest: &ThemeManifest, theme: &dyn ThemeResolver) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let extend = &manifest.theme.extend;

    if manifest.purge.is_empty() {
        issues.push(ValidationIssue::section(
            "purge",
            "content globs must not be empty",
        ));
    }

    check_colors(manifest, &mut issues);
    check_fonts(manifest, &mut issues);
    check_background_images(manifest, &mut issues);

    for (name, scale) in extend.sizing_scales() {
        check_sizing_scale(name, scale, &mut issues);
    }
    check_flex(manifest, &mut issues);
    check_border_colors(manifest, theme, &mut issues);

    if !issues.is_empty() {
        tracing::debug!("Manifest validation found {} issue(s)", issues.len());
    }
    issues
}

fn check_colors(manifest: &ThemeManifest, issues: &mut Vec<ValidationIssue>) {
    let colors = &manifest.theme.extend.colors;

    if colors.is_empty() {
        issues.push(ValidationIssue::section(
            "colors",
            "color palette must not be empty",
        ));
        return;
    }

    for (key, value) in colors.iter() {
        if value.is_css_keyword() {
            continue;
        }
        if let Err(e) = value.as_str().parse::<Color>() {
            issues.push(ValidationIssue::entry("colors", key, e.to_string()));
        }
    }
}

fn check_fonts(manifest: &ThemeManifest, issues: &mut Vec<ValidationIssue>) {
    for (alias, stack) in manifest.theme.extend.font_family.iter() {
        if stack.is_empty() {
            issues.push(ValidationIssue::entry(
                "fontFamily",
                alias,
                "font stack declares no families",
            ));
        }
    }
}

fn check_background_images(manifest: &ThemeManifest, issues: &mut Vec<ValidationIssue>) {
    for (key, value) in manifest.theme.extend.background_image.iter() {
        let v = value.as_str();
        if !(v.starts_with("url(") && v.ends_with(')')) {
            issues.push(ValidationIssue::entry(
                "backgroundImage",
                key,
                format!("expected a url(...) value, got '{}'", v),
            ));
        }
    }
}

fn check_sizing_scale(
    name: &str,
    scale: &crate::manifest::TokenScale,
    issues: &mut Vec<ValidationIssue>,
) {
    for (key, value) in scale.iter() {
        let fraction: Fraction = match key.parse() {
            Ok(fraction) => fraction,
            Err(e) => {
                issues.push(ValidationIssue::entry(name, key, e.to_string()));
                continue;
            }
        };

        let percentage = match parse_percentage(value.as_str()) {
            Ok(percentage) => percentage,
            Err(e) => {
                issues.push(ValidationIssue::entry(name, key, e.to_string()));
                continue;
            }
        };

        if (percentage - fraction.percentage()).abs() > CONSISTENCY_EPSILON {
            issues.push(ValidationIssue::entry(
                name,
                key,
                format!(
                    "value '{}' is inconsistent with key '{}'; expected '{}'",
                    value,
                    key,
                    fraction.percentage_string()
                ),
            ));
        }
    }
}

fn check_flex(manifest: &ThemeManifest, issues: &mut Vec<ValidationIssue>) {
    for (key, value) in manifest.theme.extend.flex.iter() {
        let fraction: Fraction = match key.parse() {
            Ok(fraction) => fraction,
            Err(e) => {
                issues.push(ValidationIssue::entry("flex", key, e.to_string()));
                continue;
            }
        };

        let flex: FlexShorthand = match value.as_str().parse() {
            Ok(flex) => flex,
            Err(e) => {
                issues.push(ValidationIssue::entry("flex", key, e.to_string()));
                continue;
            }
        };

        let factor = fraction.flex_factor();
        if (flex.grow() - factor).abs() > CONSISTENCY_EPSILON
            || (flex.shrink() - factor).abs() > CONSISTENCY_EPSILON
        {
            issues.push(ValidationIssue::entry(
                "flex",
                key,
                format!(
                    "factors '{}' are inconsistent with key '{}'; expected {}",
                    value, key, factor
                ),
            ));
        }
    }
}

fn check_border_colors(
    manifest: &ThemeManifest,
    theme: &dyn ThemeResolver,
    issues: &mut Vec<ValidationIssue>,
) {
    let resolved = manifest.theme.extend.border_color.resolve(theme);

    if !resolved.contains("DEFAULT") {
        issues.push(ValidationIssue::section(
            "borderColor",
            "derivation must yield a DEFAULT entry",
        ));
    }

    for (key, value) in resolved.iter() {
        if value.is_css_keyword() {
            continue;
        }
        if let Err(e) = value.as_str().parse::<Color>() {
            issues.push(ValidationIssue::entry("borderColor", key, e.to_string()));
        }
    }
}
