// SPDX-License-Identifier: MIT OR Apache-2.0

//! Emits the shipped theme manifest as the JSON record the consuming
//! build tool reads.
//!
//! This example demonstrates:
//! - Building a theme resolver over the built-in base theme
//! - Validating the manifest before export
//! - Resolving the derived border-color scale at export time
//!
//! To run this example:
//! ```bash
//! cargo run --example emit_manifest
//! ```

use themecfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let theme = ThemeService::builder().with_base_theme().build()?;
    let manifest = ThemeManifest::shipped();

    let issues = validate(&manifest, &theme);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("validation: {}", issue);
        }
        let first = &issues[0];
        return Err(ThemeError::ValidationError {
            scale: first.scale.clone(),
            key: first.key.clone(),
            reason: first.reason.clone(),
        });
    }

    println!("{}", manifest.to_json_string(&theme)?);
    Ok(())
}
