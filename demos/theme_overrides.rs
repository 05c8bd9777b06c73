// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demonstrates retinting a theme through environment overrides.
//!
//! Environment overrides have the highest precedence, so a build pipeline
//! can shadow any base token without editing a theme file. The derived
//! border-color scale picks overrides up through the resolver.
//!
//! To run this example:
//! ```bash
//! # Shadow the neutral ramp entry the border derivation reads
//! export THEME_COLORS_GRAY_300="#C0C0C0"
//!
//! cargo run --example theme_overrides
//! ```

use themecfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let theme = ThemeService::builder()
        .with_base_theme()
        .with_env_overrides()
        .build()?;

    println!("=== themecfg: environment overrides ===\n");

    let gray = TokenKey::from("colors.gray.300");
    println!("colors.gray.300 resolves to: {}", theme.get(&gray)?);

    let manifest = ThemeManifest::shipped();
    let borders = manifest.theme.extend.border_color.resolve(&theme);

    println!("borderColor.DEFAULT:       {}", borders.get("DEFAULT").unwrap());
    println!(
        "borderColor.play-hand-btn: {}",
        borders.get("play-hand-btn").unwrap()
    );

    Ok(())
}
