//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the source directory
//! (the directory holding `data.json`). Configuration is sparse: user files
//! override stock defaults key-by-key, and unknown keys are rejected to
//! catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Case Gallery"        # Page title and header text
//! manifest = "data.json"        # Manifest filename in the source directory
//! images_dir = "images"         # Asset subdirectory and public URL prefix
//!
//! [lightbox]
//! reference_caption = "Reference Image"  # Caption shown for reference images
//!
//! [theme]
//! card_gap = "1.5rem"           # Vertical gap between case cards
//! page_padding = "2rem"         # Padding around the gallery column
//!
//! [colors.light]
//! background = "#f4f4f4"
//! text = "#1a1a1a"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#0066cc"
//! link_hover = "#004499"
//!
//! [colors.dark]
//! background = "#121212"
//! text = "#e8e8e8"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#66aaff"
//! link_hover = "#99ccff"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title and site header text.
    pub title: String,
    /// Manifest filename, resolved against the source directory.
    pub manifest: String,
    /// Asset subdirectory name, used both to locate assets in the source
    /// directory and as the public URL prefix (`{images_dir}/{case_no}/...`).
    pub images_dir: String,
    /// Lightbox viewer settings.
    pub lightbox: LightboxConfig,
    /// Theme/layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Case Gallery".to_string(),
            manifest: "data.json".to_string(),
            images_dir: "images".to_string(),
            lightbox: LightboxConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest.is_empty() {
            return Err(ConfigError::Validation("manifest must not be empty".into()));
        }
        if self.images_dir.is_empty() || self.images_dir.contains('/') {
            return Err(ConfigError::Validation(
                "images_dir must be a plain directory name".into(),
            ));
        }
        Ok(())
    }
}

/// Lightbox viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    /// Caption shown when a reference image is enlarged. The primary image
    /// always uses its own `alt_text` as caption.
    pub reference_caption: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            reference_caption: "Reference Image".to_string(),
        }
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Vertical gap between case cards (CSS value).
    pub card_gap: String,
    /// Padding around the gallery column (CSS value).
    pub page_padding: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            card_gap: "1.5rem".to_string(),
            page_padding: "2rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (labels, metadata, captions).
    pub text_muted: String,
    /// Card and thumbnail border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f4f4f4".to_string(),
            text: "#1a1a1a".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#0066cc".to_string(),
            link_hover: "#004499".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#121212".to_string(),
            text: "#e8e8e8".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#66aaff".to_string(),
            link_hover: "#99ccff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load config from `config.toml` in the source directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. Uses defaults if no `config.toml` exists.
pub fn load_config(source: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let config_path = source.join("config.toml");
    let merged = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        let overlay: toml::Value = toml::from_str(&content)?;
        merge_toml(base, overlay)
    } else {
        base
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# promptcase Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file next to data.json.
# Unknown keys will cause an error.

# Page title and site header text
title = "Case Gallery"

# Manifest filename in the source directory
manifest = "data.json"

# Asset subdirectory name. Also the public URL prefix: every case asset is
# served from {images_dir}/{case_no}/{filename}.
images_dir = "images"

# ---------------------------------------------------------------------------
# Lightbox viewer
# ---------------------------------------------------------------------------
[lightbox]
# Caption shown when a reference image is enlarged. The primary image
# always uses its own alt_text as caption.
reference_caption = "Reference Image"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Vertical gap between case cards (CSS value).
card_gap = "1.5rem"

# Padding around the gallery column (CSS value).
page_padding = "2rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f4f4f4"
text = "#1a1a1a"
text_muted = "#666666"    # Labels, metadata, captions
border = "#e0e0e0"
link = "#0066cc"
link_hover = "#004499"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#121212"
text = "#e8e8e8"
text_muted = "#999999"
border = "#333333"
link = "#66aaff"
link_hover = "#99ccff"
"##
}

/// Generate CSS custom properties from color and theme config.
pub fn generate_theme_css(config: &SiteConfig) -> String {
    let scheme_block = |s: &ColorScheme| {
        format!(
            "    --color-bg: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-link: {};\n    --color-link-hover: {};",
            s.background, s.text, s.text_muted, s.border, s.link, s.link_hover
        )
    };
    format!(
        ":root {{\n{light}\n    --card-gap: {gap};\n    --page-padding: {pad};\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}\n    }}\n}}\n",
        light = scheme_block(&config.colors.light),
        dark = scheme_block(&config.colors.dark),
        gap = config.theme.card_gap,
        pad = config.theme.page_padding,
    )
}

// ============================================================================
// Tests
// ============================================================================
