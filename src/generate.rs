//! Site generation.
//!
//! Orchestrates a build: load config and manifest, probe asset dimensions,
//! render `index.html`, and copy the images tree into the output directory.
//! Also home of the `check` pipeline, which validates without writing.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The complete gallery page (CSS and JS inline)
//! └── images/             # Copied verbatim from the source tree
//!     ├── 1/
//!     │   ├── result.png
//!     │   └── ref-a.png
//!     └── 2/
//!         └── ...
//! ```
//!
//! ## Failure Policy
//!
//! An unreadable or malformed manifest is the one load-time failure the
//! original gallery distinguishes. On that path the build still writes a
//! page whose gallery region carries the generic error message — a deploy
//! never ships a half-rendered gallery — then surfaces the diagnostic to
//! the operator and fails. Empty manifests are not errors: they build a
//! page with the empty-state message.

use crate::assets::{self, AssetIndex, MissingAsset};
use crate::config::{self, ConfigError, SiteConfig};
use crate::manifest::{self, Case, Lint, ManifestError};
use crate::render::{self, RenderContext};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Per-case line item for CLI reporting.
#[derive(Debug)]
pub struct CaseSummary {
    pub case_no: u32,
    pub title: String,
    pub reference_count: usize,
}

impl CaseSummary {
    fn of(case: &Case) -> Self {
        Self {
            case_no: case.case_no,
            title: case.title.clone(),
            reference_count: case.reference_images.len(),
        }
    }
}

/// What a successful build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub cases: Vec<CaseSummary>,
    pub images_dir: String,
    pub copied_assets: u64,
}

/// What `check` found. Lints and missing assets are advisory.
#[derive(Debug)]
pub struct CheckReport {
    pub cases: Vec<CaseSummary>,
    pub images_dir: String,
    pub lints: Vec<Lint>,
    pub missing: Vec<MissingAsset>,
}

/// Build the site from `source` into `output`.
pub fn generate(source: &Path, output: &Path) -> Result<BuildReport, GenerateError> {
    let config = config::load_config(source)?;
    fs::create_dir_all(output)?;

    let manifest_path = source.join(&config.manifest);
    let manifest = match manifest::load(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            write_error_page(&config, output)?;
            return Err(err.into());
        }
    };

    let cases = manifest::sorted_cases(&manifest);
    let dims = assets::probe_dimensions(&cases, source, &config.images_dir);
    let intro = read_intro(source)?;

    let ctx = RenderContext {
        config: &config,
        assets: &dims,
    };
    let html = render::render_index(Ok(&cases), intro.as_deref(), &ctx);
    fs::write(output.join("index.html"), html.into_string())?;

    let copied = assets::copy_images(
        &source.join(&config.images_dir),
        &output.join(&config.images_dir),
    )?;

    Ok(BuildReport {
        cases: cases.iter().map(|c| CaseSummary::of(c)).collect(),
        images_dir: config.images_dir,
        copied_assets: copied,
    })
}

/// Validate `source` without writing anything.
///
/// Fails only when the config or the manifest itself cannot be loaded;
/// everything else is reported in the [`CheckReport`].
pub fn check(source: &Path) -> Result<CheckReport, GenerateError> {
    let config = config::load_config(source)?;
    let manifest = manifest::load(&source.join(&config.manifest))?;

    let lints = manifest::lint(&manifest);
    let cases = manifest::sorted_cases(&manifest);
    let missing = assets::verify_assets(&cases, source, &config.images_dir);

    Ok(CheckReport {
        cases: cases.iter().map(|c| CaseSummary::of(c)).collect(),
        images_dir: config.images_dir,
        lints,
        missing,
    })
}

/// Write the load-failure page: full chrome, error message in the gallery
/// region, zero cards.
fn write_error_page(config: &SiteConfig, output: &Path) -> Result<(), GenerateError> {
    let ctx = RenderContext {
        config,
        assets: &AssetIndex::empty(),
    };
    let html = render::render_index(Err(()), None, &ctx);
    fs::write(output.join("index.html"), html.into_string())?;
    Ok(())
}

/// Optional markdown intro shown above the gallery.
fn read_intro(source: &Path) -> Result<Option<String>, GenerateError> {
    let path = source.join("intro.md");
    if path.exists() {
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

// ============================================================================
// Tests
// ============================================================================
