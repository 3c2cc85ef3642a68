//! Case asset handling: dimension probing, existence checks, output copying.
//!
//! Assets live under `{source}/{images_dir}/{case_no}/` and are treated as an
//! external read-only data source. Nothing here is fatal: a missing or
//! unreadable image renders as a browser-default broken image on the page,
//! so probing and verification only ever degrade or report.

use crate::manifest::{Case, asset_path};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Intrinsic pixel dimensions of case assets, keyed by public path
/// (`images/{case_no}/{filename}`).
///
/// Populated best-effort at build time so rendered `img` tags can carry
/// `width`/`height` attributes. Assets that are missing or not decodable
/// simply have no entry.
#[derive(Debug, Default)]
pub struct AssetIndex {
    dims: BTreeMap<String, (u32, u32)>,
}

impl AssetIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dimensions(&self, public_path: &str) -> Option<(u32, u32)> {
        self.dims.get(public_path).copied()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: &[(&str, (u32, u32))]) -> Self {
        Self {
            dims: entries.iter().map(|(p, d)| (p.to_string(), *d)).collect(),
        }
    }
}

/// Every asset a case references, as (public path, filesystem path) pairs.
fn case_assets(case: &Case, source: &Path, images_dir: &str) -> Vec<(String, PathBuf)> {
    let case_dir = source.join(images_dir).join(case.case_no.to_string());
    let mut assets = vec![(
        asset_path(images_dir, case.case_no, &case.image),
        case_dir.join(&case.image),
    )];
    for filename in &case.reference_images {
        assets.push((
            asset_path(images_dir, case.case_no, filename),
            case_dir.join(filename),
        ));
    }
    assets
}

/// Probe pixel dimensions of every referenced asset.
///
/// Header-only reads via `image::image_dimensions` — no pixel decoding.
/// Probing runs across cases in parallel; failures are silently skipped.
pub fn probe_dimensions(cases: &[&Case], source: &Path, images_dir: &str) -> AssetIndex {
    let dims = cases
        .par_iter()
        .flat_map_iter(|case| case_assets(case, source, images_dir))
        .filter_map(|(public, path)| {
            image::image_dimensions(&path).ok().map(|d| (public, d))
        })
        .collect();
    AssetIndex { dims }
}

/// A referenced asset with no file behind it.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingAsset {
    pub case_no: u32,
    /// Public path, `images/{case_no}/{filename}`.
    pub path: String,
}

impl fmt::Display for MissingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {}: missing {}", self.case_no, self.path)
    }
}

/// Report referenced assets that do not exist on disk. Used by `check`.
pub fn verify_assets(cases: &[&Case], source: &Path, images_dir: &str) -> Vec<MissingAsset> {
    let mut missing = Vec::new();
    for case in cases {
        for (public, path) in case_assets(case, source, images_dir) {
            if !path.is_file() {
                missing.push(MissingAsset {
                    case_no: case.case_no,
                    path: public,
                });
            }
        }
    }
    missing
}

/// Copy the images tree into the output directory. Returns the number of
/// files copied. A missing source tree copies nothing — the manifest may
/// legitimately reference assets that are deployed separately.
pub fn copy_images(source_images: &Path, dest: &Path) -> io::Result<u64> {
    if !source_images.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(source_images) {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(source_images)
            .expect("walkdir yields children of its root");
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
