//! Manifest loading and validation.
//!
//! Stage 1 of the promptcase build: read `data.json`, parse it into case
//! records, and put them in display order. The manifest is the single data
//! source for the whole site — there is no filesystem scanning, no database,
//! no front-matter.
//!
//! ## Manifest Shape
//!
//! ```json
//! {
//!   "cases": [
//!     {
//!       "case_no": 1,
//!       "title": "Neon City",
//!       "prompt": "A rain-soaked alley lit by holographic signage",
//!       "attribution": {
//!         "prompt_author": "ada",
//!         "prompt_author_link": "https://example.com/ada"
//!       },
//!       "source_links": [{ "url": "https://example.com/post/1" }],
//!       "reference_images": ["ref-a.png", "ref-b.png"],
//!       "image": "result.png",
//!       "alt_text": "Neon-lit alley at night"
//!     }
//!   ]
//! }
//! ```
//!
//! `attribution`, `source_links`, and `reference_images` are optional;
//! absence renders as absence, never as an error.
//!
//! ## Ordering
//!
//! Cases display in ascending `case_no` order regardless of manifest order.
//! The sort is stable, so records sharing a `case_no` keep their relative
//! manifest position.
//!
//! ## Validation Philosophy
//!
//! Loading is strict only about shape (readable file, valid JSON of the
//! expected structure). Everything else — duplicate numbers, a zero
//! `case_no`, empty asset names — is reported by [`lint`] as an advisory
//! diagnostic for the `check` command. The gallery renders whatever it is
//! given; broken records degrade on the page, they do not abort a build.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full case manifest, as deserialized from `data.json`.
#[derive(Debug, Deserialize)]
pub struct CaseManifest {
    pub cases: Vec<Case>,
}

/// One gallery entry: a prompt, its attribution, optional reference images,
/// and one resulting image.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    /// Positive, unique per record. Sort key, DOM id (`case-{case_no}`),
    /// and image directory name.
    pub case_no: u32,
    pub title: String,
    /// Shown verbatim and copyable from the rendered card.
    pub prompt: String,
    #[serde(default)]
    pub attribution: Attribution,
    #[serde(default)]
    pub source_links: Vec<SourceLink>,
    /// Filenames under `images/{case_no}/`; may be empty.
    #[serde(default)]
    pub reference_images: Vec<String>,
    /// Primary result image filename under `images/{case_no}/`.
    pub image: String,
    /// Accessible description of the primary image; doubles as its
    /// lightbox caption.
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribution {
    pub prompt_author: Option<String>,
    pub prompt_author_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceLink {
    pub url: String,
}

impl Case {
    /// Public path of the primary result image.
    pub fn image_path(&self, images_dir: &str) -> String {
        asset_path(images_dir, self.case_no, &self.image)
    }

    /// Public path of one reference image.
    pub fn reference_path(&self, images_dir: &str, filename: &str) -> String {
        asset_path(images_dir, self.case_no, filename)
    }
}

/// Compose the public path of a case asset: `{images_dir}/{case_no}/{file}`.
pub fn asset_path(images_dir: &str, case_no: u32, filename: &str) -> String {
    format!("{images_dir}/{case_no}/{filename}")
}

/// Read and parse the manifest file. One read, no retry.
pub fn load(path: &Path) -> Result<CaseManifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    let manifest: CaseManifest = serde_json::from_str(&content)?;
    Ok(manifest)
}

/// Cases in display order: ascending `case_no`, stable for ties.
pub fn sorted_cases(manifest: &CaseManifest) -> Vec<&Case> {
    let mut cases: Vec<&Case> = manifest.cases.iter().collect();
    cases.sort_by_key(|c| c.case_no);
    cases
}

// ============================================================================
// Lints
// ============================================================================

/// An advisory finding from [`lint`]. Never fatal.
#[derive(Debug, PartialEq, Eq)]
pub enum Lint {
    /// Two or more records share this `case_no`; ids and image paths collide.
    DuplicateCaseNo(u32),
    /// `case_no` must be a positive integer.
    ZeroCaseNo { title: String },
    /// The record has no primary image filename.
    EmptyImage { case_no: u32 },
    /// The primary image has no accessible description.
    EmptyAltText { case_no: u32 },
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lint::DuplicateCaseNo(n) => write!(f, "duplicate case_no {n}"),
            Lint::ZeroCaseNo { title } => write!(f, "case \"{title}\" has case_no 0"),
            Lint::EmptyImage { case_no } => write!(f, "case {case_no} has an empty image filename"),
            Lint::EmptyAltText { case_no } => write!(f, "case {case_no} has empty alt_text"),
        }
    }
}

/// Check the manifest for conditions that degrade the rendered gallery.
pub fn lint(manifest: &CaseManifest) -> Vec<Lint> {
    let mut lints = Vec::new();

    let mut seen: BTreeMap<u32, usize> = BTreeMap::new();
    for case in &manifest.cases {
        *seen.entry(case.case_no).or_insert(0) += 1;
    }
    for (case_no, count) in seen {
        if count > 1 {
            lints.push(Lint::DuplicateCaseNo(case_no));
        }
    }

    for case in &manifest.cases {
        if case.case_no == 0 {
            lints.push(Lint::ZeroCaseNo {
                title: case.title.clone(),
            });
        }
        if case.image.is_empty() {
            lints.push(Lint::EmptyImage {
                case_no: case.case_no,
            });
        }
        if case.alt_text.is_empty() {
            lints.push(Lint::EmptyAltText {
                case_no: case.case_no,
            });
        }
    }

    lints
}

// ============================================================================
// Tests
// ============================================================================
