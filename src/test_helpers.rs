//! Shared test utilities for the promptcase test suite.
//!
//! Provides case-record builders, an on-disk site fixture, and tiny real
//! PNG assets for tests that touch the filesystem.

use std::fs;
use std::path::Path;

use crate::assets::AssetIndex;
use crate::config::SiteConfig;
use crate::manifest::{Case, CaseManifest};

// =========================================================================
// Record builders
// =========================================================================

/// A minimal valid case: no attribution, no sources, no references.
/// Tests set the fields they care about directly.
pub fn case(case_no: u32, title: &str) -> Case {
    Case {
        case_no,
        title: title.to_string(),
        prompt: format!("prompt for {title}"),
        attribution: Default::default(),
        source_links: vec![],
        reference_images: vec![],
        image: "result.png".to_string(),
        alt_text: format!("{title} result"),
    }
}

/// An in-memory manifest from pre-built cases, keeping their order.
pub fn manifest_with(cases: &[Case]) -> CaseManifest {
    CaseManifest {
        cases: cases.to_vec(),
    }
}

/// Default config plus an empty asset index, for constructing a
/// `RenderContext` in rendering tests.
pub fn render_context_parts() -> (SiteConfig, AssetIndex) {
    (SiteConfig::default(), AssetIndex::empty())
}

// =========================================================================
// Filesystem fixtures
// =========================================================================

/// Write a real PNG of the given size. Dimension-probing tests rely on
/// these being decodable.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([90, 120, 200, 255]));
    img.save(path).unwrap();
}

/// Write a complete site source tree into `dir`:
///
/// - `data.json` with three cases, deliberately out of order (5, 1, 2)
/// - case 1 with one reference image, the others with none
/// - 8x6 result PNGs and a 3x3 reference PNG under `images/{case_no}/`
pub fn write_site_fixture(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("data.json"),
        r#"{
            "cases": [
                {
                    "case_no": 5,
                    "title": "Paper Crane",
                    "prompt": "an origami crane on a desk",
                    "image": "result.png",
                    "alt_text": "origami crane"
                },
                {
                    "case_no": 1,
                    "title": "Neon City",
                    "prompt": "a rain-soaked alley lit by holographic signage",
                    "attribution": {
                        "prompt_author": "ada",
                        "prompt_author_link": "https://example.com/ada"
                    },
                    "source_links": [{"url": "https://example.com/post/1"}],
                    "reference_images": ["ref-a.png"],
                    "image": "result.png",
                    "alt_text": "neon alley"
                },
                {
                    "case_no": 2,
                    "title": "Tide Pool",
                    "prompt": "macro shot of a tide pool at dawn",
                    "image": "result.png",
                    "alt_text": "tide pool"
                }
            ]
        }"#,
    )
    .unwrap();

    for case_no in [1u32, 2, 5] {
        let case_dir = dir.join("images").join(case_no.to_string());
        fs::create_dir_all(&case_dir).unwrap();
        write_png(&case_dir.join("result.png"), 8, 6);
    }
    write_png(&dir.join("images/1/ref-a.png"), 3, 3);
}
