//! # promptcase
//!
//! A minimal static site generator for prompt/result case galleries.
//! A JSON manifest is the data source: each "case" pairs a text prompt and
//! its attribution with optional reference images and one resulting image,
//! and the build renders them all into a single gallery page with a
//! full-screen lightbox viewer.
//!
//! # Architecture: Load, Render, Write
//!
//! ```text
//! 1. Load      data.json  →  ordered case records     (manifest)
//! 2. Render    records    →  index.html markup        (render)
//! 3. Write     markup     →  dist/ + copied images    (generate, assets)
//! ```
//!
//! The load step is strict about shape only; ordering is ascending
//! `case_no` (stable for ties) regardless of manifest order. Rendering is a
//! pure function over the load outcome, with three gallery states: one card
//! per case, an explicit empty-state message, or a generic load-failure
//! message (the diagnostic goes to stderr). Writing copies the image tree
//! verbatim — assets are external, read-only data.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | `data.json` parsing, display ordering, advisory lints |
//! | [`render`] | Maud templates: case cards, gallery states, lightbox overlay |
//! | [`generate`] | Build and check pipelines, output writing |
//! | [`assets`] | Dimension probing, existence checks, image tree copying |
//! | [`config`] | `config.toml` loading, validation, and theme CSS generation |
//! | [`output`] | CLI output formatting — per-case display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Build-Time Rendering, Inline Delivery
//!
//! The gallery is fully rendered at build time; the published page is one
//! HTML file with its stylesheet and its behavior script inlined, plus the
//! image tree. No fetch at page load, no template directory, no runtime
//! dependencies — the output can be dropped on any file server.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Interactivity as a Static Asset
//!
//! The lightbox state machine (open/close via button, background click, or
//! Escape) and the prompt copy action live in `static/lightbox.js`, a small
//! vanilla-JS asset embedded into the page. Cards expose a declarative
//! contract — anchors with `data-caption` — and never reach into overlay
//! internals, so the renderer stays testable without a browser. A browser
//! suite (`tests/browser_lightbox.rs`, ignored by default) exercises the
//! real interaction paths in headless Chrome.
//!
//! ## Tolerant Assets, Strict Manifest Shape
//!
//! Broken or missing image files never fail a build; they degrade to the
//! browser's broken-image presentation, and `promptcase check` reports
//! them. Only an unreadable or malformed manifest aborts — and even then
//! the build ships a page with an explicit error state rather than leaving
//! stale output in place.

pub mod assets;
pub mod config;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
