//! HTML rendering for the gallery page.
//!
//! Everything here is a pure function from case records to markup. The page
//! structure mirrors the gallery it serves:
//!
//! - **Gallery region** (`#gallery`): one `article.case-card` per case, or a
//!   single message node for the empty and load-failure states.
//! - **Case card**: three columns — info (header, prompt with copy action,
//!   attribution metadata), references (thumbnails or a placeholder), and
//!   the primary result image.
//! - **Lightbox overlay** (`#lightbox`): exactly one per page, hidden until
//!   the embedded script shows it.
//!
//! ## Interactivity
//!
//! Cards are rendered statically; the behavioral layer is a small vanilla-JS
//! asset embedded at the end of the page (`static/lightbox.js`). Every
//! enlargeable image is an `a.zoomable` anchor pointing at the full asset,
//! so without JavaScript a click still navigates to the image. The script
//! intercepts those clicks (`preventDefault`) and opens the overlay with the
//! anchor's `href` and `data-caption` instead. Card markup never touches
//! overlay internals; the anchor contract is the whole interface.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; the only
//! `PreEscaped` content is the embedded stylesheet, the embedded script, and
//! HTML produced by the markdown converter.

use crate::assets::AssetIndex;
use crate::config::{self, SiteConfig};
use crate::manifest::Case;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/lightbox.js");

/// Message shown when the manifest parses but contains zero cases.
pub const EMPTY_MESSAGE: &str = "No cases found.";
/// Message shown in the gallery region when the manifest could not be loaded.
pub const ERROR_MESSAGE: &str = "Error loading cases. Please try again later.";

/// Shared inputs for the render functions.
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub assets: &'a AssetIndex,
}

/// Renders the full gallery document.
///
/// `outcome` is the manifest load result: cases in display order, or the
/// load-failure marker. `intro` is optional markdown shown between the site
/// header and the gallery.
pub fn render_index(
    outcome: Result<&[&Case], ()>,
    intro: Option<&str>,
    ctx: &RenderContext,
) -> Markup {
    let css = format!("{}\n\n{}", config::generate_theme_css(ctx.config), CSS_STATIC);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (ctx.config.title) }
                style { (PreEscaped(css)) }
            }
            body {
                header.site-header {
                    h1 { (ctx.config.title) }
                }
                @if let Some(markdown) = intro {
                    (render_intro(markdown))
                }
                main {
                    (render_gallery(outcome, ctx))
                }
                (render_lightbox())
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// The single rendering decision for the gallery region.
///
/// Three states, all of which fully define the region's children:
/// populated (one card per case, given order), empty, and load failure.
pub fn render_gallery(outcome: Result<&[&Case], ()>, ctx: &RenderContext) -> Markup {
    html! {
        div #gallery {
            @match outcome {
                Err(()) => {
                    div.gallery-message { (ERROR_MESSAGE) }
                }
                Ok([]) => {
                    div.gallery-message { (EMPTY_MESSAGE) }
                }
                Ok(cases) => {
                    @for case in cases {
                        (render_card(case, ctx))
                    }
                }
            }
        }
    }
}

/// Renders one case card: info column, references column, visual column.
pub fn render_card(case: &Case, ctx: &RenderContext) -> Markup {
    let images_dir = &ctx.config.images_dir;

    html! {
        article.case-card id={ "case-" (case.case_no) } {
            div.case-info {
                div.case-header {
                    span.case-id { "#" (case.case_no) }
                    h2.case-title { (case.title) }
                }
                div.case-prompt-container {
                    div.case-label { "Prompt" }
                    button.copy-btn type="button" { "Copy" }
                    div.case-prompt { (case.prompt) }
                }
                (render_meta(case))
            }
            div.case-refs {
                @if case.reference_images.is_empty() {
                    div.no-ref { "No Reference Images" }
                } @else {
                    div.case-label.refs-label { "References" }
                    @for filename in &case.reference_images {
                        div.ref-item {
                            (zoomable_image(
                                &case.reference_path(images_dir, filename),
                                "Reference",
                                &ctx.config.lightbox.reference_caption,
                                ctx.assets,
                            ))
                        }
                    }
                }
            }
            div.case-visual {
                (zoomable_image(
                    &case.image_path(images_dir),
                    &case.alt_text,
                    &case.alt_text,
                    ctx.assets,
                ))
            }
        }
    }
}

/// Attribution metadata: linked prompt-author credit and first source link,
/// each rendered only when present.
fn render_meta(case: &Case) -> Markup {
    html! {
        div.case-meta {
            @if let Some(author) = &case.attribution.prompt_author {
                div.meta-item {
                    "Prompt: "
                    @if let Some(link) = &case.attribution.prompt_author_link {
                        a href=(link) target="_blank" rel="noopener" { (author) }
                    } @else {
                        span { (author) }
                    }
                }
            }
            @if let Some(source) = case.source_links.first() {
                div.meta-item {
                    a href=(source.url) target="_blank" rel="noopener" { "Source ↗" }
                }
            }
        }
    }
}

/// A lazily-loaded image wrapped in an anchor to the full asset.
///
/// The anchor carries the lightbox caption; the no-JS fallback is plain
/// navigation to the image file. `width`/`height` attributes appear only
/// when the asset's dimensions were probed successfully.
fn zoomable_image(path: &str, alt: &str, caption: &str, assets: &AssetIndex) -> Markup {
    let dims = assets.dimensions(path);
    html! {
        a.zoomable href=(path) data-caption=(caption) {
            img src=(path)
                alt=(alt)
                loading="lazy"
                width=[dims.map(|(w, _)| w)]
                height=[dims.map(|(_, h)| h)];
        }
    }
}

/// The lightbox overlay. One instance per page, hidden by the stylesheet
/// until the embedded script opens it.
pub fn render_lightbox() -> Markup {
    html! {
        div #lightbox {
            span.lightbox-close { "\u{00d7}" }
            img #lightbox-img alt="";
            div #lightbox-caption {}
        }
    }
}

/// Renders the optional `intro.md` content as an intro section.
fn render_intro(markdown: &str) -> Markup {
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.intro {
            (PreEscaped(body_html))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{case, render_context_parts};

    fn render_cases(cases: &[Case]) -> String {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let refs: Vec<&Case> = cases.iter().collect();
        render_gallery(Ok(&refs), &ctx).into_string()
    }

    fn render_one(case: &Case) -> String {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        render_card(case, &ctx).into_string()
    }

    #[test]
    fn gallery_renders_one_card_per_case_with_ids() {
        let html = render_cases(&[case(1, "a"), case(2, "b"), case(45, "c")]);
        assert_eq!(html.matches("case-card").count(), 3);
        assert!(html.contains(r#"id="case-1""#));
        assert!(html.contains(r#"id="case-2""#));
        assert!(html.contains(r#"id="case-45""#));
    }

    #[test]
    fn gallery_preserves_given_order() {
        let html = render_cases(&[case(3, "third"), case(1, "first")]);
        let third = html.find("case-3").unwrap();
        let first = html.find("case-1").unwrap();
        // Ordering is the caller's job; the gallery must not reorder.
        assert!(third < first);
    }

    #[test]
    fn empty_gallery_renders_single_message_and_no_cards() {
        let html = render_cases(&[]);
        assert_eq!(html.matches(EMPTY_MESSAGE).count(), 1);
        assert_eq!(html.matches("case-card").count(), 0);
    }

    #[test]
    fn failed_gallery_renders_single_error_node() {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let html = render_gallery(Err(()), &ctx).into_string();
        assert_eq!(html.matches(ERROR_MESSAGE).count(), 1);
        assert_eq!(html.matches("case-card").count(), 0);
    }

    #[test]
    fn card_header_shows_number_and_title() {
        let html = render_one(&case(12, "Neon City"));
        assert!(html.contains("#12"));
        assert!(html.contains("Neon City"));
        assert!(html.contains("case-title"));
    }

    #[test]
    fn card_prompt_block_has_label_copy_button_and_text() {
        let mut c = case(1, "p");
        c.prompt = "a very specific prompt".to_string();
        let html = render_one(&c);
        assert!(html.contains(">Prompt<"));
        assert!(html.contains("copy-btn"));
        assert!(html.contains(">Copy<"));
        assert!(html.contains("a very specific prompt"));
    }

    #[test]
    fn card_meta_renders_author_with_link() {
        let mut c = case(1, "m");
        c.attribution.prompt_author = Some("ada".to_string());
        c.attribution.prompt_author_link = Some("https://example.com/ada".to_string());
        let html = render_one(&c);
        assert!(html.contains(r#"href="https://example.com/ada""#));
        assert!(html.contains(">ada</a>"));
    }

    #[test]
    fn card_meta_renders_author_without_link_as_plain_text() {
        let mut c = case(1, "m");
        c.attribution.prompt_author = Some("ada".to_string());
        let html = render_one(&c);
        assert!(html.contains(">ada</span>"));
        assert!(!html.contains(">ada</a>"));
    }

    #[test]
    fn card_meta_renders_only_first_source_link() {
        let mut c = case(1, "m");
        c.source_links = vec![
            crate::manifest::SourceLink {
                url: "https://example.com/one".to_string(),
            },
            crate::manifest::SourceLink {
                url: "https://example.com/two".to_string(),
            },
        ];
        let html = render_one(&c);
        assert!(html.contains("https://example.com/one"));
        assert!(!html.contains("https://example.com/two"));
    }

    #[test]
    fn card_meta_omits_absent_fields() {
        let html = render_one(&case(1, "bare"));
        assert!(!html.contains("meta-item"));
    }

    #[test]
    fn references_render_one_thumbnail_per_filename() {
        let mut c = case(4, "refs");
        c.reference_images = vec!["a.png".to_string(), "b.webp".to_string()];
        let html = render_one(&c);
        assert_eq!(html.matches("ref-item").count(), 2);
        assert!(html.contains(r#"href="images/4/a.png""#));
        assert!(html.contains(r#"href="images/4/b.webp""#));
        assert!(html.contains(r#"data-caption="Reference Image""#));
        assert!(!html.contains("no-ref"));
    }

    #[test]
    fn empty_references_render_placeholder_only() {
        let html = render_one(&case(4, "bare"));
        assert!(html.contains("No Reference Images"));
        assert_eq!(html.matches("ref-item").count(), 0);
        assert!(!html.contains(">References<"));
    }

    #[test]
    fn visual_column_renders_primary_image_with_alt_caption() {
        let mut c = case(9, "vis");
        c.image = "final.png".to_string();
        c.alt_text = "the finished piece".to_string();
        let html = render_one(&c);
        assert!(html.contains(r#"href="images/9/final.png""#));
        assert!(html.contains(r#"alt="the finished piece""#));
        assert!(html.contains(r#"data-caption="the finished piece""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn probed_dimensions_appear_as_attributes() {
        let (config, _) = render_context_parts();
        let assets = AssetIndex::from_entries(&[("images/1/result.png", (640, 480))]);
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let html = render_card(&case(1, "dims"), &ctx).into_string();
        assert!(html.contains(r#"width="640""#));
        assert!(html.contains(r#"height="480""#));
    }

    #[test]
    fn unprobed_images_have_no_dimension_attributes() {
        let html = render_one(&case(1, "nodims"));
        assert!(!html.contains("width="));
        assert!(!html.contains("height="));
    }

    #[test]
    fn prompt_text_is_escaped() {
        let mut c = case(1, "xss");
        c.prompt = "<script>alert('pwn')</script>".to_string();
        let html = render_one(&c);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn lightbox_overlay_has_viewer_contract_ids() {
        let html = render_lightbox().into_string();
        assert!(html.contains(r#"id="lightbox""#));
        assert!(html.contains(r#"id="lightbox-img""#));
        assert!(html.contains(r#"id="lightbox-caption""#));
        assert!(html.contains("lightbox-close"));
    }

    #[test]
    fn index_document_is_complete() {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let cases = [case(1, "only")];
        let refs: Vec<&Case> = cases.iter().collect();
        let html = render_index(Ok(&refs), None, &ctx).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Case Gallery</title>"));
        assert!(html.contains(r#"id="gallery""#));
        assert!(html.contains(r#"id="lightbox""#));
        // Theme variables and the behavior script are embedded inline.
        assert!(html.contains("--color-bg:"));
        assert!(html.contains("lightbox-img"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn index_renders_intro_markdown() {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let html = render_index(Ok(&[]), Some("Some **bold** words."), &ctx).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("intro"));
    }

    #[test]
    fn error_document_still_carries_the_full_chrome() {
        let (config, assets) = render_context_parts();
        let ctx = RenderContext {
            config: &config,
            assets: &assets,
        };
        let html = render_index(Err(()), None, &ctx).into_string();
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains("<title>Case Gallery</title>"));
        assert_eq!(html.matches("case-card").count(), 0);
    }
}
