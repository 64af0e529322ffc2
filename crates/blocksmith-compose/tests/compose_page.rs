//! End-to-end composition of a realistic analyzer layout.

use blocksmith_compose::{Composer, UploadedImages};
use blocksmith_core::{Layout, SequentialIds};

const LANDING: &str = include_str!("fixtures/landing.json");

fn compose_landing() -> String {
    let layout = Layout::from_json(LANDING).unwrap();
    Composer::new()
        .with_ids(SequentialIds::default())
        .compose(&layout)
        .unwrap()
}

#[test]
fn landing_page_composes_in_document_order() {
    let markup = compose_landing();

    let cover = markup.find("<!-- wp:cover ").unwrap();
    let columns = markup.find("<!-- wp:columns ").unwrap();
    let media = markup.find("<!-- wp:media-text ").unwrap();
    let separator = markup.find("<!-- wp:separator ").unwrap();
    let quote = markup.find("<!-- wp:quote ").unwrap();
    let spacer = markup.find("<!-- wp:spacer ").unwrap();
    assert!(cover < columns && columns < media && media < separator);
    assert!(separator < quote && quote < spacer);
}

#[test]
fn landing_page_markers_balance() {
    let markup = compose_landing();
    assert_eq!(
        markup.matches("<!-- wp:").count(),
        markup.matches("<!-- /wp:").count()
    );
    assert!(!markup.ends_with('\n'));
}

#[test]
fn three_columns_get_rounded_shares() {
    let markup = compose_landing();
    assert_eq!(markup.matches("\"width\":\"33%\"").count(), 2);
    assert_eq!(markup.matches("\"width\":\"34%\"").count(), 1);
}

#[test]
fn hero_styling_flows_through() {
    let markup = compose_landing();
    // Literal white goes inline, not to a preset attribute.
    assert!(markup.contains("\"color\":{\"text\":\"#ffffff\"}"));
    assert!(markup.contains("has-background-dim-60"));
    assert!(markup.contains("is-style-outline"));
    assert!(markup.contains("Layouts &amp; markup, side by side."));
}

#[test]
fn uploaded_image_urls_are_substituted() {
    let layout = Layout::from_json(LANDING).unwrap();
    let mut uploads = UploadedImages::default();
    uploads.insert("hero.jpg", "https://site.example/uploads/hero.jpg");
    uploads.insert("workbench.jpg", "https://site.example/uploads/workbench.jpg");

    let markup = Composer::new()
        .with_ids(SequentialIds::default())
        .with_images(uploads)
        .compose(&layout)
        .unwrap();

    assert!(markup.contains("\"url\":\"https://site.example/uploads/hero.jpg\""));
    assert!(markup.contains("\"mediaUrl\":\"https://site.example/uploads/workbench.jpg\""));
    assert!(!markup.contains("\"url\":\"hero.jpg\""));
}
