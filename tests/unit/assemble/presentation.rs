use super::*;
use crate::{layout::LayoutWarning, model::options::DiagonalPattern};
use serde_json::json;

fn deck_json(n: usize) -> serde_json::Value {
    let slides: Vec<_> = (0..n)
        .map(|i| json!({ "type": "stat", "stat": format!("{i}"), "label": "l" }))
        .collect();
    json!({
        "id": "q3-review",
        "format": "presentation",
        "brandName": "Acme",
        "website": "acme.dev",
        "slides": slides
    })
}

fn deck(n: usize) -> PresentationConfig {
    serde_json::from_value(deck_json(n)).unwrap()
}

fn err_text(v: serde_json::Value) -> String {
    let cfg: PresentationConfig = serde_json::from_value(v).unwrap();
    cfg.validate().unwrap_err().to_string()
}

#[test]
fn slide_count_bounds() {
    for (n, ok) in [(1, false), (2, true), (50, true), (51, false)] {
        assert_eq!(deck(n).validate().is_ok(), ok, "n={n}");
    }
    assert!(
        deck(51)
            .validate()
            .unwrap_err()
            .to_string()
            .contains("presentation must have 2-50 slides (found 51)")
    );
}

#[test]
fn format_tag_must_be_presentation() {
    let mut v = deck_json(3);
    v["format"] = json!("deck");
    assert_eq!(
        err_text(v),
        "validation error: config format must be \"presentation\" (found \"deck\")"
    );
}

#[test]
fn identity_fields_are_required() {
    let mut v = deck_json(3);
    v.as_object_mut().unwrap().remove("brandName");
    assert!(err_text(v).contains("brandName must be non-empty"));

    let mut v = deck_json(3);
    v["website"] = json!("  ");
    assert!(err_text(v).contains("website must be non-empty"));
}

#[test]
fn thirteen_slides_cycle_patterns() {
    let d = deck(13);
    let got: Vec<_> = (0..13)
        .map(|i| d.compose_slide(i).unwrap().pattern.unwrap())
        .collect();
    let expected: Vec<_> = (0..13).map(DiagonalPattern::for_slide_index).collect();
    assert_eq!(got, expected);
    assert_eq!(got[5], DiagonalPattern::Left);
    assert_eq!(got[12], DiagonalPattern::InclineRight);
}

#[test]
fn explicit_and_bogus_patterns() {
    let mut v = deck_json(3);
    v["slides"][0]["diagonalPattern"] = json!("bogus-value");
    v["slides"][1]["diagonalPattern"] = json!("incline-left");
    let d: PresentationConfig = serde_json::from_value(v).unwrap();
    let first = d.compose_slide(0).unwrap();
    assert_eq!(first.pattern, Some(DiagonalPattern::Left));
    assert!(matches!(
        first.warnings.as_slice(),
        [LayoutWarning::UnknownPattern { value, .. }] if value == "bogus-value"
    ));
    assert_eq!(
        d.compose_slide(1).unwrap().pattern,
        Some(DiagonalPattern::InclineLeft)
    );
    // third slide is unset and keeps its cycle position
    assert_eq!(
        d.compose_slide(2).unwrap().pattern,
        Some(DiagonalPattern::InclineRight)
    );
}

#[test]
fn composed_slides_carry_numbers_and_notes() {
    let mut v = deck_json(2);
    v["slides"][1]["speakerNotes"] = json!("close strong");
    let d: PresentationConfig = serde_json::from_value(v).unwrap();
    let s = d.compose_slide(1).unwrap();
    assert_eq!(s.id, "q3-review-slide-2");
    assert_eq!((s.slide_number, s.total_slides), (2, 2));
    assert_eq!(s.speaker_notes.as_deref(), Some("close strong"));
    assert_eq!(s.canvas.width, 1920);
    assert!(d.show_page_numbers());
}

#[test]
fn bad_layout_settings_degrade_one_slide() {
    let mut v = deck_json(3);
    v["slides"][0]["decorations"] = json!("sparkle");
    v["slides"][1]["imagePosition"] = json!(42);
    v["slides"][2]["useMinimalLayout"] = json!("yes");
    let d: PresentationConfig = serde_json::from_value(v).unwrap();
    assert!(d.validate().is_ok());
    assert!(matches!(
        d.compose_slide(0).unwrap().warnings.as_slice(),
        [LayoutWarning::UnknownDecorations { value, .. }] if value == "sparkle"
    ));
    assert!(matches!(
        d.compose_slide(1).unwrap().warnings.as_slice(),
        [LayoutWarning::UnknownImagePosition { value }] if value == "42"
    ));
    assert!(d.compose_slide(2).unwrap().warnings.is_empty());
}
