use super::*;
use serde_json::json;

fn hook() -> serde_json::Value {
    json!({ "type": "hook", "headlineTop": "Ship", "headlineHighlight": "faster" })
}

#[test]
fn format_key_selects_presentation() {
    let deck = DeckConfig::from_value(json!({
        "id": "q3-review",
        "format": "presentation",
        "brandName": "Acme",
        "website": "acme.dev",
        "slides": [hook(), hook()]
    }))
    .unwrap();
    assert_eq!(deck.format(), Format::Presentation);
    assert_eq!(deck.id(), "q3-review");
    assert_eq!(deck.slides().len(), 2);
}

#[test]
fn missing_format_key_is_a_carousel() {
    let deck = DeckConfig::from_json_str(
        r#"{"id":"tips","brandName":"Acme","website":"@acme","slides":[]}"#,
    )
    .unwrap();
    let DeckConfig::Carousel(c) = deck else {
        panic!("expected carousel");
    };
    assert!(!c.show_slide_numbers);
    assert_eq!(c.initials(), "AS");
    assert_eq!(c.resolved_theme().key, crate::theme::palette::ThemeKey::Dark);
}

#[test]
fn presentation_required_fields_default_for_validation() {
    let deck = DeckConfig::from_value(json!({
        "id": "p",
        "format": "deck",
        "slides": []
    }))
    .unwrap();
    let DeckConfig::Presentation(p) = deck else {
        panic!("expected presentation");
    };
    assert_eq!(p.format, "deck");
    assert!(p.brand_name.is_empty());
    assert!(p.show_page_numbers());
}

#[test]
fn blank_initials_fall_back() {
    let mut c: CarouselConfig = serde_json::from_value(json!({
        "id": "c", "brandName": "B", "website": "w", "profileInitials": "  ", "slides": []
    }))
    .unwrap();
    assert_eq!(c.initials(), DEFAULT_PROFILE_INITIALS);
    c.profile_initials = Some("JD".to_string());
    assert_eq!(c.initials(), "JD");
}

#[test]
fn non_object_documents_are_rejected() {
    let err = DeckConfig::from_json_str("[1,2]").unwrap_err();
    assert!(matches!(err, SlideError::Serde(_)));
    assert!(DeckConfig::from_json_str("{not json").is_err());
}

#[test]
fn from_path_reports_missing_files() {
    let err = DeckConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("read deck config"), "{err}");
}
