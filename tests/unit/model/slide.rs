use super::*;
use serde_json::json;

fn slide(v: serde_json::Value) -> Slide {
    serde_json::from_value(v).unwrap()
}

#[test]
fn kind_tags_roundtrip() {
    for k in SlideKind::ALL {
        assert_eq!(SlideKind::parse(k.as_str()), Some(k));
        assert_eq!(serde_json::to_value(k).unwrap(), json!(k.as_str()));
    }
    assert_eq!(SlideKind::parse("Hook"), None);
    assert_eq!(SlideKind::parse("carousel"), None);
}

#[test]
fn format_restrictions() {
    assert!(SlideKind::Image.supports(Format::Carousel));
    assert!(!SlideKind::Image.supports(Format::Presentation));
    for k in [
        SlideKind::Agenda,
        SlideKind::KeyTakeaway,
        SlideKind::Team,
        SlideKind::ThankYou,
    ] {
        assert!(!k.supports(Format::Carousel), "{k:?}");
        assert!(k.supports(Format::Presentation), "{k:?}");
    }
    assert!(SlideKind::StaticImage.supports(Format::Carousel));
    assert!(SlideKind::StaticImage.supports(Format::Presentation));
}

#[test]
fn comparison_payload_parses() {
    let s = slide(json!({
        "type": "comparison",
        "leftLabel": "Before",
        "leftContent": "Manual",
        "rightLabel": "After",
        "rightContent": "Automated"
    }));
    let SlideContent::Comparison(c) = &s.content else {
        panic!("expected comparison, got {:?}", s.content);
    };
    assert_eq!(c.left_label, "Before");
    assert_eq!(c.right_content, "Automated");
    assert_eq!(s.kind(), Some(SlideKind::Comparison));
}

#[test]
fn layout_metadata_is_split_from_content() {
    let s = slide(json!({
        "type": "stat",
        "stat": "10x",
        "label": "Faster",
        "diagonalPattern": "bogus-value",
        "imagePath": "media/chart.png",
        "imagePosition": "right",
        "speakerNotes": "Pause here",
        "decorations": "dynamic",
        "useMinimalLayout": true
    }));
    assert_eq!(s.diagonal_pattern.as_deref(), Some("bogus-value"));
    assert_eq!(s.image_path.as_deref(), Some("media/chart.png"));
    assert_eq!(s.image_position.as_deref(), Some("right"));
    assert_eq!(s.speaker_notes.as_deref(), Some("Pause here"));
    assert_eq!(s.decorations.as_deref(), Some("dynamic"));
    assert_eq!(s.use_minimal_layout, Some(true));
    assert!(matches!(s.content, SlideContent::Stat(_)));
}

#[test]
fn image_owning_variants_keep_their_image_path() {
    let s = slide(json!({
        "type": "twoColumn",
        "imagePath": "media/team.jpg",
        "imagePosition": "right",
        "title": "Our team",
        "content": "Small and focused"
    }));
    assert_eq!(s.image_path, None);
    let SlideContent::TwoColumn(tc) = &s.content else {
        panic!("expected twoColumn");
    };
    assert_eq!(tc.image_path, "media/team.jpg");
    assert_eq!(tc.image_position, ColumnSide::Right);
    assert_eq!(tc.image_aspect_ratio, AspectRatio::Portrait);
}

#[test]
fn unknown_and_missing_types_do_not_fail() {
    let s = slide(json!({ "type": "chart", "data": [1, 2, 3] }));
    assert_eq!(s.kind(), None);
    assert_eq!(s.content.type_name(), "chart");

    let s = slide(json!({ "title": "no tag" }));
    assert_eq!(
        s.content,
        SlideContent::Unknown(UnknownSlide {
            type_name: String::new()
        })
    );
}

#[test]
fn malformed_layout_settings_do_not_fail() {
    let s = slide(json!({
        "type": "tip",
        "title": "t",
        "decorations": "sparkle",
        "imagePosition": "center",
        "diagonalPattern": 7,
        "useMinimalLayout": "yes"
    }));
    assert_eq!(s.decorations.as_deref(), Some("sparkle"));
    assert_eq!(s.image_position.as_deref(), Some("center"));
    assert_eq!(s.diagonal_pattern.as_deref(), Some("7"));
    assert_eq!(s.use_minimal_layout, None);
    assert!(matches!(s.content, SlideContent::Tip(_)));
}

#[test]
fn known_type_with_bad_payload_is_an_error() {
    let err = serde_json::from_value::<Slide>(json!({ "type": "quote", "author": "x" }))
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid 'quote' slide"), "{err}");
}

#[test]
fn serialize_merges_content_and_metadata() {
    let s = Slide::new(SlideContent::Cta(CtaSlide {
        headline: "Follow".to_string(),
        subheadline: None,
        action: "Subscribe".to_string(),
    }))
    .with_pattern("right")
    .with_notes("wrap up");
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "cta");
    assert_eq!(v["action"], "Subscribe");
    assert_eq!(v["diagonalPattern"], "right");
    assert_eq!(v["speakerNotes"], "wrap up");
    assert!(v.get("subheadline").is_none());
    assert_eq!(serde_json::from_value::<Slide>(v).unwrap(), s);
}

#[test]
fn format_canvas_dimensions() {
    assert_eq!(Format::Carousel.canvas(), Canvas::SQUARE);
    assert_eq!(Format::Presentation.canvas().width, 1920);
    assert_eq!(Format::Presentation.as_str(), "presentation");
}
