use super::*;
use crate::theme::palette::resolve_theme;
use serde_json::json;

fn slide(v: serde_json::Value) -> Slide {
    serde_json::from_value(v).unwrap()
}

fn chrome(slide_number: Option<usize>, total: Option<usize>) -> CardChrome<'static> {
    CardChrome {
        theme: resolve_theme(Some("cream")),
        brand_name: "Acme",
        tagline: Some("Automation studio"),
        website: "@acme",
        profile_initials: "AS",
        profile_image: None,
        slide_number,
        total_slides: total,
    }
}

fn frame() -> SlideFrame {
    SlideFrame::new("deck", 2, 8)
}

fn footer_texts(slide: &ComposedSlide) -> Vec<String> {
    let footer = slide.layers_of(LayerKind::Footer).next().unwrap();
    footer
        .element
        .as_ref()
        .unwrap()
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn tip() -> Slide {
    slide(json!({ "type": "tip", "title": "Batch your work" }))
}

#[test]
fn page_indicator_needs_both_values() {
    assert_eq!(page_indicator(Some(3), Some(8)).as_deref(), Some("3 / 8"));
    assert_eq!(page_indicator(Some(3), None), None);
    assert_eq!(page_indicator(None, Some(8)), None);
    assert_eq!(page_indicator(None, None), None);

    let shown = compose_card(&tip(), &chrome(Some(3), Some(8)), frame());
    assert_eq!(footer_texts(&shown), vec!["@acme", "3 / 8"]);
    let hidden = compose_card(&tip(), &chrome(Some(3), None), frame());
    assert_eq!(footer_texts(&hidden), vec!["@acme"]);
}

#[test]
fn full_shell_layer_order_and_geometry() {
    let out = compose_card(&tip(), &chrome(None, None), frame());
    let kinds: Vec<_> = out.layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LayerKind::Background,
            LayerKind::Decoration,
            LayerKind::Decoration,
            LayerKind::Header,
            LayerKind::Content,
            LayerKind::Footer,
        ]
    );
    for (i, l) in out.layers.iter().enumerate() {
        assert_eq!(l.z, i as i32);
    }
    assert!(!out.minimal);
    assert_eq!(out.id, "deck-slide-3");
    assert_eq!(out.canvas.width, 1080);

    let header = out.layers_of(LayerKind::Header).next().unwrap();
    assert_eq!(header.frame, Rect::new(80.0, 60.0, 1000.0, 130.0));
    assert_eq!(
        header.element.as_ref().unwrap().texts(),
        vec!["AS", "Acme", "Automation studio"]
    );
    let content = out.content().unwrap();
    assert_eq!(content.frame, Rect::new(80.0, 190.0, 1000.0, 904.0));
    let footer = out.layers_of(LayerKind::Footer).next().unwrap();
    assert_eq!(footer.frame, Rect::new(80.0, 964.0, 1000.0, 1020.0));
    assert!(matches!(
        out.layers[0].fill,
        Some(Paint::Grid { cell_px, .. }) if cell_px == 40.0
    ));
}

#[test]
fn minimal_shell_for_dense_variants() {
    let s = slide(json!({
        "type": "heavyList", "title": "T", "description": "d", "items": ["a"]
    }));
    assert!(uses_minimal_layout(&s));
    let out = compose_card(&s, &chrome(Some(1), Some(2)), frame());
    assert!(out.minimal);
    assert_eq!(out.layers_of(LayerKind::Header).count(), 0);
    let bg = &out.layers[0];
    assert_eq!(bg.kind, LayerKind::Background);
    assert!(matches!(
        bg.element.as_ref(),
        Some(Element::Image { source, .. }) if source == "bgs/bg_heavy_list.png"
    ));
    assert_eq!(footer_texts(&out), vec!["@acme", "1 / 2"]);
    assert_eq!(out.content().unwrap().frame.x0, 48.0);
}

#[test]
fn explicit_flag_overrides_type_rule() {
    let forced = slide(json!({ "type": "tip", "title": "x", "useMinimalLayout": true }));
    assert!(uses_minimal_layout(&forced));
    let out = compose_card(&forced, &chrome(None, None), frame());
    assert!(matches!(
        out.layers[0].element.as_ref(),
        Some(Element::Image { source, .. })
            if source == "bgs/bg_recommended_for_non_header_content.png"
    ));

    let opted_out = slide(json!({
        "type": "twoRow", "imagePath": "r.png", "title": "t", "content": "c",
        "useMinimalLayout": false
    }));
    assert!(!uses_minimal_layout(&opted_out));
}

#[test]
fn minimal_backgrounds_per_type() {
    assert_eq!(minimal_background(Some(SlideKind::TwoColumn)), "bgs/bg_two_column.png");
    assert_eq!(minimal_background(Some(SlideKind::TwoRow)), "bgs/bg_two_row.png");
    assert_eq!(
        minimal_background(None),
        "bgs/bg_recommended_for_non_header_content.png"
    );
}

#[test]
fn profile_image_replaces_initials_badge() {
    let mut c = chrome(None, None);
    c.profile_image = Some("people/me.png");
    let out = compose_card(&tip(), &c, frame());
    let header = out.layers_of(LayerKind::Header).next().unwrap();
    let el = header.element.as_ref().unwrap();
    assert!(matches!(
        &el.children()[0],
        Element::Image { source, .. } if source == "people/me.png"
    ));
    assert_eq!(el.texts(), vec!["Acme", "Automation studio"]);
}

#[test]
fn unknown_type_degrades_with_warning() {
    let out = compose_card(&slide(json!({ "type": "chart" })), &chrome(None, None), frame());
    assert!(out.has_placeholder());
    assert_eq!(
        out.warnings,
        vec![crate::layout::LayoutWarning::UnsupportedSlideType {
            type_name: "chart".to_string(),
            format: Format::Carousel
        }]
    );
    // chrome still renders around the placeholder
    assert_eq!(out.layers_of(LayerKind::Footer).count(), 1);
}

#[test]
fn speaker_notes_are_metadata_only() {
    let s = slide(json!({ "type": "tip", "title": "x", "speakerNotes": "say hi" }));
    let out = compose_card(&s, &chrome(None, None), frame());
    assert_eq!(out.speaker_notes.as_deref(), Some("say hi"));
    for layer in &out.layers {
        if let Some(el) = &layer.element {
            assert!(!el.texts().contains(&"say hi"));
        }
    }
}
