use super::*;
use crate::{foundation::core::Rect, theme::palette::resolve_theme};
use serde_json::json;

fn slide(v: serde_json::Value) -> Slide {
    serde_json::from_value(v).unwrap()
}

fn chrome() -> DiagonalChrome<'static> {
    DiagonalChrome {
        theme: resolve_theme(None),
        profile_initials: "AS",
        decorations: DecorationVariant::Balanced,
    }
}

fn compose(s: &Slide, index: usize) -> ComposedSlide {
    compose_diagonal(s, index, &chrome(), SlideFrame::new("talk", index, 13))
}

fn kinds(out: &ComposedSlide) -> Vec<LayerKind> {
    out.layers.iter().map(|l| l.kind).collect()
}

#[test]
fn pattern_resolution_rules() {
    assert_eq!(resolve_pattern(None, 7), (DiagonalPattern::InclineRight, None));
    assert_eq!(
        resolve_pattern(Some("incline-left"), 0),
        (DiagonalPattern::InclineLeft, None)
    );
    let (p, w) = resolve_pattern(Some("bogus-value"), 3);
    assert_eq!(p, DiagonalPattern::Left);
    assert_eq!(
        w,
        Some(LayoutWarning::UnknownPattern {
            value: "bogus-value".to_string(),
            fallback: DiagonalPattern::Left
        })
    );
}

#[test]
fn painter_order_with_image() {
    let s = slide(json!({
        "type": "stat", "stat": "10x", "label": "Faster",
        "diagonalPattern": "left", "imagePath": "media/chart.png", "imagePosition": "right"
    }));
    let out = compose(&s, 0);
    assert_eq!(
        kinds(&out),
        vec![
            LayerKind::Background,
            LayerKind::ImageArea,
            LayerKind::Image,
            LayerKind::Decoration,
            LayerKind::Decoration,
            LayerKind::Decoration,
            LayerKind::Decoration,
            LayerKind::TextArea,
            LayerKind::Content,
        ]
    );
    let image = out.layers_of(LayerKind::Image).next().unwrap();
    assert_eq!(image.frame, Rect::new(0.68 * 1920.0, 0.0, 1920.0, 1080.0));
    assert!(matches!(
        image.element.as_ref(),
        Some(Element::Image { source, position: Some(pos), .. })
            if source == "media/chart.png" && pos == "right"
    ));
    let text = out.layers_of(LayerKind::TextArea).next().unwrap();
    assert_eq!(text.fill, Some(text_gradient()));
    for deco in out.layers_of(LayerKind::Decoration) {
        assert_eq!(deco.clip, text.clip);
        assert_eq!(deco.opacity, 0.3);
    }
    assert!(out.warnings.is_empty());
}

#[test]
fn no_image_means_no_image_layers() {
    let s = slide(json!({ "type": "tip", "title": "t", "diagonalPattern": "right" }));
    let out = compose(&s, 1);
    assert_eq!(out.layers_of(LayerKind::ImageArea).count(), 0);
    assert_eq!(out.layers_of(LayerKind::Image).count(), 0);
    assert_eq!(out.pattern, Some(DiagonalPattern::Right));
}

#[test]
fn none_pattern_skips_image_even_when_given() {
    let s = slide(json!({
        "type": "tip", "title": "t", "diagonalPattern": "none", "imagePath": "a.png"
    }));
    let out = compose(&s, 0);
    assert_eq!(out.layers_of(LayerKind::Image).count(), 0);
    let content = out.content().unwrap();
    assert_eq!(content.frame, Rect::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn blank_image_path_warns_and_is_dropped() {
    let s = slide(json!({ "type": "tip", "title": "t", "imagePath": "   " }));
    let out = compose(&s, 0);
    assert_eq!(out.warnings, vec![LayoutWarning::EmptyImagePath]);
    assert_eq!(out.layers_of(LayerKind::Image).count(), 0);
}

#[test]
fn bogus_pattern_falls_back_to_left() {
    let s = slide(json!({ "type": "tip", "title": "t", "diagonalPattern": "bogus-value" }));
    let out = compose(&s, 4);
    assert_eq!(out.pattern, Some(DiagonalPattern::Left));
    assert_eq!(out.warnings.len(), 1);
    assert!(!out.has_placeholder());
}

#[test]
fn incline_content_is_inset_past_the_seam() {
    let s = slide(json!({ "type": "tip", "title": "t", "diagonalPattern": "incline-right" }));
    let out = compose(&s, 0);
    let content = out.content().unwrap();
    assert_eq!(content.frame.x0, 0.25 * 1920.0);
    // seam reaches x = 0.37 at the top edge
    let inner = content.content_box();
    assert!(inner.x0 >= 0.37 * 1920.0, "{inner:?}");
    assert!((content.padding.left - (96.0 + 0.12 * 1920.0)).abs() < 1e-6);
    assert_eq!(content.padding.right, 64.0);
}

#[test]
fn image_owning_slides_get_no_region_image() {
    let s = slide(json!({
        "type": "twoColumn", "imagePath": "team.png", "title": "t", "content": "c",
        "diagonalPattern": "left"
    }));
    assert_eq!(resolve_region_image(&s), (None, None));
    let out = compose(&s, 0);
    assert_eq!(out.layers_of(LayerKind::Image).count(), 0);
    assert!(!out.has_placeholder());
}

#[test]
fn decoration_selection() {
    let off = slide(json!({ "type": "tip", "title": "t", "decorations": "off" }));
    assert_eq!(compose(&off, 0).layers_of(LayerKind::Decoration).count(), 0);
    let dynamic = slide(json!({ "type": "tip", "title": "t", "decorations": "dynamic" }));
    assert_eq!(compose(&dynamic, 0).layers_of(LayerKind::Decoration).count(), 5);
    let hidden = slide(json!({
        "type": "staticImage", "imagePath": "full.png", "hideDecorations": true
    }));
    assert_eq!(compose(&hidden, 0).layers_of(LayerKind::Decoration).count(), 0);
}

#[test]
fn carousel_only_variant_is_a_placeholder_here() {
    let s = slide(json!({ "type": "image", "imagePath": "a.png" }));
    let out = compose(&s, 0);
    assert!(out.has_placeholder());
    assert_eq!(
        out.warnings,
        vec![LayoutWarning::UnsupportedSlideType {
            type_name: "image".to_string(),
            format: Format::Presentation
        }]
    );
}

#[test]
fn unknown_decorations_fall_back_to_chrome_default() {
    assert_eq!(
        resolve_decorations(Some(" minimal "), DecorationVariant::Balanced),
        (DecorationVariant::Minimal, None)
    );
    assert_eq!(
        resolve_decorations(None, DecorationVariant::Geometric),
        (DecorationVariant::Geometric, None)
    );

    let s = slide(json!({ "type": "tip", "title": "t", "decorations": "sparkle" }));
    let out = compose(&s, 0);
    assert_eq!(out.layers_of(LayerKind::Decoration).count(), 4);
    assert_eq!(
        out.warnings,
        vec![LayoutWarning::UnknownDecorations {
            value: "sparkle".to_string(),
            fallback: DecorationVariant::Balanced
        }]
    );
    assert!(!out.has_placeholder());
}

#[test]
fn unknown_image_position_is_dropped() {
    assert_eq!(
        resolve_image_position(Some("bottom")),
        (Some(ImagePosition::Bottom), None)
    );
    assert_eq!(resolve_image_position(None), (None, None));

    let s = slide(json!({
        "type": "stat", "stat": "3", "label": "l",
        "diagonalPattern": "right", "imagePath": "a.png", "imagePosition": "center"
    }));
    let out = compose(&s, 0);
    let image = out.layers_of(LayerKind::Image).next().unwrap();
    assert!(matches!(
        image.element.as_ref(),
        Some(Element::Image { source, position: None, .. }) if source == "a.png"
    ));
    assert_eq!(
        out.warnings,
        vec![LayoutWarning::UnknownImagePosition {
            value: "center".to_string()
        }]
    );
}

#[test]
fn decorations_paint_beneath_the_text_fill() {
    let s = slide(json!({ "type": "tip", "title": "t", "decorations": "geometric" }));
    let out = compose(&s, 0);
    let text_z = out.layers_of(LayerKind::TextArea).next().unwrap().z;
    assert!(out.layers_of(LayerKind::Decoration).all(|d| d.z < text_z));
    let Paint::LinearGradient { stops, .. } = text_gradient() else {
        panic!("text area fill is a gradient");
    };
    assert!(stops.iter().all(|s| s.color.a == 255));
}
