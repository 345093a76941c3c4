use super::*;

#[test]
fn still_ids_are_one_based() {
    assert_eq!(still_id("q3-review", 0), "q3-review-slide-1");
    assert_eq!(still_id("q3-review", 12), "q3-review-slide-13");
    let f = SlideFrame::new("tips", 4, 10);
    assert_eq!(f.slide_number, 5);
    assert_eq!(f.total_slides, 10);
}

#[test]
fn push_assigns_painter_order() {
    let mut s = ComposedSlide::new(SlideFrame::new("d", 0, 2), Format::Presentation);
    assert_eq!(s.canvas, Canvas::WIDESCREEN);
    s.push(Layer::new(LayerKind::Background, Rect::new(0.0, 0.0, 10.0, 10.0)));
    s.push(Layer::new(LayerKind::Content, Rect::new(1.0, 1.0, 9.0, 9.0)));
    assert_eq!(s.layers.iter().map(|l| l.z).collect::<Vec<_>>(), vec![0, 1]);
    assert!(s.content().is_some());
    assert!(!s.has_placeholder());
}

#[test]
fn layer_builders() {
    let l = Layer::new(LayerKind::Decoration, Rect::new(0.0, 0.0, 100.0, 50.0))
        .padding(Edges::uniform(10.0))
        .opacity(1.7);
    assert_eq!(l.opacity, 1.0);
    assert_eq!(l.content_box(), Rect::new(10.0, 10.0, 90.0, 40.0));
}

#[test]
fn warnings_render_readable_messages() {
    let w = LayoutWarning::UnknownPattern {
        value: "zigzag".to_string(),
        fallback: DiagonalPattern::Left,
    };
    assert_eq!(w.to_string(), "unknown diagonal pattern 'zigzag', using 'left'");
    let w = LayoutWarning::UnsupportedSlideType {
        type_name: "team".to_string(),
        format: Format::Carousel,
    };
    assert_eq!(
        w.to_string(),
        "slide type 'team' is not supported in carousel format"
    );
    let w = LayoutWarning::UnknownDecorations {
        value: "sparkle".to_string(),
        fallback: DecorationVariant::Balanced,
    };
    assert_eq!(w.to_string(), "unknown decorations 'sparkle', using 'balanced'");
    let w = LayoutWarning::UnknownImagePosition {
        value: "center".to_string(),
    };
    assert_eq!(w.to_string(), "unknown imagePosition 'center', position dropped");
    let v = serde_json::to_value(LayoutWarning::EmptyImagePath).unwrap();
    assert_eq!(v["kind"], "empty_image_path");
}

#[test]
fn composed_slide_serializes_layers_with_kind_tags() {
    let mut s = ComposedSlide::new(SlideFrame::new("d", 1, 2), Format::Carousel);
    s.push(
        Layer::new(LayerKind::Background, Canvas::SQUARE.rect()).fill(Paint::Solid {
            color: Rgba8::rgb(0x0F0F0F),
        }),
    );
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["id"], "d-slide-2");
    assert_eq!(v["format"], "carousel");
    assert_eq!(v["layers"][0]["kind"], "background");
    assert_eq!(v["layers"][0]["fill"]["kind"], "solid");
    assert_eq!(v["layers"][0]["fill"]["color"], "#0f0f0fff");
    assert!(v.get("warnings").is_none());
}
