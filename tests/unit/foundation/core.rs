use super::*;

#[test]
fn canvas_scales_unit_rects() {
    let r = Canvas::WIDESCREEN.scale_rect(Rect::new(0.0, 0.0, 0.5, 1.0));
    assert_eq!(r, Rect::new(0.0, 0.0, 960.0, 1080.0));
    assert_eq!(Canvas::SQUARE.rect().width(), 1080.0);
}

#[test]
fn edges_inset_never_inverts() {
    let r = Edges::uniform(80.0).inset(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(r.width() >= 0.0);
    assert!(r.height() >= 0.0);

    let r = Edges::symmetric(60.0, 80.0).inset(Rect::new(0.0, 0.0, 1080.0, 1080.0));
    assert_eq!(r, Rect::new(80.0, 60.0, 1000.0, 1020.0));
}

#[test]
fn rgba_hex_and_opacity() {
    let c = Rgba8::rgb(0x00D9FF);
    assert_eq!(c.to_hex(), "#00d9ffff");
    assert_eq!(c.with_opacity(0.0).a, 0);
    assert_eq!(c.with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::rgb_alpha(0xF5F5F5, 8).a, 8);
}

#[test]
fn rgba_serializes_as_hex_string() {
    let v = serde_json::to_value(Rgba8::WHITE).unwrap();
    assert_eq!(v, serde_json::json!("#ffffffff"));
}
