use super::*;
use crate::theme::palette::resolve_theme;

#[test]
fn texts_walk_depth_first() {
    let theme = resolve_theme(None);
    let style = TextStyle::new(TypeScale::Body, FontWeight::Regular, theme.text);
    let tree = Element::column(
        8.0,
        vec![
            Element::text("a", TextRole::Title, style),
            Element::row(
                4.0,
                vec![
                    Element::badge("1", 40.0, theme.accent, theme.bg),
                    Element::panel(
                        Emphasis::Plain,
                        theme,
                        vec![Element::text("b", TextRole::Body, style)],
                    ),
                ],
            ),
            Element::image("x.png", ImageFit::Cover),
            Element::text("c", TextRole::Caption, style),
        ],
    );
    assert_eq!(tree.texts(), vec!["a", "1", "b", "c"]);
}

#[test]
fn panel_emphasis_selects_border() {
    let theme = resolve_theme(Some("cream"));
    let Element::Panel { border, .. } = Element::panel(Emphasis::Accent, theme, vec![]) else {
        panic!("expected panel");
    };
    assert_eq!(border, Some(theme.accent));
    let Element::Panel { border, .. } = Element::panel(Emphasis::Muted, theme, vec![]) else {
        panic!("expected panel");
    };
    assert_eq!(border, None);
}

#[test]
fn placeholder_serializes_with_kind_tag() {
    let p = Element::placeholder("chart");
    assert!(p.is_placeholder());
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["kind"], "placeholder");
    assert_eq!(v["message"], "Unknown slide type");
    assert_eq!(v["type_name"], "chart");
}

#[test]
fn aligned_only_touches_stacks() {
    let s = Element::column(0.0, vec![]).aligned(Align::Center, Justify::SpaceBetween);
    let Element::Stack { align, justify, .. } = s else {
        panic!("expected stack");
    };
    assert_eq!((align, justify), (Align::Center, Justify::SpaceBetween));
    let t = Element::placeholder("x").aligned(Align::End, Justify::End);
    assert!(t.is_placeholder());
}

#[test]
fn text_style_uses_scale_pixels() {
    let s = TextStyle::new(TypeScale::H1, FontWeight::Bold, Rgba8::WHITE).align(TextAlign::Center);
    assert_eq!(s.size_px, 72.0);
    assert_eq!(s.align, TextAlign::Center);
    assert!(!s.italic);
}
