use super::*;

#[test]
fn every_key_resolves_to_its_own_record() {
    for key in ThemeKey::ALL {
        let cfg = resolve_theme(Some(key.as_str()));
        assert_eq!(cfg.key, key);
        assert_ne!(cfg.bg, cfg.text);
    }
}

#[test]
fn absent_and_unknown_keys_fall_back_to_dark() {
    assert_eq!(resolve_theme(None).key, ThemeKey::Dark);
    for raw in ["", "neon", "DARK ", "Dark", "sepia", "🙂"] {
        let cfg = resolve_theme(Some(raw));
        assert_eq!(cfg.key, ThemeKey::Dark, "key {raw:?}");
        // idempotent default
        assert!(std::ptr::eq(cfg, resolve_theme(Some(raw))));
    }
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(ThemeKey::parse(" cream "), Some(ThemeKey::Cream));
    assert_eq!(ThemeKey::parse("green"), Some(ThemeKey::Green));
}

#[test]
fn dark_tints_derive_from_accent() {
    let dark = ThemeKey::Dark.config();
    assert_eq!(dark.border.r, dark.accent.r);
    assert_eq!(dark.glow.a, 153);
}
