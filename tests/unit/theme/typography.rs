use super::*;

#[test]
fn scale_is_strictly_decreasing() {
    let steps = [
        TypeScale::Hero,
        TypeScale::H1,
        TypeScale::H2,
        TypeScale::H3,
        TypeScale::Body,
        TypeScale::Small,
        TypeScale::Tiny,
    ];
    for pair in steps.windows(2) {
        assert!(pair[0].px() > pair[1].px());
        assert_eq!(pair[0].step_down(), pair[1]);
    }
    assert_eq!(TypeScale::Tiny.step_down(), TypeScale::Tiny);
}

#[test]
fn px_follows_root_size() {
    assert_eq!(TypeScale::Body.px(), 28.8);
    assert_eq!(FontWeight::Black.value(), 900);
    assert_eq!(spacing::XXXL, 64.0);
}
