//! Decorative SVG overlays for the diagonal shell.

use crate::{
    foundation::core::{Canvas, Rect},
    model::options::DecorationVariant,
};

/// Asset directory shared by every overlay.
pub const ASSET_DIR: &str = "graphic-elements";

/// Opacity applied to every overlay layer.
pub const DEFAULT_OPACITY: f64 = 0.3;

/// Horizontal or vertical offset: absolute pixels or a fraction of the canvas side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Px(f64),
    Frac(f64),
}

impl Offset {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            Offset::Px(v) => v,
            Offset::Frac(f) => f * extent,
        }
    }
}

/// Vertical anchoring of an overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VAnchor {
    /// Distance from the top edge to the overlay's top.
    Top(Offset),
    /// Distance from the bottom edge to the overlay's bottom.
    Bottom(Offset),
    /// Overlay's vertical center at this offset from the top.
    Center(Offset),
}

/// One overlay: asset file name, left offset, vertical anchor and pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub file: &'static str,
    pub left: Offset,
    pub vertical: VAnchor,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    const fn square(file: &'static str, left: Offset, vertical: VAnchor, size: f64) -> Self {
        Self {
            file,
            left,
            vertical,
            width: size,
            height: size,
        }
    }

    /// Asset identifier handed to the rasterizer.
    pub fn asset(&self) -> String {
        format!("{ASSET_DIR}/{}", self.file)
    }

    pub fn frame(&self, canvas: Canvas) -> Rect {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let x0 = self.left.resolve(w);
        let y0 = match self.vertical {
            VAnchor::Top(o) => o.resolve(h),
            VAnchor::Bottom(o) => h - o.resolve(h) - self.height,
            VAnchor::Center(o) => o.resolve(h) - self.height / 2.0,
        };
        Rect::new(x0, y0, x0 + self.width, y0 + self.height)
    }
}

use Offset::{Frac, Px};
use VAnchor::{Bottom, Center, Top};

const MINIMAL: &[Placement] = &[
    Placement::square("short-line.svg", Px(40.0), Top(Px(40.0)), 80.0),
    Placement::square("small-thicker-circle.svg", Px(40.0), Bottom(Px(40.0)), 60.0),
];

const BALANCED: &[Placement] = &[
    Placement::square("upper-left-triangle-stripes.svg", Px(0.0), Top(Px(0.0)), 200.0),
    Placement::square("plus-sign.svg", Frac(0.60), Top(Px(60.0)), 50.0),
    Placement::square("thick-circle.svg", Px(60.0), Bottom(Px(80.0)), 70.0),
    Placement::square("x-symbol.svg", Frac(0.50), Bottom(Px(40.0)), 60.0),
];

const DYNAMIC: &[Placement] = &[
    Placement::square("white-dots-upper-triangle.svg", Px(0.0), Top(Px(0.0)), 220.0),
    Placement::square("thick-zigzag-line.svg", Frac(0.55), Top(Px(50.0)), 120.0),
    Placement {
        file: "long-vertical-waves.svg",
        left: Px(30.0),
        vertical: Center(Frac(0.5)),
        width: 40.0,
        height: 300.0,
    },
    Placement::square("lower-trangle-dotted.svg", Frac(0.45), Bottom(Px(0.0)), 180.0),
    Placement::square("x-symbol.svg", Px(70.0), Bottom(Px(70.0)), 60.0),
];

const GEOMETRIC: &[Placement] = &[
    Placement::square("oblique-square-dotted.svg", Px(40.0), Top(Px(40.0)), 150.0),
    Placement::square("blue-stripes-sphere.svg", Frac(0.58), Top(Px(50.0)), 140.0),
    Placement::square("thick-big-x.svg", Frac(0.52), Center(Frac(0.5)), 80.0),
    Placement::square("white-stripes-sphere-small.svg", Px(60.0), Bottom(Px(60.0)), 100.0),
    Placement::square("inclined-stripes-blue-line.svg", Frac(0.48), Bottom(Px(40.0)), 160.0),
];

/// Overlays for `variant`, back to front. Empty for [`DecorationVariant::Off`].
pub fn placements(variant: DecorationVariant) -> &'static [Placement] {
    match variant {
        DecorationVariant::Minimal => MINIMAL,
        DecorationVariant::Balanced => BALANCED,
        DecorationVariant::Dynamic => DYNAMIC,
        DecorationVariant::Geometric => GEOMETRIC,
        DecorationVariant::Off => &[],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/decorations.rs"]
mod tests;
