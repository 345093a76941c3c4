pub use kurbo::{BezPath, Point, Rect, Size};

/// Output pixel dimensions of one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Square carousel format (1:1).
    pub const SQUARE: Canvas = Canvas {
        width: 1080,
        height: 1080,
    };

    /// Presentation format (16:9).
    pub const WIDESCREEN: Canvas = Canvas {
        width: 1920,
        height: 1080,
    };

    /// Canvas bounds in pixels, anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Scale a rectangle given in unit coordinates (`0..=1` on both axes) to pixels.
    pub fn scale_rect(self, unit: Rect) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        Rect::new(unit.x0 * w, unit.y0 * h, unit.x1 * w, unit.y1 * h)
    }

    /// Scale a point given in unit coordinates to pixels.
    pub fn scale_point(self, unit: Point) -> Point {
        Point::new(unit.x * f64::from(self.width), unit.y * f64::from(self.height))
    }
}

/// Padding edges in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Same padding on all four edges.
    pub const fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Vertical (`top`/`bottom`) and horizontal (`left`/`right`) padding.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// Shrink `rect` by these edges, never producing a negative size.
    pub fn inset(self, rect: Rect) -> Rect {
        let x0 = rect.x0 + self.left;
        let y0 = rect.y0 + self.top;
        let x1 = (rect.x1 - self.right).max(x0);
        let y1 = (rect.y1 - self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Straight-alpha RGBA8 color. Serializes as `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::rgb(0x000000);
    /// Opaque white.
    pub const WHITE: Rgba8 = Rgba8::rgb(0xFFFFFF);
    /// Fully transparent.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Color from a `0xRRGGBB` literal with an explicit alpha byte.
    pub const fn rgb_alpha(hex: u32, a: u8) -> Self {
        let c = Self::rgb(hex);
        Self::new(c.r, c.g, c.b, a)
    }

    /// Multiply alpha by `opacity`, clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        Self {
            a: (f32::from(self.a) * o).round() as u8,
            ..self
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
