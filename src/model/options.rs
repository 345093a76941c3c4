//! Small closed enums shared by slide payloads and layout options.

/// Named split of a 16:9 canvas into a text region and an image region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagonalPattern {
    /// Text on the left (0-68%), image on the right.
    Left,
    /// Text on the right (32-100%), image on the left.
    Right,
    /// Slanted seam leaning right; image in the top-left wedge.
    InclineRight,
    /// Slanted seam leaning left; image in the right wedge.
    InclineLeft,
    /// Text covers the whole canvas; no image region.
    None,
}

impl DiagonalPattern {
    /// Every pattern, in the order used for automatic assignment.
    pub const CYCLE: [DiagonalPattern; 5] = [
        DiagonalPattern::Left,
        DiagonalPattern::Right,
        DiagonalPattern::InclineRight,
        DiagonalPattern::InclineLeft,
        DiagonalPattern::None,
    ];

    /// Pattern used when an explicit one is invalid.
    pub const FALLBACK: DiagonalPattern = DiagonalPattern::Left;

    /// Parse a configuration value. Returns `None` for unrecognized strings.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::CYCLE.into_iter().find(|p| p.as_str() == raw.trim())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagonalPattern::Left => "left",
            DiagonalPattern::Right => "right",
            DiagonalPattern::InclineRight => "incline-right",
            DiagonalPattern::InclineLeft => "incline-left",
            DiagonalPattern::None => "none",
        }
    }

    /// Automatically assigned pattern for a 0-based slide position.
    pub fn for_slide_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}

/// Where the diagonal-layout image sits relative to the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl ImagePosition {
    pub const ALL: [ImagePosition; 4] = [
        ImagePosition::Left,
        ImagePosition::Right,
        ImagePosition::Top,
        ImagePosition::Bottom,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw.trim())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
            ImagePosition::Top => "top",
            ImagePosition::Bottom => "bottom",
        }
    }
}

/// Decorative overlay set for presentation slides.
///
/// Overlays are clipped to the text region and drawn beneath its opaque gradient,
/// so they only show through when the text fill is rendered translucent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DecorationVariant {
    /// Two subtle corner accents.
    Minimal,
    /// Moderate decoration on the edges.
    #[default]
    Balanced,
    /// Lines, waves and dotted shapes.
    Dynamic,
    /// Bold geometric shapes.
    Geometric,
    /// No overlays.
    Off,
}

impl DecorationVariant {
    pub const ALL: [DecorationVariant; 5] = [
        DecorationVariant::Minimal,
        DecorationVariant::Balanced,
        DecorationVariant::Dynamic,
        DecorationVariant::Geometric,
        DecorationVariant::Off,
    ];

    /// Parse a configuration value. Returns `None` for unrecognized strings.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == raw.trim())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecorationVariant::Minimal => "minimal",
            DecorationVariant::Balanced => "balanced",
            DecorationVariant::Dynamic => "dynamic",
            DecorationVariant::Geometric => "geometric",
            DecorationVariant::Off => "off",
        }
    }
}

/// How an image fills its frame.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

/// Relative size of an inline image on a carousel `image` slide.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl ImageSize {
    /// Fraction of the content width the image occupies.
    pub fn width_fraction(self) -> f64 {
        match self {
            ImageSize::Small => 0.4,
            ImageSize::Medium => 0.6,
            ImageSize::Large => 0.8,
            ImageSize::Full => 1.0,
        }
    }
}

/// Aspect ratio hint for the `twoColumn` image.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    #[default]
    Portrait,
    Landscape,
}

impl AspectRatio {
    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Portrait => 3.0 / 4.0,
            AspectRatio::Landscape => 4.0 / 3.0,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimelineOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Image side for `twoColumn` slides.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColumnSide {
    #[default]
    Left,
    Right,
}

/// Image side for `twoRow` slides.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RowSide {
    #[default]
    Top,
    Bottom,
}

#[cfg(test)]
#[path = "../../tests/unit/model/options.rs"]
mod tests;
