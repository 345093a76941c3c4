/// Root font size the rem-based scale is expressed against.
pub const ROOT_FONT_PX: f64 = 16.0;

/// Named type scale steps, largest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeScale {
    /// Main headlines.
    Hero,
    /// Section titles.
    H1,
    /// Subtitles.
    H2,
    /// Large body text.
    H3,
    /// Regular content.
    Body,
    /// Secondary info.
    Small,
    /// Labels and metadata.
    Tiny,
}

impl TypeScale {
    pub fn rem(self) -> f64 {
        match self {
            TypeScale::Hero => 5.5,
            TypeScale::H1 => 4.5,
            TypeScale::H2 => 3.2,
            TypeScale::H3 => 2.4,
            TypeScale::Body => 1.8,
            TypeScale::Small => 1.4,
            TypeScale::Tiny => 1.1,
        }
    }

    pub fn px(self) -> f64 {
        self.rem() * ROOT_FONT_PX
    }

    /// One step smaller, saturating at [`TypeScale::Tiny`].
    pub fn step_down(self) -> Self {
        match self {
            TypeScale::Hero => TypeScale::H1,
            TypeScale::H1 => TypeScale::H2,
            TypeScale::H2 => TypeScale::H3,
            TypeScale::H3 => TypeScale::Body,
            TypeScale::Body => TypeScale::Small,
            TypeScale::Small | TypeScale::Tiny => TypeScale::Tiny,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    Extrabold,
    Black,
}

impl FontWeight {
    /// CSS-style numeric weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Extrabold => 800,
            FontWeight::Black => 900,
        }
    }
}

/// Spacing scale in pixels (8px base unit).
pub mod spacing {
    pub const XS: f64 = 8.0;
    pub const SM: f64 = 16.0;
    pub const MD: f64 = 24.0;
    pub const LG: f64 = 32.0;
    pub const XL: f64 = 40.0;
    pub const XXL: f64 = 48.0;
    pub const XXXL: f64 = 64.0;
    pub const XXXXL: f64 = 80.0;
    pub const XXXXXL: f64 = 96.0;
}

#[cfg(test)]
#[path = "../../tests/unit/theme/typography.rs"]
mod tests;
