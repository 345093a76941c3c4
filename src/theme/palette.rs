use crate::foundation::core::Rgba8;

/// Closed set of theme keys accepted in deck configurations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKey {
    /// Modern dark tech palette (default).
    #[default]
    Dark,
    /// Warm light palette with an orange accent.
    Cream,
    /// Light palette with a blue accent.
    Blue,
    /// Light palette with a purple accent.
    Purple,
    /// Dark palette with a green accent.
    Green,
}

impl ThemeKey {
    /// Every key, in declaration order.
    pub const ALL: [ThemeKey; 5] = [
        ThemeKey::Dark,
        ThemeKey::Cream,
        ThemeKey::Blue,
        ThemeKey::Purple,
        ThemeKey::Green,
    ];

    /// Parse a configuration key. Returns `None` outside the closed set.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key.trim())
    }

    /// Canonical configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKey::Dark => "dark",
            ThemeKey::Cream => "cream",
            ThemeKey::Blue => "blue",
            ThemeKey::Purple => "purple",
            ThemeKey::Green => "green",
        }
    }

    /// The palette record for this key.
    pub fn config(self) -> &'static ThemeConfig {
        match self {
            ThemeKey::Dark => &DARK,
            ThemeKey::Cream => &CREAM,
            ThemeKey::Blue => &BLUE,
            ThemeKey::Purple => &PURPLE,
            ThemeKey::Green => &GREEN,
        }
    }
}

/// Complete palette record. Every key resolves to one of these, never a partial record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ThemeConfig {
    /// Key this record was registered under.
    pub key: ThemeKey,
    /// Canvas background.
    pub bg: Rgba8,
    /// Primary text.
    pub text: Rgba8,
    /// Muted text.
    pub text_secondary: Rgba8,
    /// Primary brand accent.
    pub accent: Rgba8,
    /// Darker accent used for depth.
    pub accent_secondary: Rgba8,
    /// Background grid line tint.
    pub grid: Rgba8,
    /// Accent-based border tint.
    pub border: Rgba8,
    /// Light accent overlay tint.
    pub overlay: Rgba8,
    /// Accent-based shadow tint.
    pub shadow: Rgba8,
    /// Radial glow tint.
    pub glow: Rgba8,
}

// Tint alphas: 0.03 -> 8, 0.05 -> 13, 0.1 -> 26, 0.3 -> 77, 0.4 -> 102, 0.6 -> 153.
static DARK: ThemeConfig = ThemeConfig {
    key: ThemeKey::Dark,
    bg: Rgba8::rgb(0x0F0F0F),
    text: Rgba8::rgb(0xF5F5F5),
    text_secondary: Rgba8::rgb(0xA0A0A0),
    accent: Rgba8::rgb(0x00D9FF),
    accent_secondary: Rgba8::rgb(0x00B8D4),
    grid: Rgba8::rgb_alpha(0xF5F5F5, 8),
    border: Rgba8::rgb_alpha(0x00D9FF, 77),
    overlay: Rgba8::rgb_alpha(0x00D9FF, 26),
    shadow: Rgba8::rgb_alpha(0x00D9FF, 102),
    glow: Rgba8::rgb_alpha(0x00D9FF, 153),
};

static CREAM: ThemeConfig = ThemeConfig {
    key: ThemeKey::Cream,
    bg: Rgba8::rgb(0xFAFAF8),
    text: Rgba8::rgb(0x1A1A1A),
    text_secondary: Rgba8::rgb(0x666666),
    accent: Rgba8::rgb(0xFF6B35),
    accent_secondary: Rgba8::rgb(0xE55A2B),
    grid: Rgba8::rgb_alpha(0x1A1A1A, 13),
    border: Rgba8::rgb_alpha(0xFF6B35, 77),
    overlay: Rgba8::rgb_alpha(0xFF6B35, 26),
    shadow: Rgba8::rgb_alpha(0xFF6B35, 102),
    glow: Rgba8::rgb_alpha(0xFF6B35, 153),
};

static BLUE: ThemeConfig = ThemeConfig {
    key: ThemeKey::Blue,
    bg: Rgba8::rgb(0xF8FBFF),
    text: Rgba8::rgb(0x0A2540),
    text_secondary: Rgba8::rgb(0x4A5568),
    accent: Rgba8::rgb(0x0066FF),
    accent_secondary: Rgba8::rgb(0x0052CC),
    grid: Rgba8::rgb_alpha(0x0A2540, 13),
    border: Rgba8::rgb_alpha(0x0066FF, 77),
    overlay: Rgba8::rgb_alpha(0x0066FF, 26),
    shadow: Rgba8::rgb_alpha(0x0066FF, 102),
    glow: Rgba8::rgb_alpha(0x0066FF, 153),
};

static PURPLE: ThemeConfig = ThemeConfig {
    key: ThemeKey::Purple,
    bg: Rgba8::rgb(0xFDFDFE),
    text: Rgba8::rgb(0x1A1A2E),
    text_secondary: Rgba8::rgb(0x4A5568),
    accent: Rgba8::rgb(0x7C3AED),
    accent_secondary: Rgba8::rgb(0x6D28D9),
    grid: Rgba8::rgb_alpha(0x1A1A2E, 13),
    border: Rgba8::rgb_alpha(0x7C3AED, 77),
    overlay: Rgba8::rgb_alpha(0x7C3AED, 26),
    shadow: Rgba8::rgb_alpha(0x7C3AED, 102),
    glow: Rgba8::rgb_alpha(0x7C3AED, 153),
};

static GREEN: ThemeConfig = ThemeConfig {
    key: ThemeKey::Green,
    bg: Rgba8::rgb(0x0D1117),
    text: Rgba8::rgb(0xE6EDF3),
    text_secondary: Rgba8::rgb(0x7D8590),
    accent: Rgba8::rgb(0x00E676),
    accent_secondary: Rgba8::rgb(0x00C853),
    grid: Rgba8::rgb_alpha(0xE6EDF3, 8),
    border: Rgba8::rgb_alpha(0x00E676, 77),
    overlay: Rgba8::rgb_alpha(0x00E676, 26),
    shadow: Rgba8::rgb_alpha(0x00E676, 102),
    glow: Rgba8::rgb_alpha(0x00E676, 153),
};

/// Resolve an optional theme key to a palette.
///
/// Total: absent or unknown keys fall back to the `dark` palette.
pub fn resolve_theme(key: Option<&str>) -> &'static ThemeConfig {
    match key {
        None => ThemeKey::default().config(),
        Some(raw) => match ThemeKey::parse(raw) {
            Some(k) => k.config(),
            None => {
                tracing::debug!(theme = raw, "unknown theme key, using dark");
                ThemeKey::default().config()
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
