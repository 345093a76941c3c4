use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{SlideError, SlideResult},
    model::slide::{Format, Slide},
    theme::palette::{ThemeConfig, resolve_theme},
};

/// Initials shown in the avatar badge when a deck sets none.
pub const DEFAULT_PROFILE_INITIALS: &str = "AS";

/// Square-format deck configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Unique slug; still ids are derived from it.
    pub id: String,
    /// Raw theme key. Unknown keys resolve to the default palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_initials: Option<String>,
    /// Asset id used in the header instead of the initials badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub show_slide_numbers: bool,
    pub slides: Vec<Slide>,
}

/// 16:9 deck configuration.
///
/// `format`, `brandName` and `website` default to empty when absent so that
/// validation, not parsing, reports them with a descriptive message.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub id: String,
    #[serde(default)]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub slides: Vec<Slide>,
}

fn initials_or_default(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => DEFAULT_PROFILE_INITIALS,
    }
}

impl CarouselConfig {
    pub fn resolved_theme(&self) -> &'static ThemeConfig {
        resolve_theme(self.theme.as_deref())
    }

    /// Profile initials, defaulting to [`DEFAULT_PROFILE_INITIALS`].
    pub fn initials(&self) -> &str {
        initials_or_default(self.profile_initials.as_deref())
    }
}

impl PresentationConfig {
    pub fn resolved_theme(&self) -> &'static ThemeConfig {
        resolve_theme(self.theme.as_deref())
    }

    pub fn initials(&self) -> &str {
        initials_or_default(self.profile_initials.as_deref())
    }

    /// Presentations always number their pages.
    pub fn show_page_numbers(&self) -> bool {
        true
    }
}

/// Either deck kind, as read from a configuration document.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckConfig {
    Carousel(CarouselConfig),
    Presentation(PresentationConfig),
}

impl DeckConfig {
    /// Parse a JSON document. A document carrying a `format` key is a presentation.
    pub fn from_json_str(s: &str) -> SlideResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> SlideResult<Self> {
        let Some(obj) = value.as_object() else {
            return Err(SlideError::serde("deck config must be a JSON object"));
        };
        if obj.contains_key("format") {
            Ok(Self::Presentation(serde_json::from_value(value)?))
        } else {
            Ok(Self::Carousel(serde_json::from_value(value)?))
        }
    }

    pub fn from_path(path: &Path) -> SlideResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read deck config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn format(&self) -> Format {
        match self {
            DeckConfig::Carousel(_) => Format::Carousel,
            DeckConfig::Presentation(_) => Format::Presentation,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DeckConfig::Carousel(c) => &c.id,
            DeckConfig::Presentation(p) => &p.id,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        match self {
            DeckConfig::Carousel(c) => &c.slides,
            DeckConfig::Presentation(p) => &p.slides,
        }
    }
}

impl From<CarouselConfig> for DeckConfig {
    fn from(value: CarouselConfig) -> Self {
        Self::Carousel(value)
    }
}

impl From<PresentationConfig> for DeckConfig {
    fn from(value: PresentationConfig) -> Self {
        Self::Presentation(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/deck.rs"]
mod tests;
