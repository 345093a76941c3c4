use serde_json::{Map, Value};

use crate::foundation::core::Canvas;
use crate::model::options::{
    AspectRatio, ColumnSide, ImageFit, ImageSize, RowSide, TimelineOrientation,
};

/// Output format a slide is composed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Square (1:1) feed carousel.
    Carousel,
    /// 16:9 presentation with diagonal layouts.
    Presentation,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Carousel => "carousel",
            Format::Presentation => "presentation",
        }
    }

    /// Output canvas for this format.
    pub fn canvas(self) -> Canvas {
        match self {
            Format::Carousel => Canvas::SQUARE,
            Format::Presentation => Canvas::WIDESCREEN,
        }
    }
}

/// Discriminant of every known slide variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    Hook,
    Tip,
    Insight,
    Cta,
    Quote,
    Stat,
    List,
    HeavyList,
    Comparison,
    Image,
    Question,
    Timeline,
    StaticImage,
    TwoColumn,
    TwoRow,
    Agenda,
    KeyTakeaway,
    Team,
    ThankYou,
}

impl SlideKind {
    pub const ALL: [SlideKind; 19] = [
        SlideKind::Hook,
        SlideKind::Tip,
        SlideKind::Insight,
        SlideKind::Cta,
        SlideKind::Quote,
        SlideKind::Stat,
        SlideKind::List,
        SlideKind::HeavyList,
        SlideKind::Comparison,
        SlideKind::Image,
        SlideKind::Question,
        SlideKind::Timeline,
        SlideKind::StaticImage,
        SlideKind::TwoColumn,
        SlideKind::TwoRow,
        SlideKind::Agenda,
        SlideKind::KeyTakeaway,
        SlideKind::Team,
        SlideKind::ThankYou,
    ];

    /// The `type` tag used in configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::Hook => "hook",
            SlideKind::Tip => "tip",
            SlideKind::Insight => "insight",
            SlideKind::Cta => "cta",
            SlideKind::Quote => "quote",
            SlideKind::Stat => "stat",
            SlideKind::List => "list",
            SlideKind::HeavyList => "heavyList",
            SlideKind::Comparison => "comparison",
            SlideKind::Image => "image",
            SlideKind::Question => "question",
            SlideKind::Timeline => "timeline",
            SlideKind::StaticImage => "staticImage",
            SlideKind::TwoColumn => "twoColumn",
            SlideKind::TwoRow => "twoRow",
            SlideKind::Agenda => "agenda",
            SlideKind::KeyTakeaway => "keyTakeaway",
            SlideKind::Team => "team",
            SlideKind::ThankYou => "thankYou",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Whether this variant may be rendered in `format`.
    pub fn supports(self, format: Format) -> bool {
        match self {
            SlideKind::Image => format == Format::Carousel,
            SlideKind::Agenda | SlideKind::KeyTakeaway | SlideKind::Team | SlideKind::ThankYou => {
                format == Format::Presentation
            }
            _ => true,
        }
    }

    /// Variants whose payload carries its own `imagePath`/`imagePosition`.
    pub fn owns_image(self) -> bool {
        matches!(
            self,
            SlideKind::Image | SlideKind::StaticImage | SlideKind::TwoColumn | SlideKind::TwoRow
        )
    }
}

/// Tagged union of slide payloads. The payload shape is fixed by the variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SlideContent {
    Hook(HookSlide),
    Tip(TipSlide),
    Insight(InsightSlide),
    Cta(CtaSlide),
    Quote(QuoteSlide),
    Stat(StatSlide),
    List(ListSlide),
    HeavyList(HeavyListSlide),
    Comparison(ComparisonSlide),
    Image(ImageSlide),
    Question(QuestionSlide),
    Timeline(TimelineSlide),
    StaticImage(StaticImageSlide),
    TwoColumn(TwoColumnSlide),
    TwoRow(TwoRowSlide),
    Agenda(AgendaSlide),
    KeyTakeaway(KeyTakeawaySlide),
    Team(TeamSlide),
    ThankYou(ThankYouSlide),
    /// A `type` tag outside the closed set. Rendered as a visible placeholder.
    #[serde(skip)]
    Unknown(UnknownSlide),
}

impl SlideContent {
    /// Known discriminant, or `None` for [`SlideContent::Unknown`].
    pub fn kind(&self) -> Option<SlideKind> {
        Some(match self {
            SlideContent::Hook(_) => SlideKind::Hook,
            SlideContent::Tip(_) => SlideKind::Tip,
            SlideContent::Insight(_) => SlideKind::Insight,
            SlideContent::Cta(_) => SlideKind::Cta,
            SlideContent::Quote(_) => SlideKind::Quote,
            SlideContent::Stat(_) => SlideKind::Stat,
            SlideContent::List(_) => SlideKind::List,
            SlideContent::HeavyList(_) => SlideKind::HeavyList,
            SlideContent::Comparison(_) => SlideKind::Comparison,
            SlideContent::Image(_) => SlideKind::Image,
            SlideContent::Question(_) => SlideKind::Question,
            SlideContent::Timeline(_) => SlideKind::Timeline,
            SlideContent::StaticImage(_) => SlideKind::StaticImage,
            SlideContent::TwoColumn(_) => SlideKind::TwoColumn,
            SlideContent::TwoRow(_) => SlideKind::TwoRow,
            SlideContent::Agenda(_) => SlideKind::Agenda,
            SlideContent::KeyTakeaway(_) => SlideKind::KeyTakeaway,
            SlideContent::Team(_) => SlideKind::Team,
            SlideContent::ThankYou(_) => SlideKind::ThankYou,
            SlideContent::Unknown(_) => return None,
        })
    }

    /// The `type` tag as written in the configuration.
    pub fn type_name(&self) -> &str {
        match self {
            SlideContent::Unknown(u) => &u.type_name,
            known => known.kind().map_or("", SlideKind::as_str),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSlide {
    pub headline_top: String,
    pub headline_highlight: String,
    #[serde(default)]
    pub show_stats: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipSlide {
    /// Free-form step marker such as `"01"` or `"Step 1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub show_quotes: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSlide {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSlide {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSlide {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSlide {
    pub stat: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSlide {
    pub title: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub use_checkmarks: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeavyListSlide {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub use_checkmarks: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSlide {
    pub left_label: String,
    pub left_content: String,
    pub right_label: String,
    pub right_content: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSlide {
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub image_size: ImageSize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSlide {
    pub question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub steps: Vec<TimelineStep>,
    #[serde(default)]
    pub orientation: TimelineOrientation,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticImageSlide {
    pub image_path: String,
    #[serde(default)]
    pub fit: ImageFit,
    /// Object-position hint passed through to the rasterizer (e.g. `"center top"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub hide_decorations: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoColumnSlide {
    pub image_path: String,
    #[serde(default)]
    pub image_position: ColumnSide,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub image_aspect_ratio: AspectRatio,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoRowSlide {
    pub image_path: String,
    #[serde(default)]
    pub image_position: RowSide,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullet_points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub title: String,
    /// Display string such as `"15 min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<AgendaItem>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTakeawaySlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub takeaways: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub initials: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_info: Vec<String>,
}

/// Payload for a `type` tag outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSlide {
    /// The tag as found in the input (empty when the tag was missing).
    pub type_name: String,
}

/// One slide entry: its content plus per-slide layout metadata.
///
/// In JSON, content fields and layout fields share one flat object:
///
/// ```json
/// { "type": "stat", "stat": "10x", "label": "Faster", "diagonalPattern": "right" }
/// ```
///
/// `imagePath`/`imagePosition` belong to the payload for variants that own an image
/// (`image`, `staticImage`, `twoColumn`, `twoRow`); for every other variant they feed
/// the presentation's diagonal image region.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub content: SlideContent,
    /// Explicit card-shell override; `None` defers to the type-based rule.
    pub use_minimal_layout: Option<bool>,
    /// Raw diagonal pattern value. Kept unparsed so invalid values degrade with a warning.
    pub diagonal_pattern: Option<String>,
    /// Diagonal-layout image for variants without an image of their own.
    pub image_path: Option<String>,
    /// Raw image position, resolved (or dropped with a warning) at composition.
    pub image_position: Option<String>,
    /// Raw overlay set name, resolved (or defaulted with a warning) at composition.
    pub decorations: Option<String>,
    /// Presenter metadata. Never rendered.
    pub speaker_notes: Option<String>,
}

impl Slide {
    pub fn new(content: SlideContent) -> Self {
        Self {
            content,
            use_minimal_layout: None,
            diagonal_pattern: None,
            image_path: None,
            image_position: None,
            decorations: None,
            speaker_notes: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.diagonal_pattern = Some(pattern.into());
        self
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.speaker_notes = Some(notes.into());
        self
    }

    pub fn with_minimal_layout(mut self, minimal: bool) -> Self {
        self.use_minimal_layout = Some(minimal);
        self
    }

    pub fn kind(&self) -> Option<SlideKind> {
        self.content.kind()
    }
}

const KEY_TYPE: &str = "type";
const KEY_MINIMAL: &str = "useMinimalLayout";
const KEY_PATTERN: &str = "diagonalPattern";
const KEY_IMAGE_PATH: &str = "imagePath";
const KEY_IMAGE_POSITION: &str = "imagePosition";
const KEY_DECORATIONS: &str = "decorations";
const KEY_NOTES: &str = "speakerNotes";

/// Raw text of a loosely typed setting. Any JSON scalar is kept as its text.
fn take_raw(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// A non-boolean flag is ignored rather than failing the whole deck.
fn take_flag(map: &mut Map<String, Value>, key: &str) -> Option<bool> {
    match map.remove(key)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        other => {
            tracing::warn!(key, value = %other, "ignoring non-boolean slide setting");
            None
        }
    }
}

fn put<T: serde::Serialize>(
    map: &mut Map<String, Value>,
    key: &str,
    value: Option<&T>,
) -> Result<(), serde_json::Error> {
    if let Some(v) = value {
        map.insert(key.to_string(), serde_json::to_value(v)?);
    }
    Ok(())
}

impl<'de> serde::Deserialize<'de> for Slide {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::{Deserialize as _, de::Error as _};

        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        // A missing or non-string tag is a content problem, not a parse failure.
        let type_name = match map.get(KEY_TYPE) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let kind = SlideKind::parse(&type_name);

        let use_minimal_layout = take_flag(&mut map, KEY_MINIMAL);
        let diagonal_pattern = take_raw(&mut map, KEY_PATTERN);
        let decorations = take_raw(&mut map, KEY_DECORATIONS);
        let speaker_notes = take_raw(&mut map, KEY_NOTES);
        let (image_path, image_position) = if kind.is_some_and(SlideKind::owns_image) {
            (None, None)
        } else {
            (
                take_raw(&mut map, KEY_IMAGE_PATH),
                take_raw(&mut map, KEY_IMAGE_POSITION),
            )
        };

        let content = match kind {
            Some(kind) => serde_json::from_value(Value::Object(map)).map_err(|e| {
                D::Error::custom(format!("invalid '{}' slide: {e}", kind.as_str()))
            })?,
            None => SlideContent::Unknown(UnknownSlide { type_name }),
        };

        Ok(Slide {
            content,
            use_minimal_layout,
            diagonal_pattern,
            image_path,
            image_position,
            decorations,
            speaker_notes,
        })
    }
}

impl serde::Serialize for Slide {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let mut map = match &self.content {
            SlideContent::Unknown(u) => {
                let mut m = Map::new();
                m.insert(KEY_TYPE.to_string(), Value::String(u.type_name.clone()));
                m
            }
            known => match serde_json::to_value(known).map_err(S::Error::custom)? {
                Value::Object(m) => m,
                _ => return Err(S::Error::custom("slide content must serialize to an object")),
            },
        };
        put(&mut map, KEY_MINIMAL, self.use_minimal_layout.as_ref()).map_err(S::Error::custom)?;
        put(&mut map, KEY_PATTERN, self.diagonal_pattern.as_ref()).map_err(S::Error::custom)?;
        put(&mut map, KEY_IMAGE_PATH, self.image_path.as_ref()).map_err(S::Error::custom)?;
        put(&mut map, KEY_IMAGE_POSITION, self.image_position.as_ref())
            .map_err(S::Error::custom)?;
        put(&mut map, KEY_DECORATIONS, self.decorations.as_ref()).map_err(S::Error::custom)?;
        put(&mut map, KEY_NOTES, self.speaker_notes.as_ref()).map_err(S::Error::custom)?;
        serde::Serialize::serialize(&map, serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/slide.rs"]
mod tests;
