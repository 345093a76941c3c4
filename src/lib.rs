//! Slidecraft resolves branded slide decks into renderer-agnostic layouts.
//!
//! Two deck kinds are supported:
//!
//! - square social carousels ([`CarouselConfig`]) laid out in a card shell with a
//!   brand header and footer
//! - 16:9 presentations ([`PresentationConfig`]) laid out in a diagonal shell that
//!   splits each slide into a gradient text region and an image region
//!
//! The flow is: parse a [`DeckConfig`], [`assemble`] it into [`RenderUnit`]s, then
//! compose each unit into a [`ComposedSlide`] (or use [`compose_deck`] for the whole
//! batch). Composed slides are plain data and serialize to JSON for any rasterizer.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod assemble;
pub(crate) mod compose;
pub(crate) mod content;
pub(crate) mod element;
pub(crate) mod layout;
pub(crate) mod model;
pub(crate) mod theme;

pub use crate::foundation::core::{BezPath, Canvas, Edges, Point, Rect, Rgba8, Size};
pub use crate::foundation::error::{SlideError, SlideResult};

pub use crate::theme::palette::{ThemeConfig, ThemeKey, resolve_theme};
pub use crate::theme::typography::{FontWeight, ROOT_FONT_PX, TypeScale, spacing};

pub use crate::model::deck::{
    CarouselConfig, DEFAULT_PROFILE_INITIALS, DeckConfig, PresentationConfig,
};
pub use crate::model::options::{
    AspectRatio, ColumnSide, DecorationVariant, DiagonalPattern, ImageFit, ImagePosition,
    ImageSize, RowSide, TimelineOrientation,
};
pub use crate::model::slide::{
    AgendaItem, AgendaSlide, ComparisonSlide, CtaSlide, Format, HeavyListSlide, HookSlide,
    ImageSlide, InsightSlide, KeyTakeawaySlide, ListSlide, QuestionSlide, QuoteSlide, Slide,
    SlideContent, SlideKind, StatSlide, StaticImageSlide, TeamMember, TeamSlide, ThankYouSlide,
    TimelineSlide, TimelineStep, TipSlide, TwoColumnSlide, TwoRowSlide, UnknownSlide,
};

pub use crate::element::{Align, Axis, Element, Emphasis, Justify, TextAlign, TextRole, TextStyle};

pub use crate::content::{
    ContentContext, DENSE_LIST_THRESHOLD, QUESTION_LONG_THRESHOLD, option_label, render_content,
};

pub use crate::layout::card::{
    CardChrome, compose_card, minimal_background, page_indicator, uses_minimal_layout,
};
pub use crate::layout::decorations::{
    ASSET_DIR as DECORATION_ASSET_DIR, DEFAULT_OPACITY as DECORATION_OPACITY, Offset, Placement,
    VAnchor, placements,
};
pub use crate::layout::diagonal::{
    DiagonalChrome, GRADIENT_ANGLE_DEG, TEXT_PADDING, compose_diagonal, resolve_decorations,
    resolve_image_position, resolve_pattern, resolve_region_image, text_gradient,
};
pub use crate::layout::geometry::{DiagonalGeometry, Polygon, Region};
pub use crate::layout::{
    ComposedSlide, GradientStop, Layer, LayerKind, LayoutWarning, Paint, SlideFrame, still_id,
};

pub use crate::assemble::carousel::validate_carousel;
pub use crate::assemble::presentation::validate_presentation;
pub use crate::assemble::{Deck, RenderUnit, SlideLimits, assemble};

pub use crate::compose::fingerprint::{LayoutFingerprint, fingerprint_slide};
pub use crate::compose::pipeline::{
    ComposeOptions, ComposeStats, ComposedDeck, compose_deck, compose_units,
};
