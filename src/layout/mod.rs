//! Layout shells and the composed-slide description they produce.
//!
//! A [`ComposedSlide`] is a flat list of positioned [`Layer`]s in painter's order
//! (lowest `z` first). Rasterizers draw each layer's fill, then its element tree,
//! inside `frame` and masked by `clip` when present.

pub(crate) mod card;
pub(crate) mod decorations;
pub(crate) mod diagonal;
pub(crate) mod geometry;

use std::fmt;

use crate::{
    content::{ContentContext, render_content},
    element::Element,
    foundation::core::{Canvas, Edges, Rect, Rgba8},
    layout::geometry::Polygon,
    model::{
        options::{DecorationVariant, DiagonalPattern},
        slide::{Format, Slide},
    },
};

/// One color stop of a [`Paint::LinearGradient`]. `offset` is in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba8,
}

/// Fill applied to a layer's frame (or clip, when set).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid {
        color: Rgba8,
    },
    LinearGradient {
        angle_deg: f64,
        stops: Vec<GradientStop>,
    },
    /// Square line grid over a solid background.
    Grid {
        background: Rgba8,
        line: Rgba8,
        cell_px: f64,
    },
    /// Dot lattice.
    Dots {
        color: Rgba8,
        spacing_px: f64,
        radius_px: f64,
    },
    /// Circle outline inscribed in the frame.
    Ring {
        color: Rgba8,
        stroke_px: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Background,
    /// Flat fill under the image region.
    ImageArea,
    Image,
    Decoration,
    /// Gradient-filled text polygon.
    TextArea,
    Header,
    Content,
    Footer,
}

/// One positioned, optionally clipped drawing layer in canvas pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    /// Painter's order. Assigned by [`ComposedSlide::push`].
    pub z: i32,
    pub frame: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Polygon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    pub padding: Edges,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    pub opacity: f64,
}

impl Layer {
    pub fn new(kind: LayerKind, frame: Rect) -> Self {
        Self {
            kind,
            z: 0,
            frame,
            clip: None,
            fill: None,
            padding: Edges::default(),
            element: None,
            opacity: 1.0,
        }
    }

    pub fn fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    pub fn clip(mut self, polygon: Polygon) -> Self {
        self.clip = Some(polygon);
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Frame shrunk by padding: where the element tree is laid out.
    pub fn content_box(&self) -> Rect {
        self.padding.inset(self.frame)
    }
}

/// Non-fatal problem found while composing a slide.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// `diagonalPattern` outside the known set; `fallback` was used.
    UnknownPattern {
        value: String,
        fallback: DiagonalPattern,
    },
    /// `imagePath` present but blank; the image was dropped.
    EmptyImagePath,
    /// `decorations` outside the known set; `fallback` was used.
    UnknownDecorations {
        value: String,
        fallback: DecorationVariant,
    },
    /// `imagePosition` outside the known set; the hint was dropped.
    UnknownImagePosition { value: String },
    /// Unknown `type`, or a variant not valid in this format; a placeholder was drawn.
    UnsupportedSlideType { type_name: String, format: Format },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::UnknownPattern { value, fallback } => write!(
                f,
                "unknown diagonal pattern '{value}', using '{}'",
                fallback.as_str()
            ),
            LayoutWarning::EmptyImagePath => f.write_str("empty imagePath, image dropped"),
            LayoutWarning::UnknownDecorations { value, fallback } => write!(
                f,
                "unknown decorations '{value}', using '{}'",
                fallback.as_str()
            ),
            LayoutWarning::UnknownImagePosition { value } => {
                write!(f, "unknown imagePosition '{value}', position dropped")
            }
            LayoutWarning::UnsupportedSlideType { type_name, format } => write!(
                f,
                "slide type '{type_name}' is not supported in {} format",
                format.as_str()
            ),
        }
    }
}

/// Identity of a slide within its deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideFrame {
    /// Still id, `{deckId}-slide-{n}`.
    pub id: String,
    /// 1-based.
    pub slide_number: usize,
    pub total_slides: usize,
}

impl SlideFrame {
    pub fn new(deck_id: &str, index: usize, total_slides: usize) -> Self {
        Self {
            id: still_id(deck_id, index),
            slide_number: index + 1,
            total_slides,
        }
    }
}

/// Still identifier for the slide at 0-based `index`.
pub fn still_id(deck_id: &str, index: usize) -> String {
    format!("{deck_id}-slide-{}", index + 1)
}

/// Fully composed layout for one slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedSlide {
    pub id: String,
    pub format: Format,
    pub canvas: Canvas,
    pub slide_number: usize,
    pub total_slides: usize,
    /// Resolved diagonal pattern (presentation format only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<DiagonalPattern>,
    /// Whether the minimal card shell was used (carousel format only).
    pub minimal: bool,
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LayoutWarning>,
}

impl ComposedSlide {
    pub(crate) fn new(frame: SlideFrame, format: Format) -> Self {
        Self {
            id: frame.id,
            format,
            canvas: format.canvas(),
            slide_number: frame.slide_number,
            total_slides: frame.total_slides,
            pattern: None,
            minimal: false,
            layers: Vec::new(),
            speaker_notes: None,
            warnings: Vec::new(),
        }
    }

    /// Append a layer on top of everything pushed so far.
    pub(crate) fn push(&mut self, mut layer: Layer) {
        layer.z = self.layers.len() as i32;
        self.layers.push(layer);
    }

    pub(crate) fn warn(&mut self, warning: LayoutWarning) {
        tracing::warn!(slide = %self.id, "{warning}");
        self.warnings.push(warning);
    }

    pub fn layers_of(&self, kind: LayerKind) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |l| l.kind == kind)
    }

    /// The main content layer, if composed.
    pub fn content(&self) -> Option<&Layer> {
        self.layers_of(LayerKind::Content).next()
    }

    /// Whether the content resolved to a placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.content()
            .and_then(|l| l.element.as_ref())
            .is_some_and(Element::is_placeholder)
    }
}

/// Dispatch content and record a warning when it degrades to a placeholder.
pub(crate) fn dispatch_content(
    slide: &Slide,
    ctx: &ContentContext<'_>,
    out: &mut ComposedSlide,
) -> Element {
    let element = render_content(&slide.content, ctx);
    if element.is_placeholder() {
        out.warn(LayoutWarning::UnsupportedSlideType {
            type_name: slide.content.type_name().to_string(),
            format: ctx.format,
        });
    }
    element
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mod.rs"]
mod tests;
