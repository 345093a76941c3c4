//! 16:9 diagonal shell: a gradient text region cut against an image region.

use crate::{
    content::ContentContext,
    element::Element,
    foundation::core::{Edges, Rgba8},
    layout::{
        ComposedSlide, GradientStop, Layer, LayerKind, LayoutWarning, Paint, SlideFrame,
        decorations::{self, DEFAULT_OPACITY},
        dispatch_content,
        geometry::DiagonalGeometry,
    },
    model::{
        options::{DecorationVariant, DiagonalPattern, ImageFit, ImagePosition},
        slide::{Format, Slide, SlideContent},
    },
    theme::palette::ThemeConfig,
};

/// Content inset inside the text bbox, before seam overhang is added.
pub const TEXT_PADDING: Edges = Edges {
    left: 96.0,
    right: 64.0,
    top: 64.0,
    bottom: 64.0,
};

pub const GRADIENT_ANGLE_DEG: f64 = 135.0;

/// Text region gradient, black through navy to cyan.
///
/// Stops are opaque, so overlays beneath the text area only show where a
/// rasterizer draws it with reduced alpha.
pub fn text_gradient() -> Paint {
    Paint::LinearGradient {
        angle_deg: GRADIENT_ANGLE_DEG,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgba8::rgb(0x000000),
            },
            GradientStop {
                offset: 0.25,
                color: Rgba8::rgb(0x05082A),
            },
            GradientStop {
                offset: 0.5,
                color: Rgba8::rgb(0x14269B),
            },
            GradientStop {
                offset: 0.75,
                color: Rgba8::rgb(0x2899D1),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba8::rgb(0x3DC8FF),
            },
        ],
    }
}

/// Deck-level inputs for the diagonal shell.
#[derive(Clone, Copy, Debug)]
pub struct DiagonalChrome<'a> {
    pub theme: &'a ThemeConfig,
    pub profile_initials: &'a str,
    /// Overlay set for slides that do not choose one.
    pub decorations: DecorationVariant,
}

/// Pattern for the slide at 0-based `index`.
///
/// Absent values cycle through [`DiagonalPattern::CYCLE`]; unrecognized values
/// fall back to [`DiagonalPattern::FALLBACK`] with a warning.
pub fn resolve_pattern(
    raw: Option<&str>,
    index: usize,
) -> (DiagonalPattern, Option<LayoutWarning>) {
    match raw {
        None => (DiagonalPattern::for_slide_index(index), None),
        Some(value) => match DiagonalPattern::parse(value) {
            Some(p) => (p, None),
            None => (
                DiagonalPattern::FALLBACK,
                Some(LayoutWarning::UnknownPattern {
                    value: value.to_string(),
                    fallback: DiagonalPattern::FALLBACK,
                }),
            ),
        },
    }
}

/// Overlay set for a slide. Unrecognized values fall back to `default` with a warning.
pub fn resolve_decorations(
    raw: Option<&str>,
    default: DecorationVariant,
) -> (DecorationVariant, Option<LayoutWarning>) {
    match raw {
        None => (default, None),
        Some(value) => match DecorationVariant::parse(value) {
            Some(v) => (v, None),
            None => (
                default,
                Some(LayoutWarning::UnknownDecorations {
                    value: value.to_string(),
                    fallback: default,
                }),
            ),
        },
    }
}

/// Image position hint. Unrecognized values are dropped with a warning.
pub fn resolve_image_position(raw: Option<&str>) -> (Option<ImagePosition>, Option<LayoutWarning>) {
    match raw {
        None => (None, None),
        Some(value) => match ImagePosition::parse(value) {
            Some(p) => (Some(p), None),
            None => (
                None,
                Some(LayoutWarning::UnknownImagePosition {
                    value: value.to_string(),
                }),
            ),
        },
    }
}

/// Image placed in the image region, if any.
///
/// Variants that carry their own image never get a region image.
pub fn resolve_region_image(slide: &Slide) -> (Option<&str>, Option<LayoutWarning>) {
    if slide.kind().is_some_and(|k| k.owns_image()) {
        return (None, None);
    }
    match slide.image_path.as_deref() {
        None => (None, None),
        Some(path) if path.trim().is_empty() => (None, Some(LayoutWarning::EmptyImagePath)),
        Some(path) => (Some(path), None),
    }
}

/// Base padding widened by the seam overhang so text never touches the diagonal.
fn text_padding(geom: &DiagonalGeometry, canvas_width: f64) -> Edges {
    let (left, right) = geom.text_seam_overhang();
    Edges {
        left: TEXT_PADDING.left + left * canvas_width,
        right: TEXT_PADDING.right + right * canvas_width,
        ..TEXT_PADDING
    }
}

/// Compose one presentation slide inside the diagonal shell.
pub fn compose_diagonal(
    slide: &Slide,
    index: usize,
    chrome: &DiagonalChrome<'_>,
    frame: SlideFrame,
) -> ComposedSlide {
    let mut out = ComposedSlide::new(frame, Format::Presentation);
    out.speaker_notes = slide.speaker_notes.clone();

    let (pattern, warning) = resolve_pattern(slide.diagonal_pattern.as_deref(), index);
    if let Some(w) = warning {
        out.warn(w);
    }
    out.pattern = Some(pattern);
    let (image, warning) = resolve_region_image(slide);
    if let Some(w) = warning {
        out.warn(w);
    }
    let (image_position, warning) = resolve_image_position(slide.image_position.as_deref());
    if let Some(w) = warning {
        out.warn(w);
    }
    let (variant, warning) = resolve_decorations(slide.decorations.as_deref(), chrome.decorations);
    if let Some(w) = warning {
        out.warn(w);
    }

    let canvas = out.canvas;
    let geom = DiagonalGeometry::for_pattern(pattern);
    let text_clip = geom.text.polygon.scaled(canvas);
    let text_box = canvas.scale_rect(geom.text.bbox);

    out.push(Layer::new(LayerKind::Background, canvas.rect()).fill(Paint::Solid {
        color: Rgba8::BLACK,
    }));

    if let Some(src) = image
        && !geom.image.is_empty()
    {
        let image_box = canvas.scale_rect(geom.image.bbox);
        let image_clip = geom.image.polygon.scaled(canvas);
        out.push(
            Layer::new(LayerKind::ImageArea, image_box)
                .clip(image_clip.clone())
                .fill(Paint::Solid {
                    color: Rgba8::BLACK,
                }),
        );
        let mut el = Element::image(src, ImageFit::Cover);
        if let Element::Image { position, .. } = &mut el {
            *position = image_position.map(|p| p.as_str().to_string());
        }
        out.push(
            Layer::new(LayerKind::Image, image_box)
                .clip(image_clip)
                .element(el),
        );
    }

    let hide_decorations =
        matches!(&slide.content, SlideContent::StaticImage(s) if s.hide_decorations);
    if !hide_decorations {
        for placement in decorations::placements(variant) {
            out.push(
                Layer::new(LayerKind::Decoration, placement.frame(canvas))
                    .clip(text_clip.clone())
                    .element(Element::image(placement.asset(), ImageFit::Contain))
                    .opacity(DEFAULT_OPACITY),
            );
        }
    }

    out.push(
        Layer::new(LayerKind::TextArea, text_box)
            .clip(text_clip)
            .fill(text_gradient()),
    );

    let padding = text_padding(&geom, f64::from(canvas.width));
    let ctx = ContentContext::new(chrome.theme, chrome.profile_initials, Format::Presentation);
    let element = dispatch_content(slide, &ctx, &mut out);
    out.push(
        Layer::new(LayerKind::Content, text_box)
            .padding(padding)
            .element(element),
    );

    tracing::debug!(
        slide = %out.id,
        pattern = pattern.as_str(),
        layers = out.layers.len(),
        "composed diagonal"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/diagonal.rs"]
mod tests;
