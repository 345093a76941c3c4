//! Square card shell: header, content, footer over a grid background.

use crate::{
    content::ContentContext,
    element::{Align, Element, Emphasis, Justify, TextAlign, TextRole, TextStyle},
    foundation::core::{Edges, Rect},
    layout::{ComposedSlide, Layer, LayerKind, Paint, SlideFrame, dispatch_content},
    model::{
        options::ImageFit,
        slide::{Format, Slide, SlideKind},
    },
    theme::{
        palette::ThemeConfig,
        typography::{FontWeight, TypeScale, spacing},
    },
};

const FULL_PADDING: Edges = Edges::symmetric(60.0, 80.0);
const MINIMAL_PADDING: Edges = Edges::symmetric(40.0, 48.0);
const HEADER_HEIGHT: f64 = 70.0;
const HEADER_GAP: f64 = 60.0;
const FOOTER_HEIGHT: f64 = 56.0;
const FOOTER_GAP: f64 = 60.0;
const MINIMAL_FOOTER_GAP: f64 = 40.0;
const AVATAR_PX: f64 = 70.0;
const GRID_CELL_PX: f64 = 40.0;
const RING_PX: f64 = 130.0;

/// Deck-level identity shown by the card chrome.
#[derive(Clone, Copy, Debug)]
pub struct CardChrome<'a> {
    pub theme: &'a ThemeConfig,
    pub brand_name: &'a str,
    pub tagline: Option<&'a str>,
    pub website: &'a str,
    pub profile_initials: &'a str,
    pub profile_image: Option<&'a str>,
    /// Page indicator input. The pill renders only when both are set.
    pub slide_number: Option<usize>,
    pub total_slides: Option<usize>,
}

/// Whether `slide` uses the minimal shell.
///
/// An explicit `useMinimalLayout` wins; otherwise image-heavy and dense
/// variants (`twoColumn`, `twoRow`, `heavyList`) go minimal.
pub fn uses_minimal_layout(slide: &Slide) -> bool {
    slide.use_minimal_layout.unwrap_or_else(|| {
        matches!(
            slide.kind(),
            Some(SlideKind::TwoColumn | SlideKind::TwoRow | SlideKind::HeavyList)
        )
    })
}

/// Background asset for the minimal shell.
pub fn minimal_background(kind: Option<SlideKind>) -> &'static str {
    match kind {
        Some(SlideKind::TwoColumn) => "bgs/bg_two_column.png",
        Some(SlideKind::TwoRow) => "bgs/bg_two_row.png",
        Some(SlideKind::HeavyList) => "bgs/bg_heavy_list.png",
        _ => "bgs/bg_recommended_for_non_header_content.png",
    }
}

/// Page indicator label, gated on both values being present.
pub fn page_indicator(slide_number: Option<usize>, total_slides: Option<usize>) -> Option<String> {
    match (slide_number, total_slides) {
        (Some(n), Some(total)) => Some(format!("{n} / {total}")),
        _ => None,
    }
}

fn header(chrome: &CardChrome<'_>, width: f64) -> Element {
    let avatar = match chrome.profile_image {
        Some(src) if !src.trim().is_empty() => Element::Image {
            source: src.to_string(),
            fit: ImageFit::Cover,
            position: None,
            aspect: Some(1.0),
            width_fraction: (AVATAR_PX / width).min(1.0),
        },
        _ => Element::badge(
            chrome.profile_initials,
            AVATAR_PX,
            chrome.theme.accent,
            chrome.theme.bg,
        ),
    };
    let mut ident = vec![Element::text(
        chrome.brand_name,
        TextRole::Label,
        TextStyle::new(TypeScale::Body, FontWeight::Bold, chrome.theme.text),
    )];
    if let Some(tagline) = chrome.tagline {
        ident.push(Element::text(
            tagline,
            TextRole::Caption,
            TextStyle::new(TypeScale::Small, FontWeight::Medium, chrome.theme.text_secondary),
        ));
    }
    Element::row(
        spacing::SM,
        vec![avatar, Element::column(spacing::XS / 2.0, ident)],
    )
}

fn footer(chrome: &CardChrome<'_>) -> Element {
    let mut cells = vec![Element::text(
        chrome.website,
        TextRole::Caption,
        TextStyle::new(TypeScale::Small, FontWeight::Semibold, chrome.theme.text_secondary),
    )];
    if let Some(label) = page_indicator(chrome.slide_number, chrome.total_slides) {
        cells.push(Element::Panel {
            emphasis: Emphasis::Plain,
            fill: chrome.theme.overlay,
            border: Some(chrome.theme.border),
            padding: Edges::symmetric(spacing::XS, spacing::MD),
            children: vec![Element::text(
                label,
                TextRole::Label,
                TextStyle::new(TypeScale::Small, FontWeight::Bold, chrome.theme.accent)
                    .align(TextAlign::Center),
            )],
        });
    }
    Element::row(spacing::MD, cells).aligned(Align::Center, Justify::SpaceBetween)
}

/// Compose one carousel slide inside the card shell.
pub fn compose_card(slide: &Slide, chrome: &CardChrome<'_>, frame: SlideFrame) -> ComposedSlide {
    let mut out = ComposedSlide::new(frame, Format::Carousel);
    out.speaker_notes = slide.speaker_notes.clone();
    let minimal = uses_minimal_layout(slide);
    out.minimal = minimal;

    let canvas = out.canvas.rect();
    let theme = chrome.theme;
    let pad = if minimal { MINIMAL_PADDING } else { FULL_PADDING };
    let inner = pad.inset(canvas);
    let footer_frame = Rect::new(inner.x0, inner.y1 - FOOTER_HEIGHT, inner.x1, inner.y1);

    if minimal {
        out.push(
            Layer::new(LayerKind::Background, canvas)
                .fill(Paint::Solid { color: theme.bg })
                .element(Element::image(minimal_background(slide.kind()), ImageFit::Cover)),
        );
    } else {
        out.push(Layer::new(LayerKind::Background, canvas).fill(Paint::Grid {
            background: theme.bg,
            line: theme.grid,
            cell_px: GRID_CELL_PX,
        }));
        out.push(
            Layer::new(
                LayerKind::Decoration,
                Rect::new(canvas.x1 - 220.0, 60.0, canvas.x1 - 80.0, 200.0),
            )
            .fill(Paint::Dots {
                color: theme.overlay,
                spacing_px: 20.0,
                radius_px: 3.0,
            }),
        );
        let ring_x1 = canvas.x1 - canvas.width() * 0.05;
        let ring_y0 = canvas.height() * 0.08;
        out.push(
            Layer::new(
                LayerKind::Decoration,
                Rect::new(ring_x1 - RING_PX, ring_y0, ring_x1, ring_y0 + RING_PX),
            )
            .fill(Paint::Ring {
                color: theme.border,
                stroke_px: 3.0,
            }),
        );
        out.push(
            Layer::new(
                LayerKind::Header,
                Rect::new(inner.x0, inner.y0, inner.x1, inner.y0 + HEADER_HEIGHT),
            )
            .element(header(chrome, inner.width())),
        );
    }

    let content_top = if minimal {
        inner.y0
    } else {
        inner.y0 + HEADER_HEIGHT + HEADER_GAP
    };
    let gap = if minimal { MINIMAL_FOOTER_GAP } else { FOOTER_GAP };
    let content_frame = Rect::new(
        inner.x0,
        content_top,
        inner.x1,
        (footer_frame.y0 - gap).max(content_top),
    );
    let ctx = ContentContext::new(theme, chrome.profile_initials, Format::Carousel);
    let element = dispatch_content(slide, &ctx, &mut out);
    out.push(Layer::new(LayerKind::Content, content_frame).element(element));
    out.push(Layer::new(LayerKind::Footer, footer_frame).element(footer(chrome)));

    tracing::debug!(slide = %out.id, minimal, layers = out.layers.len(), "composed card");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/card.rs"]
mod tests;
