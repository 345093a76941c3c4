use super::ContentContext;
use crate::{
    element::{Align, Element, Justify, TextAlign, TextRole},
    model::{
        options::{ColumnSide, ImageFit, RowSide},
        slide::{ImageSlide, StaticImageSlide, TwoColumnSlide, TwoRowSlide},
    },
    theme::typography::{FontWeight, TypeScale, spacing},
};

const COLUMN_IMAGE_FRACTION: f64 = 0.45;
const ROW_IMAGE_ASPECT: f64 = 16.0 / 9.0;

fn text_block(
    title: &str,
    content: &str,
    bullets: &[String],
    ctx: &ContentContext<'_>,
) -> Element {
    let mut children = vec![
        Element::text(
            title,
            TextRole::Title,
            ctx.primary(TypeScale::H2, FontWeight::Black),
        ),
        Element::text(
            content,
            TextRole::Body,
            ctx.secondary(TypeScale::Body, FontWeight::Medium),
        ),
    ];
    children.extend(bullets.iter().map(|b| {
        Element::row(
            spacing::SM,
            vec![
                Element::text(
                    "\u{2022}",
                    TextRole::Glyph,
                    ctx.accent(TypeScale::Body, FontWeight::Bold),
                ),
                Element::text(b, TextRole::Body, ctx.primary(TypeScale::Body, FontWeight::Medium)),
            ],
        )
    }));
    Element::column(spacing::MD, children).aligned(Align::Start, Justify::Center)
}

pub(super) fn image(s: &ImageSlide, ctx: &ContentContext<'_>) -> Element {
    let mut children = vec![Element::Image {
        source: s.image_path.clone(),
        fit: ImageFit::Contain,
        position: None,
        aspect: None,
        width_fraction: s.image_size.width_fraction(),
    }];
    if let Some(caption) = &s.caption {
        children.push(Element::text(
            caption,
            TextRole::Caption,
            ctx.secondary(TypeScale::Body, FontWeight::Medium)
                .align(TextAlign::Center),
        ));
    }
    Element::column(spacing::MD, children).aligned(Align::Center, Justify::Center)
}

pub(super) fn static_image(s: &StaticImageSlide) -> Element {
    Element::Image {
        source: s.image_path.clone(),
        fit: s.fit,
        position: s.position.clone(),
        aspect: None,
        width_fraction: 1.0,
    }
}

pub(super) fn two_column(s: &TwoColumnSlide, ctx: &ContentContext<'_>) -> Element {
    let img = Element::Image {
        source: s.image_path.clone(),
        fit: ImageFit::Cover,
        position: None,
        aspect: Some(s.image_aspect_ratio.ratio()),
        width_fraction: COLUMN_IMAGE_FRACTION,
    };
    let text = text_block(&s.title, &s.content, &s.bullet_points, ctx);
    let children = match s.image_position {
        ColumnSide::Left => vec![img, text],
        ColumnSide::Right => vec![text, img],
    };
    Element::row(spacing::XXL, children)
}

pub(super) fn two_row(s: &TwoRowSlide, ctx: &ContentContext<'_>) -> Element {
    let img = Element::Image {
        source: s.image_path.clone(),
        fit: ImageFit::Cover,
        position: None,
        aspect: Some(ROW_IMAGE_ASPECT),
        width_fraction: 1.0,
    };
    let text = text_block(&s.title, &s.content, &s.bullet_points, ctx);
    let children = match s.image_position {
        RowSide::Top => vec![img, text],
        RowSide::Bottom => vec![text, img],
    };
    Element::column(spacing::XL, children).aligned(Align::Stretch, Justify::Start)
}
