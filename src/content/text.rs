use super::ContentContext;
use crate::{
    element::{Align, Element, Emphasis, Justify, TextAlign, TextRole, TextStyle},
    foundation::core::Edges,
    model::slide::{CtaSlide, HookSlide, InsightSlide, QuoteSlide, StatSlide, TipSlide},
    theme::typography::{FontWeight, TypeScale, spacing},
};

const OPEN_QUOTE: &str = "\u{201C}";
const STAT_FIGURE_PX: f64 = 160.0;

fn cross_align(ctx: &ContentContext<'_>) -> Align {
    if ctx.centered() {
        Align::Center
    } else {
        Align::Start
    }
}

pub(super) fn hook(s: &HookSlide, ctx: &ContentContext<'_>) -> Element {
    let align = ctx.align();
    let mut children = vec![
        Element::text(
            &s.headline_top,
            TextRole::Headline,
            ctx.primary(TypeScale::Hero, FontWeight::Black).align(align),
        ),
        Element::Panel {
            emphasis: Emphasis::Accent,
            fill: ctx.theme.accent,
            border: None,
            padding: Edges::symmetric(12.0, 32.0),
            children: vec![Element::text(
                &s.headline_highlight,
                TextRole::Highlight,
                TextStyle::new(TypeScale::Hero, FontWeight::Black, ctx.theme.bg)
                    .align(align),
            )],
        },
    ];
    if s.show_stats
        && let (Some(value), Some(label)) = (&s.stat_value, &s.stat_label)
    {
        children.push(Element::row(
            spacing::SM,
            vec![
                Element::text(
                    value,
                    TextRole::Number,
                    ctx.accent(TypeScale::H1, FontWeight::Black),
                ),
                Element::text(
                    label,
                    TextRole::Label,
                    ctx.secondary(TypeScale::Body, FontWeight::Medium),
                ),
            ],
        ));
    }
    Element::column(spacing::XL, children).aligned(cross_align(ctx), Justify::Center)
}

pub(super) fn tip(s: &TipSlide, ctx: &ContentContext<'_>) -> Element {
    let mut children = Vec::new();
    if s.show_quotes {
        children.push(Element::text(
            OPEN_QUOTE,
            TextRole::Glyph,
            ctx.accent(TypeScale::Hero, FontWeight::Bold),
        ));
    }
    if let Some(n) = &s.number {
        children.push(Element::text(
            n,
            TextRole::Number,
            ctx.accent(TypeScale::Hero, FontWeight::Extrabold),
        ));
    }
    children.push(Element::text(
        &s.title,
        TextRole::Title,
        ctx.primary(TypeScale::H1, FontWeight::Black),
    ));
    if let Some(d) = &s.description {
        children.push(Element::text(
            d,
            TextRole::Body,
            ctx.secondary(TypeScale::Body, FontWeight::Medium),
        ));
    }
    Element::column(spacing::LG, children).aligned(Align::Start, Justify::Center)
}

pub(super) fn insight(s: &InsightSlide, ctx: &ContentContext<'_>) -> Element {
    let mut card = vec![
        Element::badge(ctx.profile_initials, 80.0, ctx.theme.overlay, ctx.theme.accent),
        Element::text(
            s.title.to_uppercase(),
            TextRole::Label,
            ctx.accent(TypeScale::Small, FontWeight::Bold),
        ),
        Element::text(
            &s.content,
            TextRole::Body,
            ctx.primary(TypeScale::Body, FontWeight::Medium),
        ),
    ];
    if let Some(h) = &s.highlight {
        card.push(Element::text(
            h,
            TextRole::Highlight,
            ctx.accent(TypeScale::Body, FontWeight::Semibold),
        ));
    }
    Element::column(0.0, vec![Element::panel(Emphasis::Plain, ctx.theme, card)])
        .aligned(Align::Center, Justify::Center)
}

pub(super) fn cta(s: &CtaSlide, ctx: &ContentContext<'_>) -> Element {
    let center = TextAlign::Center;
    let mut children = vec![Element::text(
        &s.headline,
        TextRole::Headline,
        ctx.primary(TypeScale::Hero, FontWeight::Black).align(center),
    )];
    if let Some(sub) = &s.subheadline {
        children.push(Element::text(
            sub,
            TextRole::Body,
            ctx.secondary(TypeScale::H3, FontWeight::Medium).align(center),
        ));
    }
    children.push(Element::panel(
        Emphasis::Accent,
        ctx.theme,
        vec![Element::text(
            &s.action,
            TextRole::Label,
            ctx.accent(TypeScale::H3, FontWeight::Bold).align(center),
        )],
    ));
    Element::column(spacing::XL, children).aligned(Align::Center, Justify::Center)
}

pub(super) fn quote(s: &QuoteSlide, ctx: &ContentContext<'_>) -> Element {
    let align = ctx.align();
    let mut children = vec![
        Element::text(
            OPEN_QUOTE,
            TextRole::Glyph,
            ctx.accent(TypeScale::Hero, FontWeight::Bold).align(align),
        ),
        Element::text(
            &s.quote,
            TextRole::Quote,
            ctx.primary(TypeScale::H2, FontWeight::Semibold)
                .align(align)
                .italic(),
        ),
        Element::text(
            &s.author,
            TextRole::Label,
            ctx.accent(TypeScale::Body, FontWeight::Bold).align(align),
        ),
    ];
    if let Some(role) = &s.role {
        children.push(Element::text(
            role,
            TextRole::Caption,
            ctx.secondary(TypeScale::Small, FontWeight::Medium).align(align),
        ));
    }
    Element::column(spacing::MD, children).aligned(cross_align(ctx), Justify::Center)
}

pub(super) fn stat(s: &StatSlide, ctx: &ContentContext<'_>) -> Element {
    let center = TextAlign::Center;
    let mut figure = ctx.accent(TypeScale::Hero, FontWeight::Black).align(center);
    figure.size_px = STAT_FIGURE_PX;
    let mut children = vec![
        Element::text(&s.stat, TextRole::Number, figure),
        Element::text(
            &s.label,
            TextRole::Title,
            ctx.primary(TypeScale::H2, FontWeight::Bold).align(center),
        ),
    ];
    if let Some(c) = &s.context {
        children.push(Element::text(
            c,
            TextRole::Body,
            ctx.secondary(TypeScale::Body, FontWeight::Medium).align(center),
        ));
    }
    if let Some(src) = &s.source {
        children.push(Element::text(
            src,
            TextRole::Caption,
            ctx.secondary(TypeScale::Small, FontWeight::Medium)
                .align(center)
                .italic(),
        ));
    }
    Element::column(spacing::LG, children).aligned(Align::Center, Justify::Center)
}
