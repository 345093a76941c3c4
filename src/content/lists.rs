use super::ContentContext;
use crate::{
    element::{Align, Element, Emphasis, Justify, TextRole},
    model::{
        options::TimelineOrientation,
        slide::{AgendaSlide, HeavyListSlide, KeyTakeawaySlide, ListSlide, TimelineSlide},
    },
    theme::typography::{FontWeight, TypeScale, spacing},
};

/// Item count at which heavy lists switch to denser item text.
pub const DENSE_LIST_THRESHOLD: usize = 6;

const CHECKMARK: &str = "\u{2713}";
const BULLET: &str = "\u{2022}";
const ARROW: &str = "\u{2192}";

fn marker(use_checkmarks: bool) -> &'static str {
    if use_checkmarks { CHECKMARK } else { BULLET }
}

fn items(
    entries: &[String],
    use_checkmarks: bool,
    scale: TypeScale,
    gap: f64,
    ctx: &ContentContext<'_>,
) -> Element {
    let rows = entries
        .iter()
        .map(|item| {
            Element::row(
                spacing::SM,
                vec![
                    Element::text(
                        marker(use_checkmarks),
                        TextRole::Glyph,
                        ctx.accent(scale, FontWeight::Bold),
                    ),
                    Element::text(item, TextRole::Body, ctx.primary(scale, FontWeight::Medium)),
                ],
            )
        })
        .collect();
    Element::column(gap, rows)
}

pub(super) fn list(s: &ListSlide, ctx: &ContentContext<'_>) -> Element {
    let cross = if ctx.centered() {
        Align::Center
    } else {
        Align::Start
    };
    Element::column(
        spacing::XXL,
        vec![
            Element::text(
                &s.title,
                TextRole::Title,
                ctx.primary(TypeScale::H1, FontWeight::Black).align(ctx.align()),
            ),
            items(&s.items, s.use_checkmarks, TypeScale::H3, spacing::LG, ctx),
        ],
    )
    .aligned(cross, Justify::Center)
}

pub(super) fn heavy_list(s: &HeavyListSlide, ctx: &ContentContext<'_>) -> Element {
    let (scale, gap) = if s.items.len() >= DENSE_LIST_THRESHOLD {
        (TypeScale::Body, spacing::SM)
    } else {
        (TypeScale::H3, spacing::MD)
    };
    Element::column(
        spacing::LG,
        vec![
            Element::text(
                &s.title,
                TextRole::Title,
                ctx.primary(TypeScale::H2, FontWeight::Black),
            ),
            Element::text(
                &s.description,
                TextRole::Body,
                ctx.secondary(TypeScale::Body, FontWeight::Medium),
            ),
            items(&s.items, s.use_checkmarks, scale, gap, ctx),
        ],
    )
    .aligned(Align::Start, Justify::Center)
}

fn step_badge(n: usize, ctx: &ContentContext<'_>) -> Element {
    Element::badge(n.to_string(), 64.0, ctx.theme.accent, ctx.theme.bg)
}

pub(super) fn timeline(s: &TimelineSlide, ctx: &ContentContext<'_>) -> Element {
    let mut children = Vec::new();
    if let Some(title) = &s.title {
        children.push(Element::text(
            title,
            TextRole::Title,
            ctx.primary(TypeScale::H1, FontWeight::Black).align(ctx.align()),
        ));
    }

    let steps = match s.orientation {
        TimelineOrientation::Vertical => Element::column(
            spacing::LG,
            s.steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    Element::row(
                        spacing::MD,
                        vec![
                            step_badge(i + 1, ctx),
                            Element::column(
                                spacing::XS,
                                vec![
                                    Element::text(
                                        &step.label,
                                        TextRole::Label,
                                        ctx.primary(TypeScale::H3, FontWeight::Bold),
                                    ),
                                    Element::text(
                                        &step.description,
                                        TextRole::Body,
                                        ctx.secondary(TypeScale::Body, FontWeight::Medium),
                                    ),
                                ],
                            ),
                        ],
                    )
                })
                .collect(),
        ),
        TimelineOrientation::Horizontal => {
            let mut nodes = Vec::with_capacity(s.steps.len() * 2);
            for (i, step) in s.steps.iter().enumerate() {
                if i > 0 {
                    nodes.push(Element::text(
                        ARROW,
                        TextRole::Glyph,
                        ctx.accent(TypeScale::H2, FontWeight::Bold),
                    ));
                }
                nodes.push(
                    Element::column(
                        spacing::XS,
                        vec![
                            step_badge(i + 1, ctx),
                            Element::text(
                                &step.label,
                                TextRole::Label,
                                ctx.primary(TypeScale::Body, FontWeight::Bold),
                            ),
                            Element::text(
                                &step.description,
                                TextRole::Caption,
                                ctx.secondary(TypeScale::Small, FontWeight::Medium),
                            ),
                        ],
                    )
                    .aligned(Align::Center, Justify::Start),
                );
            }
            Element::row(spacing::MD, nodes).aligned(Align::Start, Justify::Center)
        }
    };
    children.push(steps);

    let cross = if ctx.centered() {
        Align::Center
    } else {
        Align::Start
    };
    Element::column(spacing::XXL, children).aligned(cross, Justify::Center)
}

pub(super) fn agenda(s: &AgendaSlide, ctx: &ContentContext<'_>) -> Element {
    let rows = s
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut cells = vec![Element::row(
                spacing::MD,
                vec![
                    Element::text(
                        format!("{:02}", i + 1),
                        TextRole::Number,
                        ctx.accent(TypeScale::H3, FontWeight::Black),
                    ),
                    Element::text(
                        &item.title,
                        TextRole::Body,
                        ctx.primary(TypeScale::H3, FontWeight::Semibold),
                    ),
                ],
            )];
            if let Some(d) = &item.duration {
                cells.push(Element::text(
                    d,
                    TextRole::Caption,
                    ctx.secondary(TypeScale::Small, FontWeight::Medium),
                ));
            }
            Element::row(spacing::MD, cells).aligned(Align::Center, Justify::SpaceBetween)
        })
        .collect();

    Element::column(
        spacing::XXL,
        vec![
            Element::text(
                s.title.as_deref().unwrap_or("Agenda"),
                TextRole::Title,
                ctx.primary(TypeScale::H1, FontWeight::Black),
            ),
            Element::column(spacing::MD, rows).aligned(Align::Stretch, Justify::Start),
        ],
    )
    .aligned(Align::Stretch, Justify::Center)
}

pub(super) fn key_takeaway(s: &KeyTakeawaySlide, ctx: &ContentContext<'_>) -> Element {
    let cards = s
        .takeaways
        .iter()
        .map(|t| {
            Element::panel(
                Emphasis::Plain,
                ctx.theme,
                vec![Element::row(
                    spacing::MD,
                    vec![
                        Element::text(
                            CHECKMARK,
                            TextRole::Glyph,
                            ctx.accent(TypeScale::H3, FontWeight::Bold),
                        ),
                        Element::text(
                            t,
                            TextRole::Body,
                            ctx.primary(TypeScale::Body, FontWeight::Medium),
                        ),
                    ],
                )],
            )
        })
        .collect();

    Element::column(
        spacing::XL,
        vec![
            Element::text(
                s.title.as_deref().unwrap_or("Key Takeaways"),
                TextRole::Title,
                ctx.primary(TypeScale::H1, FontWeight::Black),
            ),
            Element::column(spacing::MD, cards).aligned(Align::Stretch, Justify::Start),
        ],
    )
    .aligned(Align::Stretch, Justify::Center)
}
