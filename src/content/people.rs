use super::ContentContext;
use crate::{
    element::{Align, Element, Justify, TextAlign, TextRole},
    model::slide::{TeamSlide, ThankYouSlide},
    theme::typography::{FontWeight, TypeScale, spacing},
};

const MEMBER_BADGE_PX: f64 = 120.0;

pub(super) fn team(s: &TeamSlide, ctx: &ContentContext<'_>) -> Element {
    let center = TextAlign::Center;
    let members = s
        .members
        .iter()
        .map(|m| {
            Element::column(
                spacing::SM,
                vec![
                    Element::badge(&m.initials, MEMBER_BADGE_PX, ctx.theme.accent, ctx.theme.bg),
                    Element::text(
                        &m.name,
                        TextRole::Label,
                        ctx.primary(TypeScale::H3, FontWeight::Bold).align(center),
                    ),
                    Element::text(
                        &m.role,
                        TextRole::Caption,
                        ctx.secondary(TypeScale::Body, FontWeight::Medium).align(center),
                    ),
                ],
            )
            .aligned(Align::Center, Justify::Start)
        })
        .collect();

    Element::column(
        spacing::XXXL,
        vec![
            Element::text(
                s.title.as_deref().unwrap_or("Our Team"),
                TextRole::Title,
                ctx.primary(TypeScale::H1, FontWeight::Black).align(center),
            ),
            Element::row(spacing::XXL, members).aligned(Align::Start, Justify::Center),
        ],
    )
    .aligned(Align::Center, Justify::Center)
}

pub(super) fn thank_you(s: &ThankYouSlide, ctx: &ContentContext<'_>) -> Element {
    let center = TextAlign::Center;
    let mut children = vec![Element::text(
        s.headline.as_deref().unwrap_or("Thank You"),
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
    if !s.contact_info.is_empty() {
        children.push(
            Element::column(
                spacing::XS,
                s.contact_info
                    .iter()
                    .map(|c| {
                        Element::text(
                            c,
                            TextRole::Caption,
                            ctx.accent(TypeScale::Body, FontWeight::Semibold).align(center),
                        )
                    })
                    .collect(),
            )
            .aligned(Align::Center, Justify::Start),
        );
    }
    Element::column(spacing::XL, children).aligned(Align::Center, Justify::Center)
}
