use super::ContentContext;
use crate::{
    element::{Align, Element, Emphasis, Justify, TextRole},
    model::slide::{ComparisonSlide, QuestionSlide},
    theme::typography::{FontWeight, TypeScale, spacing},
};

/// Questions longer than this many characters step down one heading size.
pub const QUESTION_LONG_THRESHOLD: usize = 60;

const ARROW: &str = "\u{2192}";

/// Letter label for the `index`-th answer option: `A`..`Z`, then `AA`, `AB`, ...
pub fn option_label(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

fn side(
    label: &str,
    content: &str,
    emphasis: Emphasis,
    ctx: &ContentContext<'_>,
) -> Element {
    let label_style = match emphasis {
        Emphasis::Accent => ctx.accent(TypeScale::Small, FontWeight::Bold),
        Emphasis::Muted | Emphasis::Plain => ctx.secondary(TypeScale::Small, FontWeight::Bold),
    };
    Element::panel(
        emphasis,
        ctx.theme,
        vec![
            Element::text(label.to_uppercase(), TextRole::Label, label_style),
            Element::text(
                content,
                TextRole::Body,
                ctx.primary(TypeScale::H3, FontWeight::Semibold),
            ),
        ],
    )
}

pub(super) fn comparison(s: &ComparisonSlide, ctx: &ContentContext<'_>) -> Element {
    Element::row(
        spacing::LG,
        vec![
            side(&s.left_label, &s.left_content, Emphasis::Muted, ctx),
            Element::text(
                ARROW,
                TextRole::Glyph,
                ctx.accent(TypeScale::H1, FontWeight::Black),
            ),
            side(&s.right_label, &s.right_content, Emphasis::Accent, ctx),
        ],
    )
    .aligned(Align::Center, Justify::Center)
}

pub(super) fn question(s: &QuestionSlide, ctx: &ContentContext<'_>) -> Element {
    let align = ctx.align();
    let scale = if s.question.chars().count() > QUESTION_LONG_THRESHOLD {
        TypeScale::H2
    } else {
        TypeScale::H1
    };
    let mut children = vec![
        Element::text(
            "?",
            TextRole::Glyph,
            ctx.accent(TypeScale::Hero, FontWeight::Black).align(align),
        ),
        Element::text(
            &s.question,
            TextRole::Headline,
            ctx.primary(scale, FontWeight::Black).align(align),
        ),
    ];
    if !s.options.is_empty() {
        let options = s
            .options
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                Element::panel(
                    Emphasis::Plain,
                    ctx.theme,
                    vec![Element::text(
                        format!("{}. {opt}", option_label(i)),
                        TextRole::Body,
                        ctx.primary(TypeScale::Body, FontWeight::Semibold),
                    )],
                )
            })
            .collect();
        children.push(
            Element::column(spacing::SM, options).aligned(Align::Stretch, Justify::Start),
        );
    }
    if let Some(cta) = &s.call_to_action {
        children.push(Element::text(
            cta,
            TextRole::Caption,
            ctx.accent(TypeScale::Body, FontWeight::Semibold).align(align),
        ));
    }
    let cross = if ctx.centered() {
        Align::Center
    } else {
        Align::Start
    };
    Element::column(spacing::XL, children).aligned(cross, Justify::Center)
}
