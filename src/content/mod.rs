//! Content dispatcher: one slide payload in, one content element tree out.
//!
//! Dispatch is total. Unknown tags, and variants used outside the format they
//! belong to, resolve to [`Element::Placeholder`] so a single bad slide never aborts
//! a batch. The dispatcher itself is pure; callers decide how to report placeholders.

mod compare;
mod lists;
mod media;
mod people;
mod text;

use crate::{
    element::{Element, TextAlign, TextStyle},
    model::slide::{Format, SlideContent},
    theme::{
        palette::ThemeConfig,
        typography::{FontWeight, TypeScale},
    },
};

pub use compare::{QUESTION_LONG_THRESHOLD, option_label};
pub use lists::DENSE_LIST_THRESHOLD;

/// Everything a per-variant layout may read besides its own payload.
#[derive(Clone, Copy, Debug)]
pub struct ContentContext<'a> {
    pub theme: &'a ThemeConfig,
    /// Already defaulted initials for avatar badges.
    pub profile_initials: &'a str,
    pub format: Format,
}

impl<'a> ContentContext<'a> {
    pub fn new(theme: &'a ThemeConfig, profile_initials: &'a str, format: Format) -> Self {
        Self {
            theme,
            profile_initials,
            format,
        }
    }

    /// Presentation layouts center hook, quote, list, question and timeline content.
    fn centered(&self) -> bool {
        self.format == Format::Presentation
    }

    fn align(&self) -> TextAlign {
        if self.centered() {
            TextAlign::Center
        } else {
            TextAlign::Left
        }
    }

    fn primary(&self, scale: TypeScale, weight: FontWeight) -> TextStyle {
        TextStyle::new(scale, weight, self.theme.text)
    }

    fn secondary(&self, scale: TypeScale, weight: FontWeight) -> TextStyle {
        TextStyle::new(scale, weight, self.theme.text_secondary)
    }

    fn accent(&self, scale: TypeScale, weight: FontWeight) -> TextStyle {
        TextStyle::new(scale, weight, self.theme.accent)
    }
}

/// Resolve `content` to the element tree of its layout.
pub fn render_content(content: &SlideContent, ctx: &ContentContext<'_>) -> Element {
    let Some(kind) = content.kind() else {
        return Element::placeholder(content.type_name());
    };
    if !kind.supports(ctx.format) {
        return Element::placeholder(kind.as_str());
    }

    match content {
        SlideContent::Hook(s) => text::hook(s, ctx),
        SlideContent::Tip(s) => text::tip(s, ctx),
        SlideContent::Insight(s) => text::insight(s, ctx),
        SlideContent::Cta(s) => text::cta(s, ctx),
        SlideContent::Quote(s) => text::quote(s, ctx),
        SlideContent::Stat(s) => text::stat(s, ctx),
        SlideContent::List(s) => lists::list(s, ctx),
        SlideContent::HeavyList(s) => lists::heavy_list(s, ctx),
        SlideContent::Timeline(s) => lists::timeline(s, ctx),
        SlideContent::Agenda(s) => lists::agenda(s, ctx),
        SlideContent::KeyTakeaway(s) => lists::key_takeaway(s, ctx),
        SlideContent::Comparison(s) => compare::comparison(s, ctx),
        SlideContent::Question(s) => compare::question(s, ctx),
        SlideContent::Image(s) => media::image(s, ctx),
        SlideContent::StaticImage(s) => media::static_image(s),
        SlideContent::TwoColumn(s) => media::two_column(s, ctx),
        SlideContent::TwoRow(s) => media::two_row(s, ctx),
        SlideContent::Team(s) => people::team(s, ctx),
        SlideContent::ThankYou(s) => people::thank_you(s, ctx),
        SlideContent::Unknown(u) => Element::placeholder(u.type_name.clone()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/mod.rs"]
mod tests;
