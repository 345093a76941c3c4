use crate::{
    assemble::{Deck, SlideLimits, check_index},
    foundation::error::{SlideError, SlideResult},
    layout::{
        ComposedSlide, SlideFrame,
        diagonal::{DiagonalChrome, compose_diagonal},
    },
    model::{deck::PresentationConfig, options::DecorationVariant, slide::Format},
};

/// Validate a presentation against explicit slide-count bounds.
///
/// Checks run in a fixed order and stop at the first failure: format tag,
/// required identity fields, then slide count.
pub fn validate_presentation(config: &PresentationConfig, limits: SlideLimits) -> SlideResult<()> {
    if config.format != Format::Presentation.as_str() {
        return Err(SlideError::validation(format!(
            "config format must be \"presentation\" (found \"{}\")",
            config.format
        )));
    }
    for (field, value) in [
        ("id", &config.id),
        ("brandName", &config.brand_name),
        ("website", &config.website),
    ] {
        if value.trim().is_empty() {
            return Err(SlideError::validation(format!(
                "presentation {field} must be non-empty"
            )));
        }
    }
    limits.check(Format::Presentation, config.slides.len())
}

impl PresentationConfig {
    fn chrome(&self) -> DiagonalChrome<'_> {
        DiagonalChrome {
            theme: self.resolved_theme(),
            profile_initials: self.initials(),
            decorations: DecorationVariant::default(),
        }
    }
}

impl Deck for PresentationConfig {
    fn deck_id(&self) -> &str {
        &self.id
    }

    fn format(&self) -> Format {
        Format::Presentation
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn validate(&self) -> SlideResult<()> {
        validate_presentation(self, SlideLimits::PRESENTATION)
    }

    #[tracing::instrument(skip(self), fields(deck = %self.id))]
    fn compose_slide(&self, index: usize) -> SlideResult<ComposedSlide> {
        check_index(self, index)?;
        let frame = SlideFrame::new(&self.id, index, self.slides.len());
        Ok(compose_diagonal(
            &self.slides[index],
            index,
            &self.chrome(),
            frame,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/presentation.rs"]
mod tests;
