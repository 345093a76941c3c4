use crate::{
    assemble::{Deck, SlideLimits, check_index},
    foundation::error::SlideResult,
    layout::{
        ComposedSlide, SlideFrame,
        card::{CardChrome, compose_card},
    },
    model::{deck::CarouselConfig, slide::Format},
};

/// Validate a carousel against explicit slide-count bounds.
pub fn validate_carousel(config: &CarouselConfig, limits: SlideLimits) -> SlideResult<()> {
    limits.check(Format::Carousel, config.slides.len())
}

impl CarouselConfig {
    fn chrome(&self, index: usize) -> CardChrome<'_> {
        let numbered = self.show_slide_numbers;
        CardChrome {
            theme: self.resolved_theme(),
            brand_name: &self.brand_name,
            tagline: self.tagline.as_deref(),
            website: &self.website,
            profile_initials: self.initials(),
            profile_image: self.profile_image.as_deref(),
            slide_number: numbered.then_some(index + 1),
            total_slides: numbered.then_some(self.slides.len()),
        }
    }
}

impl Deck for CarouselConfig {
    fn deck_id(&self) -> &str {
        &self.id
    }

    fn format(&self) -> Format {
        Format::Carousel
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn validate(&self) -> SlideResult<()> {
        validate_carousel(self, SlideLimits::CAROUSEL)
    }

    #[tracing::instrument(skip(self), fields(deck = %self.id))]
    fn compose_slide(&self, index: usize) -> SlideResult<ComposedSlide> {
        check_index(self, index)?;
        let frame = SlideFrame::new(&self.id, index, self.slides.len());
        Ok(compose_card(&self.slides[index], &self.chrome(index), frame))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/carousel.rs"]
mod tests;
