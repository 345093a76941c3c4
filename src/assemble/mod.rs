//! Deck validation and expansion into per-slide render units.
//!
//! Assembly is fail-fast: a malformed deck is rejected before any slide is
//! composed. Once a deck validates, composing any single index never fails on
//! slide content.

pub(crate) mod carousel;
pub(crate) mod presentation;

use crate::{
    foundation::error::{SlideError, SlideResult},
    layout::{ComposedSlide, still_id},
    model::{deck::DeckConfig, slide::Format},
};

/// Inclusive slide-count bounds for one deck kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideLimits {
    pub min: usize,
    pub max: usize,
}

impl SlideLimits {
    pub const CAROUSEL: SlideLimits = SlideLimits { min: 2, max: 20 };
    pub const PRESENTATION: SlideLimits = SlideLimits { min: 2, max: 50 };

    pub fn contains(self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Reject `count` outside the bounds, naming the deck kind in the message.
    pub fn check(self, format: Format, count: usize) -> SlideResult<()> {
        if self.min > self.max {
            return Err(SlideError::validation(format!(
                "slide limits are empty ({}-{})",
                self.min, self.max
            )));
        }
        if !self.contains(count) {
            return Err(SlideError::validation(format!(
                "{} must have {}-{} slides (found {count})",
                format.as_str(),
                self.min,
                self.max
            )));
        }
        Ok(())
    }
}

/// A validated-on-demand deck that can compose any of its slides independently.
///
/// Implementations hold no mutable state, so one deck may be shared across
/// worker threads composing different indices.
pub trait Deck: Sync {
    fn deck_id(&self) -> &str;

    fn format(&self) -> Format;

    fn slide_count(&self) -> usize;

    /// Batch-level checks. Errors are [`SlideError::Validation`].
    fn validate(&self) -> SlideResult<()>;

    /// Compose the slide at 0-based `index`.
    ///
    /// Errors only when `index` is out of range.
    fn compose_slide(&self, index: usize) -> SlideResult<ComposedSlide>;
}

pub(crate) fn check_index(deck: &(impl Deck + ?Sized), index: usize) -> SlideResult<()> {
    if index >= deck.slide_count() {
        return Err(SlideError::composition(format!(
            "slide index {index} out of range for '{}' ({} slides)",
            deck.deck_id(),
            deck.slide_count()
        )));
    }
    Ok(())
}

/// One independently composable slide of a deck.
#[derive(Debug)]
pub struct RenderUnit<'a, D: ?Sized> {
    pub deck: &'a D,
    /// 0-based slide index.
    pub index: usize,
}

impl<D: ?Sized> Clone for RenderUnit<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for RenderUnit<'_, D> {}

impl<D: Deck + ?Sized> RenderUnit<'_, D> {
    /// 1-based.
    pub fn slide_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_slides(&self) -> usize {
        self.deck.slide_count()
    }

    pub fn still_id(&self) -> String {
        still_id(self.deck.deck_id(), self.index)
    }

    pub fn compose(&self) -> SlideResult<ComposedSlide> {
        self.deck.compose_slide(self.index)
    }
}

/// Validate `deck` and expand it into one render unit per slide, in slide order.
#[tracing::instrument(skip(deck), fields(deck = deck.deck_id(), format = deck.format().as_str()))]
pub fn assemble<D: Deck + ?Sized>(deck: &D) -> SlideResult<Vec<RenderUnit<'_, D>>> {
    deck.validate()?;
    let units: Vec<_> = (0..deck.slide_count())
        .map(|index| RenderUnit { deck, index })
        .collect();
    tracing::debug!(units = units.len(), "assembled deck");
    Ok(units)
}

impl Deck for DeckConfig {
    fn deck_id(&self) -> &str {
        self.id()
    }

    fn format(&self) -> Format {
        DeckConfig::format(self)
    }

    fn slide_count(&self) -> usize {
        self.slides().len()
    }

    fn validate(&self) -> SlideResult<()> {
        match self {
            DeckConfig::Carousel(c) => c.validate(),
            DeckConfig::Presentation(p) => p.validate(),
        }
    }

    fn compose_slide(&self, index: usize) -> SlideResult<ComposedSlide> {
        match self {
            DeckConfig::Carousel(c) => c.compose_slide(index),
            DeckConfig::Presentation(p) => p.compose_slide(index),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/mod.rs"]
mod tests;
