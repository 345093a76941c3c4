use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    assemble::{Deck, RenderUnit, assemble},
    compose::fingerprint::fingerprint_slide,
    foundation::error::{SlideError, SlideResult},
    layout::ComposedSlide,
    model::slide::Format,
};

#[derive(Clone, Debug, Default)]
pub struct ComposeOptions {
    pub parallel: bool,
    /// Worker count for the parallel path. `None` lets rayon decide.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ComposeStats {
    pub slides_total: u64,
    /// Distinct layouts by [`crate::LayoutFingerprint`].
    pub unique_layouts: u64,
    pub placeholders: u64,
    pub warnings: u64,
}

/// A fully composed deck, slides in deck order.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComposedDeck {
    pub id: String,
    pub format: Format,
    pub slides: Vec<ComposedSlide>,
    pub stats: ComposeStats,
}

/// Validate, assemble and compose every slide of `deck`.
#[tracing::instrument(skip(deck, opts), fields(deck = deck.deck_id(), parallel = opts.parallel))]
pub fn compose_deck<D: Deck + ?Sized>(
    deck: &D,
    opts: &ComposeOptions,
) -> SlideResult<ComposedDeck> {
    let units = assemble(deck)?;
    let (slides, stats) = compose_units(&units, opts)?;
    tracing::debug!(
        slides = stats.slides_total,
        unique = stats.unique_layouts,
        warnings = stats.warnings,
        "composed deck"
    );
    Ok(ComposedDeck {
        id: deck.deck_id().to_owned(),
        format: deck.format(),
        slides,
        stats,
    })
}

/// Compose assembled units, preserving their order in the output.
pub fn compose_units<D: Deck + ?Sized>(
    units: &[RenderUnit<'_, D>],
    opts: &ComposeOptions,
) -> SlideResult<(Vec<ComposedSlide>, ComposeStats)> {
    let slides = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            units
                .par_iter()
                .map(RenderUnit::compose)
                .collect::<SlideResult<Vec<_>>>()
        })?
    } else {
        units
            .iter()
            .map(RenderUnit::compose)
            .collect::<SlideResult<Vec<_>>>()?
    };

    let stats = collect_stats(&slides)?;
    Ok((slides, stats))
}

fn collect_stats(slides: &[ComposedSlide]) -> SlideResult<ComposeStats> {
    let mut stats = ComposeStats {
        slides_total: slides.len() as u64,
        ..ComposeStats::default()
    };
    let mut seen = HashSet::with_capacity(slides.len());
    for slide in slides {
        if seen.insert(fingerprint_slide(slide)?) {
            stats.unique_layouts += 1;
        }
        if slide.has_placeholder() {
            stats.placeholders += 1;
        }
        stats.warnings += slide.warnings.len() as u64;
    }
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> SlideResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SlideError::validation(
            "compose options 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SlideError::composition(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;
