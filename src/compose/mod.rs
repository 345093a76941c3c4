//! Batch composition of assembled decks.
//!
//! Slides are composed independently of one another, so a deck can be laid out
//! sequentially or fanned out over a rayon pool with identical results.

pub(crate) mod fingerprint;
pub(crate) mod pipeline;
