pub(crate) mod deck;
pub(crate) mod options;
pub(crate) mod slide;
