// Swipe assessment: fifteen yes/no cards, one answer per card, then results from the
// backend or the local fallback scorer.

pub mod handlers;
pub mod questions;
pub mod scoring;
pub mod swipe;
