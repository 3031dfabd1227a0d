//! Async convenience API built on top of the sync core.

use crate::{DerivedSlug, Interval, Mode, PeriodSlug, SlugError, Wordlist, derive, generate};

/// Derive one slug in async contexts.
pub async fn async_derive(
    seed: &str,
    period: &str,
    length: usize,
    mode: Mode,
    wordlist: Option<&Wordlist>,
) -> Result<DerivedSlug, SlugError> {
    derive(seed, period, length, mode, wordlist)
}

/// Generate a window of period slugs in async contexts.
pub async fn async_generate(
    seed: &str,
    anchor: &str,
    length: usize,
    window: usize,
    interval: Interval,
    mode: Mode,
    wordlist: Option<&Wordlist>,
) -> Result<Vec<PeriodSlug>, SlugError> {
    generate(seed, anchor, length, window, interval, mode, wordlist)
}
