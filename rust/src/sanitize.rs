//! Post-construction cleanup of synthetic slugs.
//!
//! Order: blocklist repair, truncation to [`MAX_LEN`], triple-letter
//! collapse. All steps assume ASCII input.

use crate::entropy::{Cursor, Entropy};
use crate::lexicon::Lexicon;
use crate::slug::SlugError;
use crate::synth::{MAX_LEN, MIN_LEN, SynthBuilder};

/// Upper bound on blocklist repair passes.
pub const MAX_REPAIR_PASSES: usize = 10;

/// Repair pass `i` reads its syllable from this offset plus `i`.
const REPAIR_OFFSET: usize = 25;

/// Outcome of [`Sanitizer::repair_blocked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub slug: String,
    /// Syllables spliced in.
    pub passes: usize,
    /// Whether any blocked substring remains.
    pub blocked: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Sanitizer<'a> {
    builder: SynthBuilder<'a>,
}

impl<'a> Sanitizer<'a> {
    pub fn new(entropy: &'a Entropy) -> Self {
        Self {
            builder: SynthBuilder::new(entropy),
        }
    }

    /// Sanitizer over a custom lexicon; fails on an invalid one.
    pub fn with_lexicon(entropy: &'a Entropy, lexicon: &'a Lexicon) -> Result<Self, SlugError> {
        Ok(Self {
            builder: SynthBuilder::with_lexicon(entropy, lexicon)?,
        })
    }

    /// First blocked entry, in blocklist order, found in `slug` (case-insensitive),
    /// with its byte position.
    pub fn find_blocked(&self, slug: &str) -> Option<(&'static str, usize)> {
        let lower = slug.to_ascii_lowercase();
        self.builder
            .lexicon()
            .blocked
            .iter()
            .find_map(|b| lower.find(b).map(|pos| (*b, pos)))
    }

    /// Splice a syllable into the middle of each blocked hit, at most
    /// [`MAX_REPAIR_PASSES`] times. Exhausting the passes is not an error;
    /// the partially repaired slug is returned with `blocked` set.
    pub fn repair_blocked(&self, slug: &str) -> Repair {
        let mut slug = slug.to_string();
        let mut passes = 0;
        while passes < MAX_REPAIR_PASSES {
            let Some((word, pos)) = self.find_blocked(&slug) else {
                break;
            };
            let split = pos + word.len() / 2;
            let (syl, _) = self.builder.syllable(Cursor::at(REPAIR_OFFSET + passes));
            slug.insert_str(split, &syl);
            passes += 1;
        }
        let blocked = self.find_blocked(&slug).is_some();
        if blocked {
            tracing::debug!(passes, "blocked substring survived repair");
        }
        Repair {
            slug,
            passes,
            blocked,
        }
    }

    /// Cut to at most [`MAX_LEN`], preferring the longest prefix of at least
    /// [`MIN_LEN`] that ends in a vowel.
    pub fn truncate(slug: &str) -> String {
        if slug.len() <= MAX_LEN {
            return slug.to_string();
        }
        let bytes = slug.as_bytes();
        let cut = (MIN_LEN..=MAX_LEN)
            .rev()
            .find(|&end| matches!(bytes[end - 1], b'a' | b'e' | b'i' | b'o' | b'u'))
            .unwrap_or(MAX_LEN);
        slug[..cut].to_string()
    }

    /// Collapse runs of three or more identical characters to two.
    pub fn collapse_triples(slug: &str) -> String {
        let mut out = String::with_capacity(slug.len());
        for c in slug.chars() {
            let mut tail = out.chars().rev();
            if tail.next() == Some(c) && tail.next() == Some(c) {
                continue;
            }
            out.push(c);
        }
        out
    }

    pub fn sanitize(&self, slug: &str) -> String {
        let repaired = self.repair_blocked(slug);
        Self::collapse_triples(&Self::truncate(&repaired.slug))
    }
}
