//! timeslug: deterministic, time-rotating slugs derived from a secret seed.
//!
//! Each `(seed, period)` pair keys an HMAC-SHA256 that yields 32 bytes of
//! entropy. The entropy is rendered in one of two modes:
//!
//! - **mnemonic**: concatenated checksummed BIP-39 style words
//!   (`exoticangryanswer`), with a hex prefix of the entropy as companion hash.
//! - **synthetic**: a pronounceable, startup-style slug (`trybeambold8`)
//!   padded to 10 and capped at 18 characters, with an independently keyed
//!   companion hash.
//!
//! # Example
//!
//! ```
//! use timeslug::{Mode, derive};
//!
//! let d = derive("seedphrase", "2026-02-03", 16, Mode::Synthetic, None).unwrap();
//! assert_eq!(d.slug, "trybeambold8");
//! assert_eq!(d.hash, "5d3bf0d55db67ea2");
//! ```

mod async_api;
mod entropy;
mod lexicon;
mod mnemonic;
mod sanitize;
mod slug;
mod synth;
mod window;

pub use async_api::{async_derive, async_generate};
pub use entropy::{Cursor, ENTROPY_LEN, Entropy, derive_companion};
pub use lexicon::Lexicon;
pub use mnemonic::{MAX_WORDS, WORDLIST_LEN, Wordlist};
pub use sanitize::{MAX_REPAIR_PASSES, Repair, Sanitizer};
pub use slug::{DerivedSlug, Mode, SlugError, derive, synthesize};
pub use synth::{MAX_LEN, MIN_LEN, SynthBuilder, shorten};
pub use window::{Interval, PeriodSlug, generate, parse_anchor};

/// Mnemonic encoding primitives.
pub mod words {
    pub use crate::mnemonic::{checksum, companion_hex, encode, word_indices};
}
