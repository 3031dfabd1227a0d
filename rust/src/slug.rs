//! Slug derivation for a `(seed, period)` pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::{ENTROPY_LEN, Entropy, derive_companion};
use crate::mnemonic::{self, Wordlist};
use crate::sanitize::Sanitizer;
use crate::synth::SynthBuilder;

/// Companion bytes are capped at this length in synthetic mode.
const SYNTH_COMPANION_MAX: usize = 16;

/// Errors that can occur while configuring a derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("Mnemonic mode requires a word list")]
    MissingWordlist,
    #[error("Word list must have exactly 2048 entries, got {0}")]
    WordlistSize(usize),
    #[error("Word list contains duplicate entry: {0}")]
    DuplicateWord(String),
    #[error("Invalid length: must be > 0")]
    InvalidLength,
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
    #[error("Invalid anchor time: {0}")]
    InvalidAnchor(String),
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),
    #[error("Window of {0} periods runs out of the supported time range")]
    InvalidWindow(usize),
}

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Concatenated checksummed dictionary words.
    Mnemonic,
    /// Pronounceable layered slug.
    Synthetic,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mnemonic => "mnemonic",
            Self::Synthetic => "synthetic",
        }
    }

    /// Case-insensitive; accepts `bip39` and `obfuscated` as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mnemonic" | "bip39" => Some(Self::Mnemonic),
            "synthetic" | "obfuscated" => Some(Self::Synthetic),
            _ => None,
        }
    }
}

impl FromStr for Mode {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SlugError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slug and its lowercase-hex companion hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSlug {
    pub slug: String,
    pub hash: String,
}

/// Build a sanitized synthetic slug from entropy.
pub fn synthesize(entropy: &Entropy) -> String {
    let raw = SynthBuilder::new(entropy).build();
    Sanitizer::new(entropy).sanitize(&raw)
}

fn synthetic_companion(seed: &str, period: &str, length: usize) -> String {
    let companion = derive_companion(seed, period);
    let len = length.div_ceil(2).min(SYNTH_COMPANION_MAX).min(ENTROPY_LEN);
    hex::encode(&companion[..len])
}

/// Derive the slug for `seed` and `period`.
///
/// `length` is the word count in mnemonic mode (clamped to 24) and only sizes
/// the companion hash in synthetic mode. `wordlist` is required for
/// mnemonic mode.
pub fn derive(
    seed: &str,
    period: &str,
    length: usize,
    mode: Mode,
    wordlist: Option<&Wordlist>,
) -> Result<DerivedSlug, SlugError> {
    if length == 0 {
        return Err(SlugError::InvalidLength);
    }
    tracing::debug!(%mode, period, length, "deriving slug");

    let entropy = Entropy::derive(seed, period);
    match mode {
        Mode::Mnemonic => {
            let wordlist = wordlist.ok_or(SlugError::MissingWordlist)?;
            Ok(DerivedSlug {
                slug: mnemonic::encode(&entropy, wordlist, length).concat(),
                hash: mnemonic::companion_hex(&entropy, length),
            })
        }
        Mode::Synthetic => Ok(DerivedSlug {
            slug: synthesize(&entropy),
            hash: synthetic_companion(seed, period, length),
        }),
    }
}
