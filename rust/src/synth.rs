//! Pronounceable synthetic slug construction.
//!
//! Layout: `[prefix] word1 [middle] word2 ending`, padded to
//! [`MIN_LEN`] with syllables. Each layer takes the shared [`Cursor`] and
//! returns it advanced by exactly the bytes it read, whether or not its
//! optional branch fired.

use crate::entropy::{Cursor, Entropy};
use crate::lexicon::Lexicon;
use crate::slug::SlugError;

/// Padding target. Triple collapse runs after padding, so a finished
/// slug can come out shorter than this.
pub const MIN_LEN: usize = 10;
/// Longest synthetic slug.
pub const MAX_LEN: usize = 18;

/// Padding syllables always start reading here.
const PAD_START: Cursor = Cursor::at(20);
const SECOND_WORD_ATTEMPTS: usize = 5;

/// Startup-style shortening: `tiger` → `tigr`, `purple` → `purpl`,
/// `delta` → `delt`.
pub fn shorten(word: &str) -> String {
    let bytes = word.as_bytes();
    let n = bytes.len();
    if n < 4 {
        return word.to_string();
    }
    if matches!(bytes[n - 2], b'a' | b'e' | b'o') && bytes[n - 1] == b'r' {
        return format!("{}r", &word[..n - 2]);
    }
    if word.ends_with("le") && n > 3 {
        return word[..n - 1].to_string();
    }
    if matches!(bytes[n - 1], b'a' | b'e' | b'i' | b'o' | b'u') && n > 4 {
        return word[..n - 1].to_string();
    }
    word.to_string()
}

/// Reads entropy through a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct SynthBuilder<'a> {
    entropy: &'a Entropy,
    lexicon: &'a Lexicon,
}

impl<'a> SynthBuilder<'a> {
    /// Builder over the built-in lexicon.
    pub fn new(entropy: &'a Entropy) -> Self {
        Self {
            entropy,
            lexicon: Lexicon::builtin(),
        }
    }

    /// Builder over a custom lexicon, rejected unless it passes
    /// [`Lexicon::validate`].
    pub fn with_lexicon(entropy: &'a Entropy, lexicon: &'a Lexicon) -> Result<Self, SlugError> {
        lexicon.validate()?;
        Ok(Self { entropy, lexicon })
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[inline]
    fn byte(&self, at: Cursor) -> u8 {
        self.entropy.byte_at(at)
    }

    /// `table[byte % len]`, consuming one byte.
    pub fn pick(&self, table: &'static [&'static str], at: Cursor) -> (&'static str, Cursor) {
        let index = usize::from(self.byte(at)) % table.len();
        (table[index], at.advance())
    }

    /// Consonant, vowel, coda: three picks.
    pub fn syllable(&self, at: Cursor) -> (String, Cursor) {
        let (c, at) = self.pick(self.lexicon.consonants, at);
        let (v, at) = self.pick(self.lexicon.vowels, at);
        let (d, at) = self.pick(self.lexicon.codas, at);
        (format!("{c}{v}{d}"), at)
    }

    /// ~25%: one test byte, plus one pick when taken.
    pub fn prefix_layer(&self, at: Cursor) -> (Option<&'static str>, Cursor) {
        if self.byte(at) % 4 == 0 {
            let (prefix, at) = self.pick(self.lexicon.prefixes, at.advance());
            (Some(prefix), at)
        } else {
            (None, at.advance())
        }
    }

    /// Word pick, then a ~20% shortening test byte.
    fn word_layer(&self, word: &str, at: Cursor) -> (String, Cursor) {
        let word = if self.byte(at) % 5 == 0 {
            shorten(word)
        } else {
            word.to_string()
        };
        (word, at.advance())
    }

    pub fn first_word_layer(&self, at: Cursor) -> (String, Cursor) {
        let (word, at) = self.pick(self.lexicon.words, at);
        self.word_layer(word, at)
    }

    /// ~28.6%: the test byte also decides between a syllable (even) and a
    /// hyphen (odd). A syllable is read from the byte after the test.
    pub fn middle_layer(&self, at: Cursor) -> (Option<String>, Cursor) {
        let test = self.byte(at);
        if test % 7 >= 2 {
            return (None, at.advance());
        }
        if test % 2 == 0 {
            let (syl, at) = self.syllable(at.advance());
            (Some(syl), at)
        } else {
            (Some("-".to_string()), at.advance())
        }
    }

    /// Resamples until the candidate differs from `first` (as appended),
    /// keeping the last attempt if all collide.
    pub fn second_word_layer(&self, first: &str, at: Cursor) -> (String, Cursor) {
        let mut at = at;
        let mut word = "";
        for _ in 0..SECOND_WORD_ATTEMPTS {
            let (candidate, next) = self.pick(self.lexicon.words, at);
            word = candidate;
            at = next;
            if word != first {
                break;
            }
        }
        self.word_layer(word, at)
    }

    /// Reads one selector byte. Its picks run on a local offset starting
    /// after the selector and are not returned to the caller.
    pub fn ending_layer(&self, at: Cursor) -> (String, Cursor) {
        let local = at.advance();
        let ending = match self.byte(at) % 8 {
            0..=2 => self.syllable(local).0,
            3 | 4 => self.pick(self.lexicon.numbers, local).0.to_string(),
            5 | 6 => {
                let (first, next) = self.syllable(local);
                let (second, _) = self.syllable(next);
                first + &second
            }
            _ => self.pick(self.lexicon.suffixes, local).0.to_string(),
        };
        (ending, at.advance())
    }

    /// Append syllables read from byte 20 onward until `MIN_LEN` is reached.
    pub fn pad(&self, mut slug: String) -> String {
        let mut at = PAD_START;
        while slug.len() < MIN_LEN {
            let (syl, next) = self.syllable(at);
            slug.push_str(&syl);
            at = next;
        }
        slug
    }

    /// Assemble all layers and pad. The result is not yet sanitized.
    pub fn build(&self) -> String {
        let mut slug = String::with_capacity(2 * MAX_LEN);
        let at = Cursor::START;

        let (prefix, at) = self.prefix_layer(at);
        if let Some(prefix) = prefix {
            slug.push_str(prefix);
        }

        let (first, at) = self.first_word_layer(at);
        slug.push_str(&first);

        let (middle, at) = self.middle_layer(at);
        if let Some(middle) = middle {
            slug.push_str(&middle);
        }

        let (second, at) = self.second_word_layer(&first, at);
        slug.push_str(&second);

        let (ending, at) = self.ending_layer(at);
        slug.push_str(&ending);

        tracing::trace!(cursor = at.position(), raw = %slug, "synthetic layers assembled");
        self.pad(slug)
    }
}
