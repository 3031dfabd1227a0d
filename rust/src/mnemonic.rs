//! Checksummed mnemonic word encoding.
//!
//! 256 entropy bits followed by the first 8 bits of `SHA-256(entropy)` form a
//! 264-bit stream, read as 24 MSB-first 11-bit word indices.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::entropy::{ENTROPY_LEN, Entropy};
use crate::slug::SlugError;

/// Entries required in a mnemonic word list.
pub const WORDLIST_LEN: usize = 2048;
/// Words encoded from one entropy value.
pub const MAX_WORDS: usize = 24;

const BITS_PER_WORD: usize = 11;

static ENGLISH: Lazy<Wordlist> = Lazy::new(|| Wordlist {
    words: bip39::Language::English
        .word_list()
        .iter()
        .map(|w| w.to_string())
        .collect(),
});

/// Validated list of exactly 2048 unique words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn new<I, S>(words: I) -> Result<Self, SlugError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(SlugError::WordlistSize(words.len()));
        }
        let mut seen = HashSet::with_capacity(WORDLIST_LEN);
        for word in &words {
            if !seen.insert(word.as_str()) {
                return Err(SlugError::DuplicateWord(word.clone()));
            }
        }
        Ok(Self { words })
    }

    /// Parse a newline-separated list, ignoring surrounding whitespace.
    pub fn from_text(text: &str) -> Result<Self, SlugError> {
        Self::new(text.trim().lines().map(str::trim))
    }

    /// Standard English BIP-39 list.
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    pub fn get(&self, index: u16) -> &str {
        &self.words[usize::from(index) % WORDLIST_LEN]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Checksum byte: the first byte of `SHA-256(entropy)`.
pub fn checksum(entropy: &Entropy) -> u8 {
    Sha256::digest(entropy.as_bytes())[0]
}

/// The 24 word indices for `entropy`, each in `0..2048`.
pub fn word_indices(entropy: &Entropy) -> [u16; MAX_WORDS] {
    let mut stream = [0u8; ENTROPY_LEN + 1];
    stream[..ENTROPY_LEN].copy_from_slice(entropy.as_bytes());
    stream[ENTROPY_LEN] = checksum(entropy);

    let mut indices = [0u16; MAX_WORDS];
    for (i, slot) in indices.iter_mut().enumerate() {
        let start = i * BITS_PER_WORD;
        *slot = (start..start + BITS_PER_WORD).fold(0u16, |acc, bit| {
            let set = (stream[bit / 8] >> (7 - bit % 8)) & 1;
            (acc << 1) | u16::from(set)
        });
    }
    indices
}

/// First `min(count, 24)` words for `entropy`.
pub fn encode<'w>(entropy: &Entropy, wordlist: &'w Wordlist, count: usize) -> Vec<&'w str> {
    word_indices(entropy)
        .iter()
        .take(count.min(MAX_WORDS))
        .map(|&i| wordlist.get(i))
        .collect()
}

/// Hex of the leading `ceil(words * 11 / 8)` entropy bytes, capped at the
/// entropy length.
pub fn companion_hex(entropy: &Entropy, count: usize) -> String {
    let words = count.min(MAX_WORDS);
    let len = (words * BITS_PER_WORD).div_ceil(8).min(ENTROPY_LEN);
    hex::encode(&entropy.as_bytes()[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(entropy: [u8; ENTROPY_LEN]) -> String {
        encode(&Entropy::from_bytes(entropy), Wordlist::english(), MAX_WORDS).join(" ")
    }

    #[test]
    fn test_english_list_loaded() {
        let list = Wordlist::english();
        assert_eq!(list.len(), WORDLIST_LEN);
        assert_eq!(list.get(0), "abandon");
        assert_eq!(list.get(2047), "zoo");
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(
            phrase([0x00; 32]),
            format!("{}art", "abandon ".repeat(23))
        );
        assert_eq!(phrase([0xff; 32]), format!("{}vote", "zoo ".repeat(23)));
        assert_eq!(
            phrase([0x7f; 32]),
            "legal winner thank year wave sausage worth useful legal winner thank year \
             wave sausage worth useful legal winner thank year wave sausage worth title"
        );
        assert_eq!(
            phrase([0x80; 32]),
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage \
             absurd amount doctor acoustic avoid letter advice cage absurd amount doctor \
             acoustic bless"
        );
    }

    #[test]
    fn test_matches_bip39_crate() {
        for period in ["2026-01-01", "2026-02-03", "2026-12-31"] {
            let e = Entropy::derive("seed", period);
            let expected = bip39::Mnemonic::from_entropy(e.as_bytes())
                .unwrap()
                .to_string();
            assert_eq!(phrase(*e.as_bytes()), expected);
        }
    }

    #[test]
    fn test_checksum_bits_feed_last_index() {
        let e = Entropy::derive("seedphrase", "2026-02-03");
        let sum = checksum(&e);
        assert_eq!(sum, Sha256::digest(e.as_bytes())[0]);
        assert_eq!(sum, 0xf8);

        // The last index is the low 3 bits of the final entropy byte then the checksum.
        let last = e.as_bytes()[ENTROPY_LEN - 1];
        let expected = (u16::from(last & 0x07) << 8) | u16::from(sum);
        assert_eq!(word_indices(&e)[MAX_WORDS - 1], expected);
    }

    #[test]
    fn test_encode_clamps_count() {
        let e = Entropy::derive("seedphrase", "2026-02-03");
        let list = Wordlist::english();
        assert_eq!(encode(&e, list, 3), ["exotic", "angry", "answer"]);
        assert_eq!(encode(&e, list, 1).len(), 1);
        assert_eq!(encode(&e, list, 24).len(), 24);
        assert_eq!(encode(&e, list, 100).len(), 24);
        assert!(encode(&e, list, 24).iter().all(|w| list.contains(w)));
    }

    #[test]
    fn test_companion_hex_lengths() {
        let e = Entropy::derive("seedphrase", "2026-02-03");
        assert_eq!(companion_hex(&e, 3), "50011c26d0");
        assert_eq!(companion_hex(&e, 5), "50011c26d0a864");
        assert_eq!(companion_hex(&e, 1).len(), 4);
        assert_eq!(companion_hex(&e, 24), e.to_hex());
        assert_eq!(companion_hex(&e, 99), e.to_hex());
    }

    #[test]
    fn test_wordlist_validation() {
        assert!(matches!(
            Wordlist::new(["a", "b"]),
            Err(SlugError::WordlistSize(2))
        ));

        let mut words: Vec<String> = (0..WORDLIST_LEN).map(|i| format!("w{i}")).collect();
        assert!(Wordlist::new(words.clone()).is_ok());
        words[7] = "w3".to_string();
        assert!(matches!(
            Wordlist::new(words),
            Err(SlugError::DuplicateWord(w)) if w == "w3"
        ));
    }

    #[test]
    fn test_wordlist_from_text() {
        let text: String = (0..WORDLIST_LEN).map(|i| format!("word{i}\n")).collect();
        let list = Wordlist::from_text(&format!("\n{text}\n\n")).unwrap();
        assert_eq!(list.get(5), "word5");
        assert!(Wordlist::from_text("one\ntwo\n").is_err());
    }
}
