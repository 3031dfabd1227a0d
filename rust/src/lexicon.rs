//! Static lexicon tables for synthetic slugs.

use crate::slug::SlugError;

/// Ordered string tables. Selection is always `table[byte % table.len()]`,
/// so the order of every table is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    pub consonants: &'static [&'static str],
    pub vowels: &'static [&'static str],
    pub codas: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub numbers: &'static [&'static str],
    pub words: &'static [&'static str],
    /// Substrings repaired out of finished slugs, checked in this order.
    pub blocked: &'static [&'static str],
}

const CONSONANTS: &[&str] = &[
    "b", "c", "d", "f", "g", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z",
];

const VOWELS: &[&str] = &["a", "a", "e", "e", "i", "i", "o", "o", "u"];

const CODAS: &[&str] = &["", "", "", "", "", "", "n", "m", "r", "x"];

const PREFIXES: &[&str] = &["get", "try", "go", "my", "pro", "on", "up", "hi"];

const SUFFIXES: &[&str] = &["ly", "fy", "io", "co", "go", "up", "hq", "ai"];

const NUMBERS: &[&str] = &[
    "1", "2", "3", "4", "5", "7", "8", "9", "11", "22", "24", "42", "99", "101", "123", "247",
    "360", "365",
];

const WORDS: &[&str] = &[
    "cloud", "data", "tech", "sync", "fast", "smart", "link", "soft", "core", "base", //
    "meta", "flux", "grid", "node", "edge", "wave", "pixel", "cyber", "logic", "delta", //
    "sigma", "alpha", "beta", "gamma", "nova", "nexus", "pulse", "spark", "beam", "volt", //
    "zero", "next", "snap", "dash", "rush", "bolt", "jump", "flip", "spin", "zoom", //
    "push", "pull", "grab", "drop", "lift", "kick", "click", "swipe", "pure", "bold", //
    "keen", "swift", "prime", "peak", "true", "safe", "bright", "clear", "clean", "fresh", //
    "sharp", "super", "ultra", "mega", "rock", "star", "moon", "sand", "leaf", "pine", //
    "oak", "wolf", "lake", "river", "wind", "fire", "ice", "snow", "rain", "sun", //
    "fox", "bear", "hawk", "crow", "elk", "owl", "lion", "tiger", "blue", "red", //
    "gray", "gold", "jade", "mint", "rust", "onyx", "amber", "coral", "ivory", "slate", //
    "steel", "silver", "copper", "box", "hub", "lab", "bit", "dot", "max", "zen", //
    "arc", "top", "pop", "cup", "cap", "pin", "pen", "pad", "pod",
];

const BLOCKED: &[&str] = &[
    "shit", "fuck", "damn", "hell", "crap", "piss", "cock", "dick", "cunt", "ass", "fag", "nig",
    "sex", "xxx", "porn", "anal", "rape", "kill", "nazi", "hate", "dead", "die", "hack", "crack",
];

static BUILTIN: Lexicon = Lexicon {
    consonants: CONSONANTS,
    vowels: VOWELS,
    codas: CODAS,
    prefixes: PREFIXES,
    suffixes: SUFFIXES,
    numbers: NUMBERS,
    words: WORDS,
    blocked: BLOCKED,
};

impl Lexicon {
    /// The built-in tables used by [`crate::derive`].
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    fn tables(&self) -> [(&'static str, &'static [&'static str]); 8] {
        [
            ("consonants", self.consonants),
            ("vowels", self.vowels),
            ("codas", self.codas),
            ("prefixes", self.prefixes),
            ("suffixes", self.suffixes),
            ("numbers", self.numbers),
            ("words", self.words),
            ("blocked", self.blocked),
        ]
    }

    /// Check that every selection table is non-empty and every entry is ASCII.
    ///
    /// The blocklist may be empty; the sanitizer then has nothing to repair.
    pub fn validate(&self) -> Result<(), SlugError> {
        for (name, table) in self.tables() {
            if table.is_empty() && name != "blocked" {
                return Err(SlugError::InvalidLexicon(format!("empty table: {name}")));
            }
            if let Some(entry) = table.iter().find(|e| !e.is_ascii()) {
                return Err(SlugError::InvalidLexicon(format!(
                    "non-ASCII entry {entry:?} in {name}"
                )));
            }
        }
        if self.blocked.iter().any(|b| b.is_empty()) {
            return Err(SlugError::InvalidLexicon(
                "empty entry in blocked".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        BUILTIN
    }
}
