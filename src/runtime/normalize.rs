use clap::ValueEnum;
use std::fmt::{self, Display};

/// Canonical form used as the aggregation key. Folding is ASCII-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CaseFold {
    /// First character uppercased, the rest lowercased.
    #[default]
    Capitalize,
    /// Every character lowercased.
    Lower,
}

impl CaseFold {
    pub fn fold(&self, token: &str) -> String {
        let mut word = token.to_ascii_lowercase();
        if let CaseFold::Capitalize = self {
            if let Some(first) = word.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
        }
        word
    }
}

impl Display for CaseFold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseFold::Capitalize => write!(f, "capitalize"),
            CaseFold::Lower => write!(f, "lower"),
        }
    }
}

/// Decides which single-character tokens count as words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum WordFilter {
    /// Reject every single-byte token.
    #[default]
    SingleChar,
    /// Reject single-byte tokens unless they are a vowel.
    Vowels,
    /// Accept every token.
    None,
}

impl WordFilter {
    /// "Single character" means a single byte, so a lone multi-byte
    /// character such as `é` is always a word.
    pub fn accepts(&self, word: &str) -> bool {
        let only = match word.as_bytes() {
            [] => return false,
            [b] => *b,
            _ => return true,
        };

        match self {
            WordFilter::SingleChar => false,
            WordFilter::Vowels => matches!(only.to_ascii_uppercase(), b'A' | b'E' | b'I' | b'O' | b'U'),
            WordFilter::None => true,
        }
    }
}

impl Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordFilter::SingleChar => write!(f, "single-char"),
            WordFilter::Vowels => write!(f, "vowels"),
            WordFilter::None => write!(f, "none"),
        }
    }
}
