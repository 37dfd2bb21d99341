//! Word difficulty buckets and tolerant free-text parsing.

use strum::{Display, EnumIter};

/// Difficulty bucket of the dictionary, by word length and obscurity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Short, common words.
    #[default]
    Easy,
    /// Mid-length words.
    Medium,
    /// Long or obscure words.
    Hard,
}

impl Difficulty {
    /// Maps free text to a difficulty, tolerating case, surrounding
    /// whitespace and qualifiers ("Very Hard" parses as `Hard`).
    ///
    /// Unrecognized text degrades to [`Difficulty::Easy`] rather than
    /// failing; malformed input is never an error here.
    pub fn of(text: &str) -> Self {
        let text = text.trim().to_ascii_lowercase();
        if text.contains("hard") {
            Difficulty::Hard
        } else if text.contains("medium") {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}
