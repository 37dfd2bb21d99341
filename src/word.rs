//! The hidden word and its per-position reveal mask.

/// Placeholder shown for positions the player has not revealed yet.
pub const MASK: char = '_';

/// A target word with a hint and a mutable reveal mask.
///
/// A position is revealed iff its character has been successfully guessed;
/// the word reports guessed exactly when every position is revealed.
/// Created once per round and discarded when the round ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenWord {
    word: Vec<char>,
    hint: String,
    revealed: Vec<bool>,
}

impl HiddenWord {
    /// Creates a hidden word, normalizing the target to lowercase.
    pub fn new(word: impl AsRef<str>, hint: impl Into<String>) -> Self {
        let word: Vec<char> = word
            .as_ref()
            .chars()
            .flat_map(char::to_lowercase)
            .collect();
        let revealed = vec![false; word.len()];
        Self {
            word,
            hint: hint.into(),
            revealed,
        }
    }

    /// Marks every occurrence of the (case-normalized) character as
    /// revealed. Returns whether the character occurs in the word at all.
    ///
    /// Re-guessing an already-revealed letter still counts as correct; the
    /// reveal is idempotent.
    pub fn guess(&mut self, ch: char) -> bool {
        let mut hit = false;
        for ch in ch.to_lowercase() {
            for (pos, &wch) in self.word.iter().enumerate() {
                if wch == ch {
                    self.revealed[pos] = true;
                    hit = true;
                }
            }
        }
        hit
    }

    /// True iff every position is revealed.
    pub fn is_guessed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// The word with unrevealed positions masked by [`MASK`].
    pub fn masked(&self) -> String {
        self.word
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &r)| if r { ch } else { MASK })
            .collect()
    }

    /// The hint text attached to the word.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// The full target word, for terminal-state reveals.
    pub fn answer(&self) -> String {
        self.word.iter().collect()
    }
}
