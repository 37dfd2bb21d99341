//! Round settings: category, difficulty and the chosen hidden word.

use crate::difficulty::Difficulty;
use crate::word::HiddenWord;
use crate::words;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use tracing::debug;

/// Immutable triple fixed for one round.
///
/// Either supplied explicitly via [`Settings::new`] (fixed scenarios,
/// tests) or derived from possibly-absent player input via
/// [`Settings::resolve`].
#[derive(Debug, Clone, Getters, new)]
pub struct Settings {
    /// Selected dictionary category.
    category: String,
    /// Selected difficulty bucket.
    difficulty: Difficulty,
    /// The word being guessed this round.
    word: HiddenWord,
}

impl Settings {
    /// Wrong guesses allowed before the round is lost.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Derives settings from raw player input.
    ///
    /// An absent or invalid category falls back to a uniform-random valid
    /// one; the difficulty text goes through [`Difficulty::of`] and so
    /// degrades to easy; the word is drawn uniformly from the resulting
    /// dictionary bucket.
    pub fn resolve<R: Rng>(category: Option<&str>, difficulty_text: &str, rng: &mut R) -> Self {
        let category = category
            .filter(|name| words::CATEGORIES.contains(name))
            .map(str::to_owned)
            .unwrap_or_else(|| Self::random_category(rng).to_owned());
        let difficulty = Difficulty::of(difficulty_text);
        let word = Self::random_word(&category, difficulty, rng);
        debug!(%category, %difficulty, "settings resolved");
        Self::new(category, difficulty, word)
    }

    /// Draws a uniform-random word from the (category, difficulty) bucket.
    ///
    /// # Panics
    ///
    /// Panics if the bucket is empty, i.e. the category is not one of
    /// [`CATEGORIES`](crate::CATEGORIES).
    pub fn random_word<R: Rng>(category: &str, difficulty: Difficulty, rng: &mut R) -> HiddenWord {
        let units = words::units_for(category, difficulty);
        let (word, hint) = units[rng.gen_range(0..units.len())];
        HiddenWord::new(word, hint)
    }

    /// Picks a uniform-random valid category.
    pub fn random_category<R: Rng>(rng: &mut R) -> &'static str {
        words::CATEGORIES[rng.gen_range(0..words::CATEGORIES.len())]
    }

    /// Mutable access to the hidden word, for applying guesses.
    pub fn word_mut(&mut self) -> &mut HiddenWord {
        &mut self.word
    }
}
