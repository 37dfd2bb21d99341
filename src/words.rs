//! Static category/word dictionary, bucketed by difficulty.

use crate::difficulty::Difficulty;

/// One dictionary entry: the target word and its hint.
pub type Unit = (&'static str, &'static str);

/// Valid category names, in prompt order.
pub const CATEGORIES: [&str; 3] = ["animals", "fruits", "countries"];

const ANIMALS_EASY: &[Unit] = &[
    ("cat", "meow meow"),
    ("dog", "bark bark"),
    ("cow", "gives milk"),
    ("fox", "red forest trickster"),
];

const ANIMALS_MEDIUM: &[Unit] = &[
    ("rabbit", "long ears, loves carrots"),
    ("donkey", "stubborn beast of burden"),
    ("badger", "striped burrow digger"),
    ("turtle", "carries its house along"),
];

const ANIMALS_HARD: &[Unit] = &[
    ("chimpanzee", "our closest relative"),
    ("rhinoceros", "horn on the nose"),
    ("salamander", "amphibian said to survive fire"),
    ("porcupine", "covered in quills"),
];

const FRUITS_EASY: &[Unit] = &[
    ("fig", "often dried, often in rolls"),
    ("plum", "purple stone fruit"),
    ("pear", "bell-shaped orchard fruit"),
    ("lime", "small green citrus"),
];

const FRUITS_MEDIUM: &[Unit] = &[
    ("banana", "yellow and curved"),
    ("cherry", "small, red, paired stems"),
    ("orange", "named after its color"),
    ("papaya", "tropical, orange flesh"),
];

const FRUITS_HARD: &[Unit] = &[
    ("pomegranate", "hundreds of ruby seeds"),
    ("dragonfruit", "pink scales, white flesh"),
    ("blackcurrant", "tart dark berry"),
    ("clementine", "seedless little citrus"),
];

const COUNTRIES_EASY: &[Unit] = &[
    ("peru", "home of Machu Picchu"),
    ("cuba", "Caribbean island of cigars"),
    ("chad", "named after a lake"),
    ("mali", "Timbuktu is here"),
];

const COUNTRIES_MEDIUM: &[Unit] = &[
    ("norway", "land of the fjords"),
    ("brazil", "largest in South America"),
    ("canada", "maple leaf flag"),
    ("turkey", "spans two continents"),
];

const COUNTRIES_HARD: &[Unit] = &[
    ("kazakhstan", "largest landlocked country"),
    ("madagascar", "island of lemurs"),
    ("switzerland", "alps, banks and chocolate"),
    ("mozambique", "its flag carries a rifle"),
];

/// Looks up the word/hint bucket for a (category, difficulty) pair.
///
/// Every valid category has a non-empty bucket per difficulty; an unknown
/// category yields an empty slice and is the caller's job to avoid (see
/// [`Settings::resolve`](crate::Settings::resolve)).
pub fn units_for(category: &str, difficulty: Difficulty) -> &'static [Unit] {
    match (category, difficulty) {
        ("animals", Difficulty::Easy) => ANIMALS_EASY,
        ("animals", Difficulty::Medium) => ANIMALS_MEDIUM,
        ("animals", Difficulty::Hard) => ANIMALS_HARD,
        ("fruits", Difficulty::Easy) => FRUITS_EASY,
        ("fruits", Difficulty::Medium) => FRUITS_MEDIUM,
        ("fruits", Difficulty::Hard) => FRUITS_HARD,
        ("countries", Difficulty::Easy) => COUNTRIES_EASY,
        ("countries", Difficulty::Medium) => COUNTRIES_MEDIUM,
        ("countries", Difficulty::Hard) => COUNTRIES_HARD,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::{CATEGORIES, units_for};
    use crate::difficulty::Difficulty;
    use strum::IntoEnumIterator;

    #[test]
    fn every_bucket_is_populated() {
        for category in CATEGORIES {
            for difficulty in Difficulty::iter() {
                let units = units_for(category, difficulty);
                assert!(
                    !units.is_empty(),
                    "empty bucket for {category}/{difficulty}"
                );
            }
        }
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for category in CATEGORIES {
            for difficulty in Difficulty::iter() {
                for (word, _) in units_for(category, difficulty) {
                    assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
                }
            }
        }
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(units_for("animal", Difficulty::Easy).is_empty());
    }
}
