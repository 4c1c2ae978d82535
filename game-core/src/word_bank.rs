use game_types::{Difficulty, GameError, RANDOM_CATEGORY};
use indexmap::IndexMap;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;

const BUILTIN_WORDS: &[(&str, [&str; 3])] = &[
    (
        "animals",
        [
            "dog cat fish bird frog duck cow pig fox wolf",
            "dolphin elephant penguin kangaroo leopard giraffe zebra monkey turtle rabbit",
            "platypus rhinoceros hippopotamus chameleon crocodile chimpanzee porcupine orangutan anaconda tarantula",
        ],
    ),
    (
        "countries",
        [
            "spain japan italy egypt india china peru chile cuba mali",
            "australia germany canada mexico brazil turkey russia sweden ireland morocco",
            "kazakhstan zimbabwe uruguay switzerland philippines madagascar mongolia nicaragua azerbaijan bangladesh",
        ],
    ),
    (
        "technology",
        [
            "mouse phone code game data wifi chip blog site byte",
            "keyboard internet software hardware database network website computer algorithm password",
            "cryptography blockchain javascript middleware kubernetes recursion virtualization microservice authentication algorithm",
        ],
    ),
    (
        "space",
        [
            "star moon mars sun sky earth space comet orbit venus",
            "galaxy jupiter neptune planet asteroid meteor saturn gravity cosmos telescope",
            "constellation supernova spacecraft atmosphere nebulosity satellite observatory interstellar gravitational astrophysics",
        ],
    ),
    (
        "food",
        [
            "cake rice fish meat milk corn egg soup taco pie",
            "chicken burger spaghetti sandwich chocolate pancake lasagna burrito waffle cupcake",
            "quesadilla croissant asparagus blueberry carbonara guacamole cheesecake stroganoff bruschetta frittata",
        ],
    ),
];

/// A secret word together with the category it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWord {
    pub category: String,
    pub word: String,
}

/// Category -> difficulty -> words. Categories keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    categories: IndexMap<String, HashMap<Difficulty, Vec<String>>>,
}

impl WordBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five stock categories with ten words per difficulty.
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for (category, tiers) in BUILTIN_WORDS {
            for (difficulty, words) in Difficulty::ALL.iter().zip(tiers) {
                let added = bank.add_words(category, *difficulty, words.split_whitespace());
                debug_assert!(added.is_ok(), "stock word list rejected: {added:?}");
            }
        }
        bank
    }

    /// Add words to a category tier, creating the category if needed.
    /// Words are trimmed and lowercased; anything non-alphabetic rejects
    /// the whole batch.
    pub fn add_words<'a>(
        &mut self,
        category: &str,
        difficulty: Difficulty,
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), GameError> {
        let category = category.trim().to_lowercase();
        if category.is_empty() || category == RANDOM_CATEGORY {
            return Err(GameError::UnknownCategory { category });
        }

        let mut normalized = Vec::new();
        for word in words {
            let word = word.trim().to_lowercase();
            if !Self::is_valid_word(&word) {
                return Err(GameError::InvalidWord { word });
            }
            normalized.push(word);
        }

        self.categories
            .entry(category)
            .or_default()
            .entry(difficulty)
            .or_default()
            .extend(normalized);
        Ok(())
    }

    /// A usable secret word: non-empty and ASCII alphabetic only.
    pub fn is_valid_word(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn has_category(&self, category: &str) -> bool {
        category == RANDOM_CATEGORY || self.categories.contains_key(category)
    }

    pub fn word_count(&self, category: &str, difficulty: Difficulty) -> usize {
        self.words(category, difficulty).map_or(0, <[String]>::len)
    }

    fn words(&self, category: &str, difficulty: Difficulty) -> Option<&[String]> {
        self.categories
            .get(category)
            .and_then(|tiers| tiers.get(&difficulty))
            .map(Vec::as_slice)
    }

    /// Pick a secret word. `"random"` first picks a category uniformly,
    /// then a word uniformly from that category's tier.
    pub fn select_word<R: Rng + ?Sized>(
        &self,
        category: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<SelectedWord, GameError> {
        let category = category.trim().to_lowercase();
        let resolved = if category == RANDOM_CATEGORY {
            let names: Vec<&String> = self.categories.keys().collect();
            names
                .choose(rng)
                .map(|name| (*name).clone())
                .ok_or_else(|| GameError::EmptyWordList {
                    category: category.clone(),
                    difficulty: difficulty.to_string(),
                })?
        } else if self.categories.contains_key(&category) {
            category
        } else {
            return Err(GameError::UnknownCategory { category });
        };

        let word = self
            .words(&resolved, difficulty)
            .and_then(|words| words.choose(rng))
            .cloned()
            .ok_or_else(|| GameError::EmptyWordList {
                category: resolved.clone(),
                difficulty: difficulty.to_string(),
            })?;

        Ok(SelectedWord {
            category: resolved,
            word,
        })
    }
}
