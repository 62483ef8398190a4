use super::{ContentProvider, sample_pool};
use game_types::{Difficulty, GameError, GameKind, HangmanWord, WordCategory};
use rand::Rng;

const ANIMALS: &[&str] = &[
    // 2-5 letters
    "cat", "dog", "fish", "bird", "frog", "bear", "lion", "duck", "pig", "cow", "ant", "bat",
    "bee", "owl", "fox",
    // 6-7 letters
    "rabbit", "turtle", "monkey", "parrot", "kitten", "puppy", "giraffe", "dolphin", "penguin",
    "hamster", "chicken", "rooster",
    // 8+ letters
    "elephant", "butterfly", "alligator", "crocodile", "hippopotamus", "kangaroo", "chimpanzee",
    "dragonfly", "jellyfish", "porcupine",
];

const FOOD: &[&str] = &[
    "apple", "pizza", "cake", "milk", "egg", "rice", "pie", "jam", "corn", "pea", "taco", "soup",
    "meat", "bean",
    "cookie", "banana", "orange", "cheese", "carrot", "muffin", "waffle", "noodle", "potato",
    "tomato", "cherry", "grapes",
    "sandwich", "broccoli", "spaghetti", "hamburger", "pineapple", "chocolate", "strawberry",
    "watermelon", "blueberry", "pancakes",
];

const SCHOOL: &[&str] = &[
    "book", "desk", "pen", "art", "bus", "map", "bell", "gym", "test", "read", "math", "play",
    "work", "draw",
    "pencil", "eraser", "crayon", "folder", "locker", "lesson", "friend", "recess", "school",
    "paper", "ruler", "marker",
    "teacher", "backpack", "classroom", "homework", "computer", "notebook", "lunchroom",
    "principal", "chalkboard", "scissors",
];

const NATURE: &[&str] = &[
    "tree", "sun", "rain", "lake", "rock", "leaf", "moon", "star", "hill", "pond", "wind", "snow",
    "sand", "dirt",
    "flower", "forest", "garden", "island", "river", "sunset", "desert", "meadow", "nature",
    "branch", "clouds", "stream",
    "rainbow", "mountain", "waterfall", "butterfly", "lightning", "snowflake", "sunflower",
    "hurricane", "avalanche", "earthquake",
];

/// Hangman words grouped by category and banded by length per difficulty
pub struct WordBank {
    words: Vec<HangmanWord>,
}

impl WordBank {
    pub fn new(words: Vec<HangmanWord>) -> Self {
        let words = words
            .into_iter()
            .filter(|entry| !entry.word.trim().is_empty())
            .map(|entry| HangmanWord {
                word: entry.word.trim().to_uppercase(),
                category: entry.category,
            })
            .collect();
        Self { words }
    }

    /// The built-in list of kid-friendly words
    pub fn builtin() -> Self {
        let lists = [
            (WordCategory::Animals, ANIMALS),
            (WordCategory::Food, FOOD),
            (WordCategory::School, SCHOOL),
            (WordCategory::Nature, NATURE),
        ];
        let words = lists
            .iter()
            .flat_map(|(category, list)| {
                list.iter().map(move |word| HangmanWord {
                    word: word.to_string(),
                    category: *category,
                })
            })
            .collect();
        Self::new(words)
    }

    /// Inclusive letter-count band for a difficulty
    pub fn length_band(difficulty: Difficulty) -> (usize, usize) {
        match difficulty {
            Difficulty::Easy => (2, 5),
            Difficulty::Medium => (6, 7),
            Difficulty::Hard => (8, 100),
        }
    }

    pub fn words_for(&self, difficulty: Difficulty) -> Vec<HangmanWord> {
        let (min, max) = Self::length_band(difficulty);
        self.words
            .iter()
            .filter(|entry| {
                let len = entry.word.chars().count();
                len >= min && len <= max
            })
            .cloned()
            .collect()
    }

    pub fn word_count(&self, difficulty: Difficulty) -> usize {
        self.words_for(difficulty).len()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentProvider for WordBank {
    type Target = HangmanWord;

    fn game(&self) -> GameKind {
        GameKind::Hangman
    }

    fn draw_set<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<HangmanWord>, GameError> {
        sample_pool(GameKind::Hangman, difficulty, &self.words_for(difficulty), count, rng)
    }
}
