pub mod hangman;
pub mod map_explorer;
pub mod math_quest;
pub mod spelling_bee;

pub use hangman::{Hangman, HangmanProgress, HangmanSession};
pub use map_explorer::{MapExplorer, MapProgress, MapSession};
pub use math_quest::{MathProgress, MathQuest, MathSession};
pub use spelling_bee::{SpellingBee, SpellingProgress, SpellingSession};
