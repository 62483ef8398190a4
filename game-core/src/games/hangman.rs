use crate::game_state::{Judgement, RoundRules, Session};
use game_types::{Difficulty, GameKind, HangmanWord};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct Hangman;

pub type HangmanSession = Session<Hangman>;

#[derive(Debug, Clone, Default)]
pub struct HangmanProgress {
    /// Every letter the player has tried
    pub guessed: BTreeSet<char>,
    /// Letters showing in the word, including a free hint letter
    pub revealed: BTreeSet<char>,
    /// The letter given away up front on medium
    pub hint_letter: Option<char>,
    pub solved: Option<String>,
}

impl RoundRules for Hangman {
    type Target = HangmanWord;
    type Guess = char;
    type Progress = HangmanProgress;
    type Hint = char;

    const GAME: GameKind = GameKind::Hangman;

    fn judge(target: &HangmanWord, guess: &char, progress: &mut HangmanProgress) -> Judgement {
        let letter = guess.to_ascii_uppercase();
        if !progress.guessed.insert(letter) {
            return Judgement::Repeat;
        }

        if !target.word.contains(letter) {
            return Judgement::Miss;
        }

        progress.revealed.insert(letter);
        let completes_target = target.word.chars().all(|c| progress.revealed.contains(&c));
        if completes_target {
            progress.solved = Some(target.word.clone());
        }
        Judgement::Hit { completes_target }
    }

    fn start_target(target: &HangmanWord, difficulty: Difficulty, progress: &mut HangmanProgress) {
        if difficulty != Difficulty::Medium {
            return;
        }
        if let Some(first) = target.word.chars().next() {
            progress.hint_letter = Some(first);
            progress.revealed.insert(first);
        }
    }

    /// First letter of the word still hidden
    fn hint(target: &HangmanWord, progress: &HangmanProgress) -> char {
        target
            .word
            .chars()
            .find(|c| !progress.revealed.contains(c))
            .unwrap_or('_')
    }

    fn solution(target: &HangmanWord) -> String {
        target.word.clone()
    }

    fn mastered(progress: &HangmanProgress) -> Vec<String> {
        progress.solved.iter().cloned().collect()
    }
}

impl Session<Hangman> {
    pub fn word(&self) -> Option<&HangmanWord> {
        self.targets().first()
    }

    /// The word as shown to the player, `_` for letters not found yet
    pub fn display_word(&self) -> Vec<char> {
        let revealed = &self.progress().revealed;
        self.word()
            .map(|w| {
                w.word
                    .chars()
                    .map(|c| if revealed.contains(&c) { c } else { '_' })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn category_display(&self) -> &'static str {
        self.word()
            .map(|w| w.category.display_name())
            .unwrap_or_default()
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.state.wrong_count
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.state.lives
    }

    pub fn guess_percentage(&self) -> u32 {
        self.state.lives * 100 / self.state.max_lives.max(1)
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.progress().guessed.contains(&letter.to_ascii_uppercase())
    }

    pub fn is_hint_letter(&self, letter: char) -> bool {
        self.progress().hint_letter == Some(letter.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use game_types::{GameStatus, WordCategory};

    fn session(word: &str, difficulty: Difficulty) -> HangmanSession {
        Session::new(
            GameConfig::hangman(),
            difficulty,
            vec![HangmanWord {
                word: word.to_string(),
                category: WordCategory::Animals,
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_guessing_every_letter_wins() {
        let game = session("CAT", Difficulty::Easy);
        let (game, outcome) = game.submit(&'c');
        assert!(outcome.correct);
        assert!(!outcome.target_completed);
        let (game, _) = game.submit(&'a');
        let (game, outcome) = game.submit(&'t');

        assert!(outcome.target_completed);
        assert_eq!(game.state.status, GameStatus::Won);
        assert_eq!(game.display_word(), vec!['C', 'A', 'T']);
        assert_eq!(game.summary().unwrap().mastered, vec!["CAT".to_string()]);
    }

    #[test]
    fn test_repeat_guess_is_a_no_op() {
        let game = session("DOG", Difficulty::Easy);
        let (game, _) = game.submit(&'z');
        let before = game.state.clone();

        let (game, outcome) = game.submit(&'Z');
        assert!(!outcome.is_new_guess);
        assert!(outcome.no_op);
        assert_eq!(game.state, before);
    }

    #[test]
    fn test_medium_reveals_first_letter() {
        let game = session("RABBIT", Difficulty::Medium);
        assert_eq!(game.display_word(), vec!['R', '_', '_', '_', '_', '_']);
        assert!(game.is_hint_letter('r'));
        assert!(!game.is_guessed('R'));
        assert_eq!(game.state.lives, 6);
    }

    #[test]
    fn test_remaining_guesses() {
        let game = session("FOX", Difficulty::Easy);
        assert_eq!(game.remaining_guesses(), 8);
        let (game, _) = game.submit(&'q');
        let (game, _) = game.submit(&'w');
        assert_eq!(game.wrong_guesses(), 2);
        assert_eq!(game.remaining_guesses(), 6);
        assert_eq!(game.guess_percentage(), 75);
        assert_eq!(game.category_display(), "Animals");
    }

    #[test]
    fn test_no_hints_by_default() {
        let game = session("FOX", Difficulty::Easy);
        let (_, hint) = game.use_hint();
        assert_eq!(hint, None);
    }
}
