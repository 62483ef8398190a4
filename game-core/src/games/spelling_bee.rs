use crate::game_state::{Judgement, RoundRules, Session};
use game_types::{GameKind, SpellingClue, SpellingWord};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpellingBee;

pub type SpellingSession = Session<SpellingBee>;

#[derive(Debug, Clone, Default)]
pub struct SpellingProgress {
    /// Words spelled correctly, lowercase, in the order they were spelled
    pub mastered: Vec<String>,
}

impl RoundRules for SpellingBee {
    type Target = SpellingWord;
    type Guess = str;
    type Progress = SpellingProgress;
    type Hint = SpellingClue;

    const GAME: GameKind = GameKind::SpellingBee;

    fn judge(target: &SpellingWord, attempt: &str, progress: &mut SpellingProgress) -> Judgement {
        let word = target.word.to_lowercase();
        if attempt.trim().to_lowercase() != word {
            return Judgement::Miss;
        }

        if !progress.mastered.contains(&word) {
            progress.mastered.push(word);
        }
        Judgement::Hit {
            completes_target: true,
        }
    }

    fn hint(target: &SpellingWord, _progress: &SpellingProgress) -> SpellingClue {
        SpellingClue {
            definition: target.definition.clone(),
            sentence: target.sentence.clone(),
        }
    }

    fn solution(target: &SpellingWord) -> String {
        target.word.clone()
    }

    fn mastered(progress: &SpellingProgress) -> Vec<String> {
        progress.mastered.clone()
    }
}

impl Session<SpellingBee> {
    /// Letter count of the word being spelled, for the answer boxes
    pub fn word_length(&self) -> Option<usize> {
        self.current_target().map(|w| w.word.chars().count())
    }

    /// The word to read aloud; the presentation layer speaks it
    pub fn word_to_speak(&self) -> Option<&str> {
        self.current_target().map(|w| w.word.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use game_types::{Difficulty, GameStatus};

    fn word(word: &str) -> SpellingWord {
        SpellingWord {
            word: word.to_string(),
            definition: format!("definition of {word}"),
            sentence: format!("A sentence with {word}."),
        }
    }

    fn session(words: &[&str]) -> SpellingSession {
        Session::new(
            GameConfig::spelling_bee(),
            Difficulty::Easy,
            words.iter().map(|w| word(w)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_attempts_are_trimmed_and_case_insensitive() {
        let game = session(&["house", "water"]);
        let (game, outcome) = game.submit("  HoUsE ");
        assert!(outcome.correct);
        assert_eq!(outcome.points.base, 50);
        assert_eq!(outcome.points.no_hint_bonus, 10);
        assert_eq!(game.word_to_speak(), Some("water"));
    }

    #[test]
    fn test_wrong_spelling_stays_on_word() {
        let game = session(&["friend", "school"]);
        let (game, outcome) = game.submit("freind");
        assert!(!outcome.correct);
        assert_eq!(outcome.solution, "friend");
        assert_eq!(game.state.target_index, 0);
        assert_eq!(game.state.lives, 3);
    }

    #[test]
    fn test_hint_drops_no_hint_bonus_for_that_word_only() {
        let game = session(&["cat", "dog"]);
        let (game, clue) = game.use_hint();
        let clue = clue.unwrap();
        assert_eq!(clue.definition, "definition of cat");
        assert_eq!(game.state.hints_remaining, None);

        let (game, outcome) = game.submit("cat");
        assert_eq!(outcome.points.no_hint_bonus, 0);
        assert_eq!(game.state.hints_used, 0);

        let (_, outcome) = game.submit("dog");
        assert_eq!(outcome.points.no_hint_bonus, 10);
    }

    #[test]
    fn test_skipping_moves_on_but_costs_a_life() {
        let game = session(&["cat", "dog", "sun"]);
        let (game, outcome) = game.skip();
        assert!(!outcome.correct);
        assert_eq!(game.state.target_index, 1);
        assert_eq!(game.state.lives, 3);
        assert_eq!(game.state.wrong_count, 1);
    }

    #[test]
    fn test_skipping_last_word_loses_with_lives_left() {
        let game = session(&["cat", "dog"]);
        let (game, _) = game.submit("cat");
        let (game, outcome) = game.skip();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(game.state.lives, 3);
    }

    #[test]
    fn test_mastered_words_are_lowercase() {
        let game = session(&["Monday"]);
        let (game, _) = game.submit("monday");
        assert_eq!(game.summary().unwrap().mastered, vec!["monday".to_string()]);
    }
}
