#![allow(dead_code)]

use game_core::{
    GameConfig, GameEvent, GameEventHandler, HangmanSession, MapSession, MathSession, Session,
    SpellingSession,
};
use game_types::{
    Difficulty, HangmanWord, MapRegion, Operation, Problem, SessionState, SpellingWord,
    WordCategory,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a hangman session for a known word
pub fn hangman_with_word(word: &str, difficulty: Difficulty) -> HangmanSession {
    Session::new(
        GameConfig::hangman(),
        difficulty,
        vec![HangmanWord {
            word: word.to_uppercase(),
            category: WordCategory::Food,
        }],
    )
    .unwrap()
}

pub fn addition(left: i64, right: i64) -> Problem {
    Problem {
        left,
        right,
        operation: Operation::Add,
        answer: left + right,
    }
}

/// Creates a math session over `count` known addition problems
pub fn math_with_problems(config: GameConfig, difficulty: Difficulty, count: i64) -> MathSession {
    let problems = (1..=count).map(|n| addition(n, n)).collect();
    Session::new(config, difficulty, problems).unwrap()
}

pub fn spelling_word(word: &str) -> SpellingWord {
    SpellingWord {
        word: word.to_string(),
        definition: format!("What {word} means"),
        sentence: format!("Please spell {word}."),
    }
}

pub fn spelling_with_words(words: &[&str]) -> SpellingSession {
    Session::new(
        GameConfig::spelling_bee(),
        Difficulty::Easy,
        words.iter().map(|w| spelling_word(w)).collect(),
    )
    .unwrap()
}

pub fn map_region(id: &str) -> MapRegion {
    MapRegion {
        id: id.to_string(),
        name: id.replace('-', " "),
        abbreviation: None,
        fun_fact: format!("Fun fact about {id}"),
    }
}

pub fn map_with_regions(ids: &[&str]) -> MapSession {
    Session::new(
        GameConfig::map_explorer(),
        Difficulty::Easy,
        ids.iter().map(|id| map_region(id)).collect(),
    )
    .unwrap()
}

/// Asserts counters that may only grow did not shrink
pub fn assert_monotonic(before: &SessionState, after: &SessionState) {
    assert!(after.score >= before.score, "score went down");
    assert!(after.best_streak >= before.best_streak, "best streak went down");
    assert!(after.correct_count >= before.correct_count, "correct count went down");
    assert!(after.wrong_count >= before.wrong_count, "wrong count went down");
    assert!(after.lives <= before.lives, "lives went up");
    if before.status.is_terminal() {
        assert_eq!(after.status, before.status, "terminal status changed");
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
