use game_types::{Achievement, Difficulty, GameKind, GameSummary, Operation, StatsRecord};
use Difficulty::{Easy, Hard, Medium};
use Milestone::*;

/// Condition that unlocks an achievement, checked against the stats after a
/// finished game has been folded in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FirstWin,
    /// Games won in a row
    WinStreak(u32),
    /// Correct answers in a row within the finished game
    AnswerStreak(u32),
    /// Won without a single miss, optionally on one difficulty only
    PerfectGame(Option<Difficulty>),
    DifficultyWins(Difficulty, u32),
    /// Points scored in the finished game
    GameScore(u32),
    GamesPlayed(u32),
    /// Distinct words or regions mastered over all games
    Mastered(usize),
    OperationCorrect(Operation, u32),
}

impl Milestone {
    pub fn reached(&self, stats: &StatsRecord, game: &GameSummary) -> bool {
        match *self {
            Milestone::FirstWin => game.won && stats.wins == 1,
            Milestone::WinStreak(n) => stats.current_streak >= n,
            Milestone::AnswerStreak(n) => game.best_streak >= n,
            Milestone::PerfectGame(difficulty) => {
                game.won
                    && game.wrong_count == 0
                    && difficulty.is_none_or(|d| d == game.difficulty)
            }
            Milestone::DifficultyWins(difficulty, n) => {
                stats.games_by_difficulty.get(difficulty).won >= n
            }
            Milestone::GameScore(n) => game.score >= n,
            Milestone::GamesPlayed(n) => stats.total_games >= n,
            Milestone::Mastered(n) => stats.mastered.len() >= n,
            Milestone::OperationCorrect(operation, n) => stats
                .operation_accuracy
                .get(&operation)
                .is_some_and(|accuracy| accuracy.correct >= n),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub milestone: Milestone,
}

impl AchievementDef {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        milestone: Milestone,
    ) -> Self {
        Self {
            id,
            name,
            description,
            milestone,
        }
    }

    pub fn locked(&self) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            unlocked_at: None,
        }
    }
}

const HANGMAN: &[AchievementDef] = &[
    AchievementDef::new("first-win", "First Victory", "Win your first game", FirstWin),
    AchievementDef::new("streak-3", "On Fire", "Win 3 games in a row", WinStreak(3)),
    AchievementDef::new("streak-5", "Unstoppable", "Win 5 games in a row", WinStreak(5)),
    AchievementDef::new("streak-10", "Champion", "Win 10 games in a row", WinStreak(10)),
    AchievementDef::new(
        "perfect-game",
        "Perfect Game",
        "Win without any wrong guesses",
        PerfectGame(None),
    ),
    AchievementDef::new("master-easy", "Easy Master", "Win 10 easy games", DifficultyWins(Easy, 10)),
    AchievementDef::new(
        "master-medium",
        "Medium Master",
        "Win 10 medium games",
        DifficultyWins(Medium, 10),
    ),
    AchievementDef::new("master-hard", "Hard Master", "Win 10 hard games", DifficultyWins(Hard, 10)),
    AchievementDef::new("ten-games", "Getting Started", "Play 10 games", GamesPlayed(10)),
    AchievementDef::new("fifty-games", "Dedicated Player", "Play 50 games", GamesPlayed(50)),
    AchievementDef::new(
        "word-collector",
        "Word Collector",
        "Master 25 different words",
        Mastered(25),
    ),
    AchievementDef::new(
        "vocabulary-king",
        "Vocabulary Expert",
        "Master 50 different words",
        Mastered(50),
    ),
];

const MATH_QUEST: &[AchievementDef] = &[
    AchievementDef::new("first-win", "Liftoff!", "Complete your first mission", FirstWin),
    AchievementDef::new(
        "perfect-easy",
        "Perfect Launch",
        "Beat Easy with no mistakes",
        PerfectGame(Some(Easy)),
    ),
    AchievementDef::new(
        "perfect-medium",
        "Flawless Flight",
        "Beat Medium with no mistakes",
        PerfectGame(Some(Medium)),
    ),
    AchievementDef::new(
        "perfect-hard",
        "Legendary Pilot",
        "Beat Hard with no mistakes",
        PerfectGame(Some(Hard)),
    ),
    AchievementDef::new("streak-5", "Hot Streak", "Get 5 correct in a row", AnswerStreak(5)),
    AchievementDef::new("streak-10", "Unstoppable", "Get 10 correct in a row", AnswerStreak(10)),
    AchievementDef::new("score-500", "Rising Star", "Score 500 points in one game", GameScore(500)),
    AchievementDef::new(
        "score-1000",
        "Superstar",
        "Score 1000 points in one game",
        GameScore(1000),
    ),
    AchievementDef::new("games-10", "Dedicated", "Play 10 missions", GamesPlayed(10)),
    AchievementDef::new("games-50", "Math Explorer", "Play 50 missions", GamesPlayed(50)),
    AchievementDef::new(
        "master-add",
        "Addition Ace",
        "Get 50 addition problems correct",
        OperationCorrect(Operation::Add, 50),
    ),
    AchievementDef::new(
        "master-multiply",
        "Multiplication Master",
        "Get 50 multiplication problems correct",
        OperationCorrect(Operation::Multiply, 50),
    ),
];

const SPELLING_BEE: &[AchievementDef] = &[
    AchievementDef::new("first-win", "First Buzz", "Complete your first spelling round", FirstWin),
    AchievementDef::new(
        "perfect-easy",
        "Easy Peasy",
        "Beat Easy with no mistakes",
        PerfectGame(Some(Easy)),
    ),
    AchievementDef::new(
        "perfect-medium",
        "Spelling Star",
        "Beat Medium with no mistakes",
        PerfectGame(Some(Medium)),
    ),
    AchievementDef::new(
        "perfect-hard",
        "Spelling Champion",
        "Beat Hard with no mistakes",
        PerfectGame(Some(Hard)),
    ),
    AchievementDef::new(
        "streak-5",
        "Spelling Streak",
        "Spell 5 words correctly in a row",
        AnswerStreak(5),
    ),
    AchievementDef::new(
        "streak-10",
        "Unstoppable Speller",
        "Spell 10 words correctly in a row",
        AnswerStreak(10),
    ),
    AchievementDef::new("score-500", "High Flyer", "Score 500 points in one round", GameScore(500)),
    AchievementDef::new(
        "score-1000",
        "Spelling Genius",
        "Score 1000 points in one round",
        GameScore(1000),
    ),
    AchievementDef::new("games-10", "Busy Bee", "Play 10 spelling rounds", GamesPlayed(10)),
    AchievementDef::new("games-50", "Super Speller", "Play 50 spelling rounds", GamesPlayed(50)),
    AchievementDef::new("words-25", "Word Collector", "Master 25 different words", Mastered(25)),
    AchievementDef::new(
        "words-50",
        "Vocabulary Builder",
        "Master 50 different words",
        Mastered(50),
    ),
];

const MAP_EXPLORER: &[AchievementDef] = &[
    AchievementDef::new(
        "first-expedition",
        "First Expedition",
        "Complete your first game",
        FirstWin,
    ),
    AchievementDef::new(
        "perfect-easy",
        "Perfect Scout",
        "Beat Easy with no mistakes",
        PerfectGame(Some(Easy)),
    ),
    AchievementDef::new(
        "perfect-medium",
        "Perfect Ranger",
        "Beat Medium with no mistakes",
        PerfectGame(Some(Medium)),
    ),
    AchievementDef::new(
        "perfect-hard",
        "Perfect Explorer",
        "Beat Hard with no mistakes",
        PerfectGame(Some(Hard)),
    ),
    AchievementDef::new("streak-5", "Explorer Streak", "Get 5 correct in a row", AnswerStreak(5)),
    AchievementDef::new(
        "streak-10",
        "Master Navigator",
        "Get 10 correct in a row",
        AnswerStreak(10),
    ),
    AchievementDef::new(
        "score-500",
        "Rising Explorer",
        "Score 500 points in one game",
        GameScore(500),
    ),
    AchievementDef::new(
        "score-1000",
        "Superstar Explorer",
        "Score 1000 points in one game",
        GameScore(1000),
    ),
    AchievementDef::new("games-10", "Dedicated Explorer", "Play 10 games", GamesPlayed(10)),
    AchievementDef::new("games-50", "World Traveler", "Play 50 games", GamesPlayed(50)),
    AchievementDef::new("states-25", "Half the Map", "Find 25 different US states", Mastered(25)),
    AchievementDef::new("states-50", "All 50 States", "Find all 50 US states", Mastered(50)),
];

/// Achievements of a game, in the order they are checked
pub fn catalog(game: GameKind) -> &'static [AchievementDef] {
    match game {
        GameKind::Hangman => HANGMAN,
        GameKind::MathQuest => MATH_QUEST,
        GameKind::SpellingBee => SPELLING_BEE,
        GameKind::MapExplorer => MAP_EXPLORER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    fn summary(won: bool, wrong_count: u32, score: u32) -> GameSummary {
        GameSummary {
            game: GameKind::MathQuest,
            difficulty: Difficulty::Medium,
            won,
            score,
            correct_count: 10,
            wrong_count,
            best_streak: 4,
            mastered: Vec::new(),
            operations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for game in GameKind::ALL {
            let ids: HashSet<_> = catalog(game).iter().map(|def| def.id).collect();
            assert_eq!(ids.len(), catalog(game).len(), "{game}");
            assert_eq!(catalog(game).len(), 12);
        }
    }

    #[test]
    fn test_perfect_game_needs_a_clean_win_on_that_difficulty() {
        let stats = StatsRecord::default();
        assert!(PerfectGame(Some(Medium)).reached(&stats, &summary(true, 0, 100)));
        assert!(PerfectGame(None).reached(&stats, &summary(true, 0, 100)));
        assert!(!PerfectGame(Some(Easy)).reached(&stats, &summary(true, 0, 100)));
        assert!(!PerfectGame(Some(Medium)).reached(&stats, &summary(true, 1, 100)));
        assert!(!PerfectGame(Some(Medium)).reached(&stats, &summary(false, 0, 100)));
    }

    #[test]
    fn test_streak_milestones_read_the_right_counter() {
        let stats = StatsRecord {
            current_streak: 3,
            ..Default::default()
        };
        assert!(WinStreak(3).reached(&stats, &summary(true, 0, 0)));
        assert!(!WinStreak(5).reached(&stats, &summary(true, 0, 0)));
        // the finished game's best streak was 4
        assert!(!AnswerStreak(5).reached(&stats, &summary(true, 0, 0)));
        assert!(AnswerStreak(4).reached(&stats, &summary(true, 0, 0)));
    }

    #[test]
    fn test_operation_milestone() {
        let mut stats = StatsRecord::default();
        let milestone = OperationCorrect(Operation::Add, 50);
        assert!(!milestone.reached(&stats, &summary(true, 0, 0)));

        stats.operation_accuracy.entry(Operation::Add).or_default().correct = 50;
        assert!(milestone.reached(&stats, &summary(false, 3, 0)));
    }
}
