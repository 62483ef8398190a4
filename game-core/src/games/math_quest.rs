use crate::game_state::{Judgement, RoundRules, Session};
use game_types::{Accuracy, GameKind, Operation, Problem};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct MathQuest;

pub type MathSession = Session<MathQuest>;

#[derive(Debug, Clone, Default)]
pub struct MathProgress {
    /// Answers given per operation; timeouts are not answers
    pub operations: BTreeMap<Operation, Accuracy>,
}

impl RoundRules for MathQuest {
    type Target = Problem;
    type Guess = i64;
    type Progress = MathProgress;
    type Hint = i64;

    const GAME: GameKind = GameKind::MathQuest;

    fn judge(target: &Problem, guess: &i64, progress: &mut MathProgress) -> Judgement {
        let correct = *guess == target.answer;
        progress
            .operations
            .entry(target.operation)
            .or_default()
            .record(correct);

        if correct {
            Judgement::Hit {
                completes_target: true,
            }
        } else {
            Judgement::Miss
        }
    }

    fn hint(target: &Problem, _progress: &MathProgress) -> i64 {
        target.answer
    }

    fn solution(target: &Problem) -> String {
        target.answer.to_string()
    }

    fn operations(progress: &MathProgress) -> BTreeMap<Operation, Accuracy> {
        progress.operations.clone()
    }
}

impl Session<MathQuest> {
    /// The current question, e.g. `7 × 8`
    pub fn question(&self) -> Option<String> {
        self.current_target().map(Problem::question)
    }

    /// How high the rocket has climbed, as a percent of the answers needed
    pub fn rocket_height(&self) -> u32 {
        self.progress_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::content::ProblemGenerator;
    use game_types::{Difficulty, GameStatus};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn problem(left: i64, right: i64, answer: i64) -> Problem {
        Problem {
            left,
            right,
            operation: Operation::Add,
            answer,
        }
    }

    #[test]
    fn test_wrong_answers_move_on() {
        let problems = vec![problem(1, 1, 2), problem(2, 2, 4), problem(3, 3, 6)];
        let game: MathSession =
            Session::new(GameConfig::math_quest(), Difficulty::Easy, problems).unwrap();

        let (game, outcome) = game.submit(&5);
        assert!(!outcome.correct);
        assert_eq!(outcome.solution, "2");
        assert_eq!(game.state.target_index, 1);
        assert_eq!(game.question(), Some("2 + 2".to_string()));
    }

    #[test]
    fn test_miss_on_last_problem_repeats_it() {
        let game: MathSession =
            Session::new(GameConfig::math_quest(), Difficulty::Easy, vec![problem(1, 1, 2)])
                .unwrap();

        let (game, outcome) = game.submit(&5);
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(game.state.lives, 4);
        assert_eq!(game.state.target_index, 0);
        assert_eq!(game.question(), Some("1 + 1".to_string()));
    }

    #[test]
    fn test_quota_wins_and_tallies_operations() {
        let mut config = GameConfig::math_quest();
        config.easy.target_count = 2;
        let problems = vec![problem(1, 1, 2), problem(2, 2, 4), problem(3, 3, 6)];
        let game: MathSession = Session::new(config, Difficulty::Easy, problems).unwrap();
        assert_eq!(game.state.total_targets, 2);

        let (game, _) = game.submit(&0);
        let (game, _) = game.submit(&4);
        assert_eq!(game.rocket_height(), 50);
        let (game, outcome) = game.submit(&6);

        assert_eq!(outcome.status, GameStatus::Won);
        let summary = game.summary().unwrap();
        let add = summary.operations[&Operation::Add];
        assert_eq!(add.correct, 2);
        assert_eq!(add.total, 3);
    }

    #[test]
    fn test_buffer_covers_every_possible_answer() {
        let config = GameConfig::math_quest();
        let mut rng = StdRng::seed_from_u64(4);
        let mut game: MathSession =
            Session::create(config, Difficulty::Hard, &ProblemGenerator::new(), &mut rng).unwrap();
        let quota = game.state.total_targets as u32;
        assert_eq!(quota, 15);

        // miss with all but one life, then answer everything correctly
        for _ in 0..game.state.lives - 1 {
            let (next, _) = game.submit(&-1);
            game = next;
        }
        for _ in 0..quota {
            let answer = game.current_target().unwrap().answer;
            let (next, _) = game.submit(&answer);
            game = next;
        }
        assert_eq!(game.state.status, GameStatus::Won);
    }
}
