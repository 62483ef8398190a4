use super::ContentProvider;
use game_types::{Difficulty, GameError, GameKind, Operation, Problem};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates arithmetic problems on demand; there is no fixed pool to run out of
#[derive(Debug, Default, Clone, Copy)]
pub struct ProblemGenerator;

impl ProblemGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Operations unlocked at each difficulty
    pub fn operations(difficulty: Difficulty) -> &'static [Operation] {
        match difficulty {
            Difficulty::Easy => &[Operation::Add, Operation::Subtract],
            Difficulty::Medium => &[Operation::Add, Operation::Subtract, Operation::Multiply],
            Difficulty::Hard => &[
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Problem {
        let operation = Self::operations(difficulty)
            .choose(rng)
            .copied()
            .unwrap_or(Operation::Add);
        self.generate_for(operation, difficulty, rng)
    }

    pub fn generate_for<R: Rng + ?Sized>(
        &self,
        operation: Operation,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Problem {
        match operation {
            Operation::Add => {
                let (min, max) = match difficulty {
                    Difficulty::Easy => (1, 10),
                    Difficulty::Medium => (10, 50),
                    Difficulty::Hard => (50, 200),
                };
                let a = rng.gen_range(min..=max);
                let b = rng.gen_range(min..=max);
                Problem {
                    left: a,
                    right: b,
                    operation,
                    answer: a + b,
                }
            }
            Operation::Subtract => {
                // subtrahend is bounded by the minuend so the answer never goes negative
                let (min_a, max_a, min_b) = match difficulty {
                    Difficulty::Easy => (5, 15, 1),
                    Difficulty::Medium => (20, 100, 10),
                    Difficulty::Hard => (100, 300, 50),
                };
                let a = rng.gen_range(min_a..=max_a);
                let b = rng.gen_range(min_b..=a);
                Problem {
                    left: a,
                    right: b,
                    operation,
                    answer: a - b,
                }
            }
            Operation::Multiply => {
                let (min, max) = match difficulty {
                    Difficulty::Easy => (1, 5),
                    Difficulty::Medium => (2, 10),
                    Difficulty::Hard => (5, 12),
                };
                let a = rng.gen_range(min..=max);
                let b = rng.gen_range(min..=max);
                Problem {
                    left: a,
                    right: b,
                    operation,
                    answer: a * b,
                }
            }
            Operation::Divide => {
                // pick divisor and quotient first so the dividend divides evenly
                let (min, max) = match difficulty {
                    Difficulty::Easy => (1, 5),
                    Difficulty::Medium => (2, 10),
                    Difficulty::Hard => (3, 12),
                };
                let divisor = rng.gen_range(min..=max);
                let quotient = rng.gen_range(min..=max);
                Problem {
                    left: divisor * quotient,
                    right: divisor,
                    operation,
                    answer: quotient,
                }
            }
        }
    }
}

impl ContentProvider for ProblemGenerator {
    type Target = Problem;

    fn game(&self) -> GameKind {
        GameKind::MathQuest
    }

    fn draw_set<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Problem>, GameError> {
        Ok((0..count).map(|_| self.generate(difficulty, rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_division_always_divides_evenly() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        for difficulty in Difficulty::ALL {
            for _ in 0..500 {
                let p = generator.generate_for(Operation::Divide, difficulty, &mut rng);
                assert_ne!(p.right, 0);
                assert_eq!(p.right * p.answer, p.left);
            }
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);
        for difficulty in Difficulty::ALL {
            for _ in 0..500 {
                let p = generator.generate_for(Operation::Subtract, difficulty, &mut rng);
                assert!(p.left >= p.right, "{}", p);
                assert!(p.answer >= 0);
            }
        }
    }

    #[test]
    fn test_operations_respect_difficulty() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);
        let problems = generator.draw_set(Difficulty::Easy, 200, &mut rng).unwrap();
        assert_eq!(problems.len(), 200);
        assert!(problems.iter().all(|p| matches!(
            p.operation,
            Operation::Add | Operation::Subtract
        )));

        let problems = generator.draw_set(Difficulty::Medium, 200, &mut rng).unwrap();
        assert!(problems.iter().all(|p| p.operation != Operation::Divide));
    }

    #[test]
    fn test_answers_match_operands() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(77);
        for p in generator.draw_set(Difficulty::Hard, 300, &mut rng).unwrap() {
            let expected = match p.operation {
                Operation::Add => p.left + p.right,
                Operation::Subtract => p.left - p.right,
                Operation::Multiply => p.left * p.right,
                Operation::Divide => p.left / p.right,
            };
            assert_eq!(p.answer, expected);
        }
    }

    #[test]
    fn test_question_uses_typographic_operators() {
        let p = Problem {
            left: 12,
            right: 4,
            operation: Operation::Divide,
            answer: 3,
        };
        assert_eq!(p.question(), "12 ÷ 4");
    }
}
