pub mod problems;
pub mod regions;
pub mod spelling_words;
pub mod words;

pub use problems::ProblemGenerator;
pub use regions::RegionAtlas;
pub use spelling_words::SpellingList;
pub use words::WordBank;

use game_types::{Difficulty, GameError, GameKind};
use rand::Rng;
use rand::seq::SliceRandom;

/// Supplies the round targets of one game for a difficulty
pub trait ContentProvider {
    type Target: Clone;

    fn game(&self) -> GameKind;

    /// Draw up to `count` targets for a session, in play order
    fn draw_set<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Target>, GameError>;

    fn draw<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self::Target, GameError> {
        self.draw_set(difficulty, 1, rng)?
            .into_iter()
            .next()
            .ok_or(GameError::ContentExhausted {
                game: self.game(),
                difficulty,
            })
    }
}

/// Sample without replacement. A pool smaller than `count` comes back whole, shuffled.
pub fn sample_pool<T: Clone, R: Rng + ?Sized>(
    game: GameKind,
    difficulty: Difficulty,
    pool: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, GameError> {
    if pool.is_empty() {
        return Err(GameError::ContentExhausted { game, difficulty });
    }

    let mut drawn = pool.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(count);
    Ok(drawn)
}
