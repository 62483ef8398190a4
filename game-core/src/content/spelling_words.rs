use super::{ContentProvider, sample_pool};
use game_types::{Difficulty, GameError, GameKind, SpellingWord};
use rand::Rng;

const EASY: &[(&str, &str, &str)] = &[
    ("cat", "A small furry pet", "The cat sat on the mat."),
    ("dog", "A pet that barks", "My dog loves to play fetch."),
    ("run", "To move fast on your feet", "I like to run in the park."),
    ("big", "Large in size", "The elephant is very big."),
    ("sun", "The bright star in the sky", "The sun is shining today."),
    ("hat", "Something you wear on your head", "She wore a red hat."),
    ("cup", "Something you drink from", "I drink milk from a cup."),
    ("bed", "Where you sleep", "I made my bed this morning."),
    ("fish", "An animal that swims", "The fish swims in the pond."),
    ("bird", "An animal with feathers that flies", "A bird built a nest in the tree."),
    ("tree", "A tall plant with leaves", "We planted a tree in our yard."),
    ("book", "Something you read", "I read a book before bed."),
    ("rain", "Water falling from clouds", "The rain made puddles outside."),
    ("play", "To have fun", "Let us play a game together."),
    ("jump", "To push off the ground", "I can jump very high."),
    ("stop", "To not move anymore", "Stop at the red light."),
    ("help", "To assist someone", "Can you help me please?"),
    ("look", "To see with your eyes", "Look at the beautiful rainbow!"),
    ("come", "To move toward", "Please come to my party."),
    ("make", "To create something", "I will make a card for mom."),
];

const MEDIUM: &[(&str, &str, &str)] = &[
    ("house", "A building where people live", "Our house has a blue door."),
    ("friend", "Someone you like and play with", "My friend came over to play."),
    ("school", "A place where you learn", "I walk to school every day."),
    ("write", "To put words on paper", "I write in my journal."),
    ("laugh", "The sound when something is funny", "The joke made me laugh."),
    ("because", "For the reason that", "I am happy because it is sunny."),
    ("people", "More than one person", "Many people came to the fair."),
    ("water", "What you drink when thirsty", "I drink water every day."),
    ("should", "Ought to do something", "You should brush your teeth."),
    ("around", "In a circle or nearby", "We walked around the block."),
    ("animal", "A living creature", "A dog is my favorite animal."),
    ("please", "A polite word when asking", "May I have some more, please?"),
    ("family", "Your parents and siblings", "I love my family very much."),
    ("change", "To make different", "I will change into my pajamas."),
    ("follow", "To go after someone", "Follow the leader in this game."),
    ("answer", "A reply to a question", "Do you know the answer?"),
    ("before", "Earlier in time", "Wash your hands before eating."),
    ("learn", "To gain knowledge", "I learn new things at school."),
    ("thought", "An idea in your mind", "I thought about what to do."),
    ("picture", "An image or drawing", "I drew a picture of my cat."),
];

const HARD: &[(&str, &str, &str)] = &[
    ("different", "Not the same", "We all have different favorite colors."),
    ("together", "With each other", "We work together as a team."),
    ("important", "Having great value", "It is important to be kind."),
    ("beautiful", "Very pretty", "The sunset was beautiful."),
    ("something", "An unknown thing", "I heard something outside."),
    ("through", "From one side to another", "We walked through the forest."),
    ("favorite", "The one you like most", "Pizza is my favorite food."),
    ("remember", "To keep in your mind", "I remember my first day of school."),
    ("surprise", "Something unexpected", "The party was a big surprise!"),
    ("question", "Something you ask", "I have a question for you."),
    ("special", "One of a kind", "Today is a special day."),
    ("terrible", "Very bad", "The storm was terrible."),
    ("suddenly", "Happening quickly without warning", "Suddenly, it started to rain."),
    ("probably", "Most likely", "It will probably snow tomorrow."),
    ("yesterday", "The day before today", "Yesterday was my birthday."),
    ("exercise", "Moving your body to stay healthy", "I exercise every morning."),
    ("beginning", "The start of something", "The beginning of the movie was exciting."),
    ("everything", "All things", "I packed everything for the trip."),
    ("daughter", "A female child", "She is their daughter."),
    ("knowledge", "What you know and learn", "Books give us knowledge."),
];
/// Graded spelling words, each with a definition and an example sentence
pub struct SpellingList {
    easy: Vec<SpellingWord>,
    medium: Vec<SpellingWord>,
    hard: Vec<SpellingWord>,
}

impl SpellingList {
    pub fn new(easy: Vec<SpellingWord>, medium: Vec<SpellingWord>, hard: Vec<SpellingWord>) -> Self {
        Self { easy, medium, hard }
    }

    pub fn builtin() -> Self {
        Self::new(to_words(EASY), to_words(MEDIUM), to_words(HARD))
    }

    pub fn words(&self, difficulty: Difficulty) -> &[SpellingWord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn word_count(&self, difficulty: Difficulty) -> usize {
        self.words(difficulty).len()
    }
}

impl Default for SpellingList {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_words(table: &[(&str, &str, &str)]) -> Vec<SpellingWord> {
    table
        .iter()
        .map(|(word, definition, sentence)| SpellingWord {
            word: word.to_string(),
            definition: definition.to_string(),
            sentence: sentence.to_string(),
        })
        .collect()
}

impl ContentProvider for SpellingList {
    type Target = SpellingWord;

    fn game(&self) -> GameKind {
        GameKind::SpellingBee
    }

    fn draw_set<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<SpellingWord>, GameError> {
        sample_pool(GameKind::SpellingBee, difficulty, self.words(difficulty), count, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_lists_have_twenty_words_each() {
        let list = SpellingList::builtin();
        for difficulty in Difficulty::ALL {
            assert_eq!(list.word_count(difficulty), 20);
        }
    }

    #[test]
    fn test_every_word_has_clues() {
        let list = SpellingList::builtin();
        for difficulty in Difficulty::ALL {
            for word in list.words(difficulty) {
                assert!(!word.definition.is_empty(), "{} has no definition", word.word);
                assert!(!word.sentence.is_empty(), "{} has no sentence", word.word);
            }
        }
    }

    #[test]
    fn test_draw_set_is_limited_by_pool() {
        let list = SpellingList::new(to_words(&EASY[..3]), Vec::new(), Vec::new());
        let mut rng = StdRng::seed_from_u64(11);
        let drawn = list.draw_set(Difficulty::Easy, 8, &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
        assert!(list.draw_set(Difficulty::Medium, 8, &mut rng).is_err());
    }
}
