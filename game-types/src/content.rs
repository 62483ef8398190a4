use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum WordCategory {
    Animals,
    Food,
    School,
    Nature,
}

impl WordCategory {
    pub const ALL: [WordCategory; 4] = [
        WordCategory::Animals,
        WordCategory::Food,
        WordCategory::School,
        WordCategory::Nature,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WordCategory::Animals => "Animals",
            WordCategory::Food => "Food",
            WordCategory::School => "School",
            WordCategory::Nature => "Nature",
        }
    }
}

/// A hangman word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HangmanWord {
    pub word: String,
    pub category: WordCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpellingWord {
    pub word: String,
    pub definition: String,
    pub sentence: String,
}

/// What a spelling hint hands back: the clues read aloud to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpellingClue {
    pub definition: String,
    pub sentence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '−',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }
}

/// An arithmetic problem. For division `left` is the dividend and `answer` the quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Problem {
    pub left: i64,
    pub right: i64,
    pub operation: Operation,
    pub answer: i64,
}

impl Problem {
    pub fn question(&self) -> String {
        format!("{} {} {}", self.left, self.operation.symbol(), self.right)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.question(), self.answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MapKind {
    UsStates,
    World,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MapRegion {
    pub id: String,
    pub name: String,
    pub abbreviation: Option<String>,
    pub fun_fact: String,
}
