use game_types::GameError;

/// Turns raw player input into guesses the round engine accepts.
/// A rejected input never touches the session, so the player can simply try again.
pub struct InputValidator;

impl InputValidator {
    /// A hangman guess must be exactly one letter A-Z
    pub fn hangman_letter(input: &str) -> Result<char, GameError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
            (None, _) => Err(GameError::invalid_input("Pick a letter")),
            _ => Err(GameError::invalid_input(format!(
                "'{}' is not a single letter",
                input.trim()
            ))),
        }
    }

    /// Parse a typed math answer
    pub fn math_answer(input: &str) -> Result<i64, GameError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GameError::invalid_input("Type a number"));
        }
        input
            .parse::<i64>()
            .map_err(|_| GameError::invalid_input(format!("'{}' is not a number", input)))
    }

    /// A spelling attempt must contain something besides whitespace
    pub fn spelling_attempt(input: &str) -> Result<&str, GameError> {
        let attempt = input.trim();
        if attempt.is_empty() {
            return Err(GameError::invalid_input("Type the word first"));
        }
        Ok(attempt)
    }
}
