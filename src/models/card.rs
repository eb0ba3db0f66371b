//! Card text parsing and validation.
//! A card is a single line of text formatted as "question|answer".

use thiserror::Error;

/// Separator between the question and answer halves of a card.
pub const SEPARATOR: char = '|';

/// Why a block of card text was rejected. The messages are shown to the
/// user as typed, so they stay in plain English.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardFormatError {
    #[error("Please enter flashcards in the correct format.")]
    Malformed,
    #[error("Please only have one | per question and answer")]
    ExtraSeparator,
}

/// Checks a single card line: exactly one separator, with text on both sides.
pub fn validate_line(line: &str) -> Result<(), CardFormatError> {
    match line.find(SEPARATOR) {
        None | Some(0) => Err(CardFormatError::Malformed),
        Some(pos) if pos == line.len() - 1 => Err(CardFormatError::Malformed),
        Some(pos) => {
            if line[pos + 1..].contains(SEPARATOR) {
                Err(CardFormatError::ExtraSeparator)
            } else {
                Ok(())
            }
        }
    }
}

/// Splits a card line into its (question, answer) halves.
/// Returns None for lines that never passed validation.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(SEPARATOR)
}

/// Splits a free-text block into card lines, one card per line.
/// Stops at the first invalid line.
pub fn parse_deck_text(text: &str) -> Result<Vec<String>, CardFormatError> {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    for line in &lines {
        validate_line(line)?;
    }
    Ok(lines)
}
