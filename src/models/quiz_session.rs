//! Quiz session management for a single pass over a deck.
//! Tracks the current card, which face is showing, and the running tally.

use super::card;

/// Runs a quiz over one deck. Each card is shown once; flipping reveals the
/// answer, and grading the card advances to the next one. The session is
/// finished once the index walks past the last card.
pub struct QuizSession {
    pub deck_name: String,
    pub cards: Vec<String>,
    pub current_index: usize,
    pub show_answer: bool,
    pub correct: usize,
    pub incorrect: usize,
}

impl QuizSession {
    pub fn new(deck_name: String, cards: Vec<String>) -> Self {
        Self {
            deck_name,
            cards,
            current_index: 0,
            show_answer: false,
            correct: 0,
            incorrect: 0,
        }
    }

    /// The (question, answer) halves of the current card, or None once the
    /// session is finished.
    pub fn current_card(&self) -> Option<(&str, &str)> {
        self.cards
            .get(self.current_index)
            .and_then(|line| card::split_line(line))
    }

    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    pub fn mark_correct(&mut self) {
        self.correct += 1;
        self.advance();
    }

    pub fn mark_incorrect(&mut self) {
        self.incorrect += 1;
        self.advance();
    }

    fn advance(&mut self) {
        self.current_index += 1;
        self.show_answer = false;
    }

    /// True once every card has been graded. An empty deck is finished
    /// from the start.
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.cards.len()
    }

    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    /// Final score as a whole percentage, rounded down. An empty deck
    /// scores 0.
    pub fn score_percent(&self) -> u32 {
        if self.cards.is_empty() {
            0
        } else {
            (100 * self.correct / self.cards.len()) as u32
        }
    }
}
