pub mod card;
pub mod deck;
pub mod deck_set;
pub mod protocol;
pub mod quiz_session;
pub mod score;

pub use deck::Deck;
pub use deck_set::DeckSet;
pub use quiz_session::QuizSession;
pub use score::{ScoreLog, ScoreRecord};
