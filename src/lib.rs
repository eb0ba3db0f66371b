pub mod api;
pub mod config;
pub mod models;
pub mod server;

pub use models::{Deck, DeckSet, QuizSession, ScoreLog, ScoreRecord};
