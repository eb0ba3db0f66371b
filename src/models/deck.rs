//! Deck is a named set of cards, each stored as a "question|answer" line
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<String>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            cards: Vec::new(),
        }
    }
}
