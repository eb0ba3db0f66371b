use std::sync::{Arc, Mutex};

use crate::models::{DeckSet, ScoreLog};

/// Process-memory storage shared by the route handlers. Nothing survives a
/// restart.
#[derive(Default)]
pub struct AppState {
    pub decks: Mutex<DeckSet>,
    pub scores: Mutex<ScoreLog>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }
}
