//! Container for all saved decks, in the order they were first saved.
use super::Deck;

#[derive(Clone, Default)]
pub struct DeckSet {
    pub decks: Vec<Deck>,
}

impl DeckSet {
    /// Inserts a deck, replacing any existing deck with the same name.
    /// Returns whether a prior entry existed. A replaced deck keeps its
    /// original position in the listing order.
    pub fn save(&mut self, name: &str, cards: Vec<String>) -> bool {
        if let Some(deck) = self.decks.iter_mut().find(|d| d.name == name) {
            deck.cards = cards;
            true
        } else {
            self.decks.push(Deck {
                name: name.to_string(),
                cards,
            });
            false
        }
    }

    /// Returns the cards of the named deck, if it was ever saved.
    pub fn load(&self, name: &str) -> Option<&[String]> {
        self.decks
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.cards.as_slice())
    }

    /// All deck names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.decks.iter().map(|d| d.name.clone()).collect()
    }
}
