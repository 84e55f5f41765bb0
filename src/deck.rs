use crate::cards::{Card, Rank, Suit};
use crate::config::TableConfig;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// An ordered stack of cards. The top of the stack is the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    suits: Vec<Suit>,
    ranks: Vec<Rank>,
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use blackjack_table::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::from_sets(&Suit::ALL, &Rank::ALL)
    }

    /// Build the deck described by the table configuration.
    pub fn new(config: &TableConfig) -> Self {
        Self::from_sets(&config.suits, &config.ranks)
    }

    /// A standard deck whose remaining cards are exactly `cards`, top last.
    #[cfg(test)]
    pub(crate) fn stacked(cards: Vec<Card>) -> Self {
        Self { suits: Suit::ALL.to_vec(), ranks: Rank::ALL.to_vec(), cards }
    }

    fn from_sets(suits: &[Suit], ranks: &[Rank]) -> Self {
        let mut deck = Self { suits: suits.to_vec(), ranks: ranks.to_vec(), cards: Vec::new() };
        deck.reset();
        deck
    }

    /// Discard every card and rebuild the full, ordered sequence: suit by suit,
    /// rank by rank.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.suits.len() * self.ranks.len());
        for &s in &self.suits {
            for &r in &self.ranks {
                self.cards.push(Card::new(s, r));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Uniform in-place permutation (Fisher–Yates) driven by `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }
}
