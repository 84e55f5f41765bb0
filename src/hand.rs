use crate::cards::{parse_cards, Card, CardParseError, Rank};
use core::fmt;
use serde::Serialize;
use std::str::FromStr;

/// Scores above this bust the hand.
pub const BLACKJACK: u32 = 21;

/// Cards held by a seat or the dealer for one round, in the order received.
///
/// ```
/// use blackjack_table::hand::Hand;
///
/// let hand: Hand = "AH AS 9C".parse().unwrap();
/// assert_eq!(hand.raw_total(), 31);
/// assert_eq!(hand.score(), 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
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

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Sum of card values with every Ace counted as 11.
    pub fn raw_total(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// Hand score. When the raw total exceeds 21 and the hand holds an Ace,
    /// 10 is taken off once; a second Ace is never re-counted.
    pub fn score(&self) -> u32 {
        let raw = self.raw_total();
        if raw > BLACKJACK && self.has_ace() {
            raw - 10
        } else {
            raw
        }
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn has_ace(&self) -> bool {
        self.holds(Rank::Ace)
    }

    pub fn holds(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank() == rank)
    }

    pub fn holds_any(&self, ranks: &[Rank]) -> bool {
        self.cards.iter().any(|c| ranks.contains(&c.rank()))
    }

    /// The shared rank when the hand is exactly two cards of equal rank.
    pub fn pair_rank(&self) -> Option<Rank> {
        match self.cards.as_slice() {
            [a, b] if a.rank() == b.rank() => Some(a.rank()),
            _ => None,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.pair_rank().is_some()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Self::new)
    }
}
