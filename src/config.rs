//! Table configuration. One immutable value handed to [`crate::table::Table`]
//! and [`crate::deck::Deck`] at construction time.

use crate::cards::{Rank, Suit};
use crate::hand::BLACKJACK;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_STARTING_CHIPS: i64 = 400;
pub const DEFAULT_BET_DENOMINATIONS: [u64; 4] = [5, 20, 50, 100];
pub const DEFAULT_AUTOMATED_STAKE: u64 = 50;
pub const DEFAULT_DEALER_STANDS_ON: u32 = 17;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Missing fields in a JSON config fall back to the defaults.
///
/// ```
/// use blackjack_table::config::TableConfig;
///
/// let cfg = TableConfig::from_json_str(r#"{ "starting_chips": 1000, "seed": 7 }"#).unwrap();
/// assert_eq!(cfg.starting_chips, 1000);
/// assert_eq!(cfg.bet_denominations, vec![5, 20, 50, 100]);
/// assert_eq!(cfg.suits.len() * cfg.ranks.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub suits: Vec<Suit>,
    pub ranks: Vec<Rank>,
    pub starting_chips: i64,
    /// Chip denominations a presentation layer offers for human bets.
    pub bet_denominations: Vec<u64>,
    /// Fixed stake placed by automated seats.
    pub automated_stake: u64,
    pub dealer_stands_on: u32,
    /// Seed for the table's shuffle RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            suits: Suit::ALL.to_vec(),
            ranks: Rank::ALL.to_vec(),
            starting_chips: DEFAULT_STARTING_CHIPS,
            bet_denominations: DEFAULT_BET_DENOMINATIONS.to_vec(),
            automated_stake: DEFAULT_AUTOMATED_STAKE,
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suits.is_empty() || self.ranks.is_empty() {
            return Err(ConfigError::Invalid("suit and rank sets must not be empty".into()));
        }
        if self.suits.iter().collect::<HashSet<_>>().len() != self.suits.len() {
            return Err(ConfigError::Invalid("duplicate suit".into()));
        }
        if self.ranks.iter().collect::<HashSet<_>>().len() != self.ranks.len() {
            return Err(ConfigError::Invalid("duplicate rank".into()));
        }
        if self.bet_denominations.is_empty() || self.bet_denominations.contains(&0) {
            return Err(ConfigError::Invalid("bet denominations must be positive".into()));
        }
        if !(1..=BLACKJACK).contains(&self.dealer_stands_on) {
            return Err(ConfigError::Invalid(format!(
                "dealer must stand on a total in 1..={BLACKJACK}, got {}",
                self.dealer_stands_on
            )));
        }
        if self.automated_stake == 0 {
            return Err(ConfigError::Invalid("automated stake must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_table_constants() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.starting_chips, 400);
        assert_eq!(cfg.bet_denominations, vec![5, 20, 50, 100]);
        assert_eq!(cfg.automated_stake, 50);
        assert_eq!(cfg.dealer_stands_on, 17);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_names_suits_and_ranks_by_symbol() {
        let cfg = TableConfig::from_json_str(r#"{ "suits": ["H", "S"], "ranks": ["A", "10", "K"] }"#)
            .unwrap();
        assert_eq!(cfg.suits, vec![Suit::Hearts, Suit::Spades]);
        assert_eq!(cfg.ranks, vec![Rank::Ace, Rank::Ten, Rank::King]);
    }

    #[test]
    fn rejects_duplicates_and_bad_symbols() {
        assert!(matches!(
            TableConfig::from_json_str(r#"{ "suits": ["H", "H"] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{ "ranks": ["1"] }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            TableConfig::from_json_str(r#"{ "bet_denominations": [] }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn dealer_threshold_must_be_reachable() {
        for bad in [0, 22, 40] {
            let json = format!(r#"{{ "dealer_stands_on": {bad} }}"#);
            assert!(matches!(TableConfig::from_json_str(&json), Err(ConfigError::Invalid(_))), "{bad}");
        }
        for ok in [1, 17, 21] {
            let json = format!(r#"{{ "dealer_stands_on": {ok} }}"#);
            assert_eq!(TableConfig::from_json_str(&json).unwrap().dealer_stands_on, ok);
        }
    }
}
