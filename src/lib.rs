//! blackjack-table: a single-table blackjack simulator
//!
//! Goals:
//! - One dealer against a fixed list of seats, stepped one unit at a time
//! - Automated seats play a hardcoded basic strategy; human seats replay intents
//! - Deterministic rounds under a seed; errors as `Result`, never panics
//!
//! ## Quick start: simulate a few rounds
//! ```
//! use blackjack_table::agents::Role;
//! use blackjack_table::config::TableConfig;
//! use blackjack_table::table::Table;
//!
//! let mut table = Table::new(TableConfig::default().with_seed(42), "blackjack", "AI-2", Role::Automated)
//!     .unwrap();
//! for _ in 0..3 {
//!     table.run_round().unwrap();
//! }
//! let log = table.results_log();
//! assert_eq!(log.len(), 3);
//! assert_eq!(log[2].round, 3);
//! assert_eq!(log[0].dealer.name, "house");
//! ```
//!
//! ## CLI
//! Play from the terminal with:
//! ```sh
//! cargo run --bin blackjack -- --rounds 5
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod hand;
pub mod history;
pub mod payout;
pub mod player;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
