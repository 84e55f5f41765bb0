// Minimal table engine API boundary. Front ends (the CLI, tests, a future GUI)
// drive a round through this trait without reaching into table internals. It is
// implemented for the core `Table` type.

use crate::agents::Intent;
use crate::history::RoundSummary;
use crate::player::Player;
use crate::table::{Phase, Table, TableError};

pub trait TableEngine {
    // Round lifecycle
    fn have_turn(&mut self) -> Result<(), TableError>;
    fn next_round(&mut self) -> Result<(), TableError>;

    // Human input
    fn submit(&mut self, seat: usize, intent: Intent) -> bool;

    // Queries
    fn turn_player(&self) -> &Player;
    fn phase(&self) -> Phase;
    fn round(&self) -> u32;
    fn current(&self) -> usize;
    fn seats(&self) -> &[Player];
    fn dealer(&self) -> &Player;
    fn results_log(&self) -> &[RoundSummary];
}

impl TableEngine for Table {
    fn have_turn(&mut self) -> Result<(), TableError> {
        self.have_turn()
    }
    fn next_round(&mut self) -> Result<(), TableError> {
        self.next_round()
    }

    fn submit(&mut self, seat: usize, intent: Intent) -> bool {
        self.submit(seat, intent)
    }

    fn turn_player(&self) -> &Player {
        self.turn_player()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn round(&self) -> u32 {
        self.round()
    }
    fn current(&self) -> usize {
        self.current()
    }
    fn seats(&self) -> &[Player] {
        self.seats()
    }
    fn dealer(&self) -> &Player {
        self.dealer()
    }
    fn results_log(&self) -> &[RoundSummary] {
        self.results_log()
    }
}
