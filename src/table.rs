use crate::agents::{agent_for, DecisionError, Intent, NoPacing, Pacing, Role, RoleParseError};
use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::decision::{Action, Decision};
use crate::history::RoundSummary;
use crate::payout;
use crate::player::{Player, Status};
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// The only game type a table can be built for.
pub const GAME_TYPE: &str = "blackjack";
pub const DEALER_NAME: &str = "house";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Phase {
    Betting,
    Dealing,
    Acting,
    Evaluating,
    RoundOver,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TableError {
    #[error(transparent)]
    EmptyDeck(#[from] DeckError),
    #[error("unknown role: '{0}'")]
    UnknownRole(String),
    #[error("cannot {operation} during {phase:?}")]
    InvalidPhaseTransition { phase: Phase, operation: &'static str },
    #[error("surrender is not supported")]
    SurrenderUnsupported,
    #[error("seat {seat} has no intent to play")]
    AwaitingInput { seat: usize },
    #[error("{action} is not allowed during {phase:?}")]
    UnexpectedAction { action: Action, phase: Phase },
    #[error("unsupported game type: '{0}'")]
    UnsupportedGame(String),
    #[error("duplicate player name: '{0}'")]
    DuplicateName(String),
    #[error("a table needs at least one seat")]
    NoSeats,
    #[error("no seat at index {0}")]
    NoSuchSeat(usize),
    #[error("seat '{0}' cannot be played by the dealer rule")]
    DealerSeat(String),
    #[error("bet of {bet} cannot grow by {amount}")]
    BetOverflow { bet: u64, amount: u64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RoleParseError> for TableError {
    fn from(e: RoleParseError) -> Self {
        match e {
            RoleParseError::Unknown(role) => TableError::UnknownRole(role),
        }
    }
}

/// A single blackjack table: the deck, the dealer, the seats and the round
/// state machine.
///
/// Every call to [`Table::have_turn`] moves the game forward by exactly one
/// unit: one bet, one deal, one playing decision, one dealer card or one
/// payout.
///
/// ```
/// use blackjack_table::agents::Role;
/// use blackjack_table::config::TableConfig;
/// use blackjack_table::table::{Phase, Table};
///
/// let cfg = TableConfig::default().with_seed(7);
/// let mut table = Table::new(cfg, "blackjack", "AI-2", Role::Automated).unwrap();
/// while table.phase() != Phase::RoundOver {
///     table.have_turn().unwrap();
/// }
/// assert_eq!(table.results_log().len(), 1);
/// assert_eq!(table.round(), 2);
/// ```
pub struct Table {
    config: TableConfig,
    deck: Deck,
    dealer: Player,
    seats: Vec<Player>,
    current: usize,
    phase: Phase,
    round: u32,
    results_log: Vec<RoundSummary>,
    rng: ChaCha8Rng,
    pacing: Box<dyn Pacing>,
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("current", &self.current)
            .field("dealer", &self.dealer)
            .field("seats", &self.seats)
            .field("deck_len", &self.deck.len())
            .finish()
    }
}

impl Table {
    /// Seats `[AI-1, <human_name>, AI-3]` around a dealer. The middle seat is
    /// controlled by the agent for `human_role`; the outer seats are automated.
    pub fn new(
        config: TableConfig,
        game_type: &str,
        human_name: &str,
        human_role: Role,
    ) -> Result<Self, TableError> {
        if game_type != GAME_TYPE {
            return Err(TableError::UnsupportedGame(game_type.to_string()));
        }
        let seats = [("AI-1", Role::Automated), (human_name, human_role), ("AI-3", Role::Automated)]
            .into_iter()
            .map(|(name, role)| Player::new(name, config.starting_chips, agent_for(role, &config)))
            .collect();
        Self::with_seats(config, seats)
    }

    /// Same as [`Table::new`] with the role given by name (`ai`, `user`, `house`, ...).
    pub fn from_role_str(
        config: TableConfig,
        game_type: &str,
        human_name: &str,
        human_role: &str,
    ) -> Result<Self, TableError> {
        let role = human_role.parse::<Role>()?;
        Self::new(config, game_type, human_name, role)
    }

    /// Build a table around an arbitrary, non-empty list of uniquely named seats.
    /// A seat driven by [`Role::Dealer`] is rejected: it can never place a bet.
    pub fn with_seats(config: TableConfig, seats: Vec<Player>) -> Result<Self, TableError> {
        config.validate()?;
        if seats.is_empty() {
            return Err(TableError::NoSeats);
        }
        let mut names = HashSet::new();
        names.insert(DEALER_NAME);
        for p in &seats {
            if p.role() == Role::Dealer {
                return Err(TableError::DealerSeat(p.name().to_string()));
            }
            if !names.insert(p.name()) {
                return Err(TableError::DuplicateName(p.name().to_string()));
            }
        }
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let dealer = Player::new(DEALER_NAME, 0, agent_for(Role::Dealer, &config));
        Ok(Self {
            deck: Deck::new(&config),
            config,
            dealer,
            seats,
            current: 0,
            phase: Phase::Betting,
            round: 1,
            results_log: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            pacing: Box::new(NoPacing),
        })
    }

    /// Install a pacing hook, called before every automated or dealer decision.
    pub fn with_pacing(mut self, pacing: impl Pacing + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the round number, starting at 1
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the current seat index
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn seats(&self) -> &[Player] {
        &self.seats
    }

    pub fn seat(&self, idx: usize) -> Option<&Player> {
        self.seats.get(idx)
    }

    pub fn seat_index(&self, name: &str) -> Option<usize> {
        self.seats.iter().position(|p| p.name() == name)
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn results_log(&self) -> &[RoundSummary] {
        &self.results_log
    }

    pub fn history_recent(&self, n: usize) -> &[RoundSummary] {
        let start = self.results_log.len().saturating_sub(n);
        &self.results_log[start..]
    }

    /// The participant whose decision the next [`Table::have_turn`] requests.
    /// Once every seat has finished acting this is the dealer.
    pub fn turn_player(&self) -> &Player {
        match self.phase {
            Phase::Acting => match self.next_unresolved() {
                Some(i) => &self.seats[i],
                None => &self.dealer,
            },
            _ => &self.seats[self.current],
        }
    }

    /// Write an intent into a seat's agent. False if the seat does not exist,
    /// does not take input, or already has an intent waiting.
    pub fn submit(&mut self, seat: usize, intent: Intent) -> bool {
        self.seats.get_mut(seat).is_some_and(|p| p.receive(intent))
    }

    /// Whether some seat has run out of chips.
    pub fn any_broke(&self) -> bool {
        self.seats.iter().any(|p| p.chips() <= 0)
    }

    /// Advance the state machine by one unit.
    pub fn have_turn(&mut self) -> Result<(), TableError> {
        match self.phase {
            Phase::Betting => self.betting_step(),
            Phase::Dealing => {
                self.set_phase(Phase::Acting);
                Ok(())
            }
            Phase::Acting => self.acting_step(),
            Phase::Evaluating => {
                self.evaluate_round();
                Ok(())
            }
            Phase::RoundOver => Err(TableError::InvalidPhaseTransition {
                phase: Phase::RoundOver,
                operation: "have_turn",
            }),
        }
    }

    /// Leave `RoundOver` and open betting for the next round. The seat index
    /// is carried over as is.
    pub fn next_round(&mut self) -> Result<(), TableError> {
        if self.phase != Phase::RoundOver {
            return Err(TableError::InvalidPhaseTransition {
                phase: self.phase,
                operation: "next_round",
            });
        }
        self.set_phase(Phase::Betting);
        Ok(())
    }

    /// Step until the round is settled, opening it first if the table is idle
    /// in `RoundOver`. Fails like [`Table::have_turn`], including when a human
    /// seat has no intent waiting.
    pub fn run_round(&mut self) -> Result<(), TableError> {
        if self.phase == Phase::RoundOver {
            self.next_round()?;
        }
        while self.phase != Phase::RoundOver {
            self.have_turn()?;
        }
        Ok(())
    }

    fn betting_step(&mut self) -> Result<(), TableError> {
        let seat = self.current;
        let decision = self.request_seat(seat)?;
        if decision.action != Action::Bet {
            return Err(TableError::UnexpectedAction {
                action: decision.action,
                phase: Phase::Betting,
            });
        }
        let p = &mut self.seats[seat];
        p.bet = decision.amount;
        p.status = Status::Acting;

        if seat + 1 >= self.seats.len() {
            self.current = 0;
            self.deal()?;
            self.set_phase(Phase::Dealing);
        } else {
            self.current += 1;
        }
        Ok(())
    }

    /// Shuffle, then two passes of one card to every seat followed by the dealer.
    fn deal(&mut self) -> Result<(), TableError> {
        self.deck.shuffle_with(&mut self.rng);
        for _ in 0..2 {
            for p in &mut self.seats {
                p.hand.push(self.deck.draw_one()?);
            }
            self.dealer.hand.push(self.deck.draw_one()?);
        }
        self.dealer.status = Status::Acting;
        Ok(())
    }

    fn acting_step(&mut self) -> Result<(), TableError> {
        if let Some(seat) = self.next_unresolved() {
            self.current = seat;
            let decision = self.request_seat(seat)?;
            play(&mut self.seats[seat], &mut self.deck, decision)?;
            if self.seats[seat].status == Status::RoundOver {
                self.current = (seat + 1) % self.seats.len();
            }
            return Ok(());
        }

        if self.dealer.status == Status::RoundOver {
            self.set_phase(Phase::Evaluating);
            return Ok(());
        }

        self.pacing.pause(Role::Dealer);
        let dealer_seat = self.seats.len();
        let decision = self.dealer.decide(None).map_err(|e| match e {
            DecisionError::AwaitingInput => TableError::AwaitingInput { seat: dealer_seat },
        })?;
        log::trace!("{} decides {} on {}", self.dealer.name, decision, self.dealer.score());
        play(&mut self.dealer, &mut self.deck, decision)
    }

    fn request_seat(&mut self, seat: usize) -> Result<Decision, TableError> {
        let up = self.dealer.hand.first();
        let player = &mut self.seats[seat];
        self.pacing.pause(player.role());
        let decision = player.decide(up).map_err(|e| match e {
            DecisionError::AwaitingInput => TableError::AwaitingInput { seat },
        })?;
        log::trace!("{} ({}) decides {}", player.name, player.role(), decision);
        Ok(decision)
    }

    fn evaluate_round(&mut self) {
        let dealer_score = self.dealer.score();
        for p in &mut self.seats {
            let outcome = payout::apply(p, dealer_score);
            log::debug!("{} {:?}: {} vs {}, chips {}", p.name, outcome, p.score(), dealer_score, p.chips);
        }
        self.results_log.push(RoundSummary::capture(self.round, &self.dealer, &self.seats));
        log::info!("round {} settled, dealer total {}", self.round, dealer_score);

        for p in &mut self.seats {
            p.clear_round();
        }
        self.dealer.clear_round();
        self.deck.reset();
        self.round += 1;
        self.set_phase(Phase::RoundOver);
    }

    fn next_unresolved(&self) -> Option<usize> {
        let n = self.seats.len();
        (0..n).map(|k| (self.current + k) % n).find(|&i| self.seats[i].status != Status::RoundOver)
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("round {}: {:?} -> {:?}", self.round, self.phase, phase);
        self.phase = phase;
    }
}

/// Apply a playing decision to `player`.
fn play(player: &mut Player, deck: &mut Deck, decision: Decision) -> Result<(), TableError> {
    match decision.action {
        Action::Stand => player.status = Status::RoundOver,
        Action::Hit | Action::Double => {
            let bet = player
                .bet
                .checked_add(decision.amount)
                .ok_or(TableError::BetOverflow { bet: player.bet, amount: decision.amount })?;
            player.hand.push(deck.draw_one()?);
            player.bet = bet;
            if player.hand.is_bust() {
                player.status = Status::RoundOver;
            }
        }
        Action::Surrender => return Err(TableError::SurrenderUnsupported),
        Action::Bet => {
            return Err(TableError::UnexpectedAction { action: Action::Bet, phase: Phase::Acting })
        }
    }
    Ok(())
}
