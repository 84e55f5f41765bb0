use crate::agents::{Agent, DecisionContext, DecisionError, Intent, Role};
use crate::cards::Card;
use crate::decision::Decision;
use crate::hand::Hand;
use core::fmt;

/// Where a participant stands within the current round. Only the table changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Status {
    Betting,
    Acting,
    RoundOver,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Betting => "betting",
            Status::Acting => "acting",
            Status::RoundOver => "roundOver",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A seat or the dealer. Chips persist across rounds; hand and bet are cleared
/// by the table after every payout.
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) chips: i64,
    pub(crate) bet: u64,
    pub(crate) win_amount: i64,
    pub(crate) status: Status,
    agent: Box<dyn Agent>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("role", &self.role())
            .field("hand", &self.hand)
            .field("chips", &self.chips)
            .field("bet", &self.bet)
            .field("win_amount", &self.win_amount)
            .field("status", &self.status)
            .finish()
    }
}

impl Player {
    pub fn new(name: impl Into<String>, chips: i64, agent: Box<dyn Agent>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::default(),
            chips,
            bet: 0,
            win_amount: 0,
            status: Status::Betting,
            agent,
        }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role of the agent controlling this player
    pub fn role(&self) -> Role {
        self.agent.role()
    }

    /// Returns the cards held this round
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current hand score
    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    /// Returns the chip stack
    pub fn chips(&self) -> i64 {
        self.chips
    }

    /// Returns the chips staked this round
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the last settled result, see [`crate::payout::apply`]
    pub fn win_amount(&self) -> i64 {
        self.win_amount
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a submitted intent is still waiting to be played.
    pub fn has_pending_intent(&self) -> bool {
        self.agent.has_pending()
    }

    /// Hand an intent to this player's agent. Returns false when the agent does
    /// not take outside input or already holds one.
    pub fn receive(&mut self, intent: Intent) -> bool {
        self.agent.receive(intent)
    }

    pub(crate) fn decide(&mut self, dealer_up_card: Option<Card>) -> Result<Decision, DecisionError> {
        let ctx = DecisionContext {
            hand: &self.hand,
            bet: self.bet,
            chips: self.chips,
            status: self.status,
            dealer_up_card,
        };
        self.agent.decide(&ctx)
    }

    pub(crate) fn clear_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.status = Status::Betting;
    }
}
