//! Agents: one decision maker per role.
//!
//! Every [`crate::player::Player`] owns a boxed [`Agent`]. The table asks it for a
//! [`Decision`] and applies the result itself, so agents never mutate players.
//! Three agents ship with the crate: [`AutomatedStrategy`] (basic strategy),
//! [`HumanInput`] (intents written by a UI) and [`DealerRule`] (stand on 17).

use crate::cards::Card;
use crate::config::TableConfig;
use crate::decision::Decision;
use crate::hand::Hand;
use crate::player::Status;
use core::fmt;
use std::str::FromStr;
use std::time::Duration;

mod basic;

pub use basic::AutomatedStrategy;

/// Which kind of participant an agent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    Automated,
    Human,
    Dealer,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Automated => "automated",
            Role::Human => "human",
            Role::Dealer => "dealer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoleParseError {
    #[error("unknown role: '{0}'")]
    Unknown(String),
}

impl FromStr for Role {
    type Err = RoleParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "automated" | "bot" => Ok(Role::Automated),
            "user" | "human" => Ok(Role::Human),
            "house" | "dealer" => Ok(Role::Dealer),
            _ => Err(RoleParseError::Unknown(s.to_string())),
        }
    }
}

/// An action a UI writes into a human seat before stepping the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Intent {
    Bet(u64),
    Hit,
    Stand,
    Double,
    Surrender,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecisionError {
    #[error("no intent has been submitted for this seat")]
    AwaitingInput,
}

/// Everything an agent may look at when deciding.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub hand: &'a Hand,
    pub bet: u64,
    pub chips: i64,
    pub status: Status,
    /// The dealer's first card, once dealt.
    pub dealer_up_card: Option<Card>,
}

/// A seat controller asked for a decision whenever its player is up.
pub trait Agent {
    fn role(&self) -> Role;

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision, DecisionError>;

    /// Accept an intent from outside the table. Only human input uses this.
    fn receive(&mut self, _intent: Intent) -> bool {
        false
    }

    /// Whether an intent is waiting to be consumed.
    fn has_pending(&self) -> bool {
        false
    }
}

/// Build the stock agent for `role`.
pub fn agent_for(role: Role, config: &TableConfig) -> Box<dyn Agent> {
    match role {
        Role::Automated => Box::new(AutomatedStrategy::new(config.automated_stake)),
        Role::Human => Box::new(HumanInput::new()),
        Role::Dealer => Box::new(DealerRule::new(config.dealer_stands_on)),
    }
}

/// Hits below the threshold, stands at or above it. Soft and hard totals are
/// treated alike and the up-card is ignored.
#[derive(Debug, Clone, Copy)]
pub struct DealerRule {
    stands_on: u32,
}

impl DealerRule {
    pub fn new(stands_on: u32) -> Self {
        Self { stands_on }
    }
}

impl Default for DealerRule {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DEALER_STANDS_ON)
    }
}

impl Agent for DealerRule {
    fn role(&self) -> Role {
        Role::Dealer
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision, DecisionError> {
        if ctx.hand.score() >= self.stands_on {
            Ok(Decision::stand())
        } else {
            Ok(Decision::hit())
        }
    }
}

/// Replays the intent most recently written by the presentation layer.
#[derive(Debug, Default)]
pub struct HumanInput {
    pending: Option<Intent>,
}

impl HumanInput {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Agent for HumanInput {
    fn role(&self) -> Role {
        Role::Human
    }

    fn receive(&mut self, intent: Intent) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(intent);
        true
    }

    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision, DecisionError> {
        let intent = self.pending.take().ok_or(DecisionError::AwaitingInput)?;
        Ok(match intent {
            Intent::Bet(amount) => Decision::bet(amount),
            Intent::Hit => Decision::hit(),
            Intent::Stand => Decision::stand(),
            Intent::Double => Decision::double(ctx.bet),
            Intent::Surrender => Decision::surrender(),
        })
    }
}

/// Hook invoked before an automated or dealer agent is asked to decide. It
/// exists for presentation pacing only; the table never depends on it.
pub trait Pacing {
    fn pause(&mut self, role: Role);
}

/// Does nothing. The default for tests and batch simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn pause(&mut self, _role: Role) {}
}

/// Sleeps the calling thread for a fixed time per role.
#[derive(Debug, Clone, Copy)]
pub struct FixedPacing {
    pub automated: Duration,
    pub dealer: Duration,
}

impl FixedPacing {
    pub fn from_millis(automated_ms: u64, dealer_ms: u64) -> Self {
        Self {
            automated: Duration::from_millis(automated_ms),
            dealer: Duration::from_millis(dealer_ms),
        }
    }
}

impl Pacing for FixedPacing {
    fn pause(&mut self, role: Role) {
        let delay = match role {
            Role::Automated => self.automated,
            Role::Dealer => self.dealer,
            Role::Human => Duration::ZERO,
        };
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Action;

    fn ctx<'a>(hand: &'a Hand, status: Status, bet: u64) -> DecisionContext<'a> {
        DecisionContext { hand, bet, chips: 400, status, dealer_up_card: None }
    }

    #[test]
    fn role_parses_legacy_and_plain_names() {
        assert_eq!("ai".parse::<Role>().unwrap(), Role::Automated);
        assert_eq!("user".parse::<Role>().unwrap(), Role::Human);
        assert_eq!("House".parse::<Role>().unwrap(), Role::Dealer);
        assert_eq!("alien".parse::<Role>(), Err(RoleParseError::Unknown("alien".into())));
    }

    #[test]
    fn dealer_hits_sixteen_stands_seventeen() {
        let mut dealer = DealerRule::default();
        let sixteen: Hand = "10H 6S".parse().unwrap();
        let seventeen: Hand = "10H 7S".parse().unwrap();
        let soft_seventeen: Hand = "AH 6S".parse().unwrap();
        assert_eq!(dealer.decide(&ctx(&sixteen, Status::Acting, 0)).unwrap(), Decision::hit());
        assert_eq!(dealer.decide(&ctx(&seventeen, Status::Acting, 0)).unwrap(), Decision::stand());
        assert_eq!(
            dealer.decide(&ctx(&soft_seventeen, Status::Acting, 0)).unwrap(),
            Decision::stand()
        );
    }

    #[test]
    fn human_replays_one_intent_at_a_time() {
        let mut human = HumanInput::new();
        let hand: Hand = "9H 2S".parse().unwrap();
        assert_eq!(
            human.decide(&ctx(&hand, Status::Acting, 20)),
            Err(DecisionError::AwaitingInput)
        );
        assert!(human.receive(Intent::Double));
        assert!(!human.receive(Intent::Hit), "second intent rejected while one is pending");
        let d = human.decide(&ctx(&hand, Status::Acting, 20)).unwrap();
        assert_eq!(d.action, Action::Double);
        assert_eq!(d.amount, 20);
        assert!(!human.has_pending());
    }

    #[test]
    fn agent_for_dispatches_by_role() {
        let cfg = TableConfig::default();
        for role in [Role::Automated, Role::Human, Role::Dealer] {
            assert_eq!(agent_for(role, &cfg).role(), role);
        }
    }
}
