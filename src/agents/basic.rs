use crate::cards::Rank;
use crate::decision::Decision;
use crate::hand::Hand;
use crate::player::Status;

use super::{Agent, DecisionContext, DecisionError, Role};

const TEN_OR_ACE: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];
const THREE_TO_SIX: [Rank; 4] = [Rank::Three, Rank::Four, Rank::Five, Rank::Six];
const TWO_TO_SIX: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];

/// Fixed-stake bettor that plays a hardcoded basic-strategy table.
///
/// Lookups run in three tiers and the first tier that matches wins:
/// pairs, then hands holding an Ace, then hard totals.
#[derive(Debug, Clone, Copy)]
pub struct AutomatedStrategy {
    stake: u64,
}

impl AutomatedStrategy {
    pub fn new(stake: u64) -> Self {
        Self { stake }
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    /// Playing decision for `hand` against the dealer's up-card rank.
    pub fn play(hand: &Hand, bet: u64, up: Option<Rank>) -> Decision {
        let shows = |set: &[Rank]| up.is_some_and(|r| set.contains(&r));

        if let Some(rank) = hand.pair_rank() {
            return match rank {
                // Nines are caught here, ahead of their own rule below.
                Rank::Ace
                | Rank::Two
                | Rank::Three
                | Rank::Four
                | Rank::Six
                | Rank::Seven
                | Rank::Eight
                | Rank::Nine => Decision::hit(),
                Rank::Five if shows(&TEN_OR_ACE) => Decision::hit(),
                Rank::Five => Decision::double(bet),
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Decision::stand(),
            };
        }

        if hand.has_ace() {
            return if hand.holds_any(&[Rank::Two, Rank::Three]) {
                if shows(&[Rank::Five, Rank::Six]) {
                    Decision::double(bet)
                } else {
                    Decision::hit()
                }
            } else if hand.holds_any(&[Rank::Four, Rank::Five, Rank::Six]) {
                if shows(&THREE_TO_SIX) {
                    Decision::double(bet)
                } else {
                    Decision::hit()
                }
            } else if hand.holds(Rank::Seven) {
                if shows(&THREE_TO_SIX) {
                    Decision::hit()
                } else if shows(&[Rank::Two, Rank::Seven, Rank::Eight]) {
                    Decision::stand()
                } else {
                    Decision::hit()
                }
            } else {
                Decision::stand()
            };
        }

        match hand.score() {
            17.. => Decision::stand(),
            ..=8 => Decision::hit(),
            13..=16 if shows(&TWO_TO_SIX) => Decision::stand(),
            13..=16 => Decision::hit(),
            12 if shows(&[Rank::Four, Rank::Five, Rank::Six]) => Decision::stand(),
            12 => Decision::hit(),
            11 if up == Some(Rank::Ace) => Decision::hit(),
            11 => Decision::double(bet),
            10 if shows(&TEN_OR_ACE) => Decision::hit(),
            10 => Decision::double(bet),
            9 if shows(&THREE_TO_SIX) => Decision::double(bet),
            _ => Decision::hit(),
        }
    }
}

impl Agent for AutomatedStrategy {
    fn role(&self) -> Role {
        Role::Automated
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision, DecisionError> {
        if ctx.status == Status::Betting {
            return Ok(Decision::bet(self.stake));
        }
        let up = ctx.dealer_up_card.map(|c| c.rank());
        Ok(Self::play(ctx.hand, ctx.bet, up))
    }
}
