use crate::hand::Hand;
use crate::player::Player;
use serde::Serialize;

/// The dealer's final hand for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealerSummary {
    pub name: String,
    pub hand: Hand,
    pub total: u32,
}

/// One seat's state right after payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSummary {
    pub name: String,
    pub win_amount: i64,
    pub chips: i64,
    pub hand: Hand,
    pub total: u32,
}

/// Entry appended to the results log at the end of every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub dealer: DealerSummary,
    pub seats: Vec<SeatSummary>,
}

impl RoundSummary {
    pub(crate) fn capture(round: u32, dealer: &Player, seats: &[Player]) -> Self {
        Self {
            round,
            dealer: DealerSummary {
                name: dealer.name().to_string(),
                hand: dealer.hand().clone(),
                total: dealer.score(),
            },
            seats: seats
                .iter()
                .map(|p| SeatSummary {
                    name: p.name().to_string(),
                    win_amount: p.win_amount(),
                    chips: p.chips(),
                    hand: p.hand().clone(),
                    total: p.score(),
                })
                .collect(),
        }
    }

    pub fn seat(&self, name: &str) -> Option<&SeatSummary> {
        self.seats.iter().find(|s| s.name == name)
    }

    /// Compact JSON, one object per round.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
