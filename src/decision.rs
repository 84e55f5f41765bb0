use std::fmt;

/// What a seat or the dealer chose to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    Bet,
    Hit,
    Stand,
    Double,
    Surrender,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Bet => "bet",
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double",
            Action::Surrender => "surrender",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One answer to a decision request: an action plus the chips it moves.
///
/// `bet` carries the stake, `double` carries the bet being matched, every
/// other action carries 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decision {
    pub action: Action,
    pub amount: u64,
}

impl Decision {
    pub const fn bet(amount: u64) -> Self {
        Self { action: Action::Bet, amount }
    }

    pub const fn hit() -> Self {
        Self { action: Action::Hit, amount: 0 }
    }

    pub const fn stand() -> Self {
        Self { action: Action::Stand, amount: 0 }
    }

    pub const fn double(current_bet: u64) -> Self {
        Self { action: Action::Double, amount: current_bet }
    }

    pub const fn surrender() -> Self {
        Self { action: Action::Surrender, amount: 0 }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.amount)
    }
}
