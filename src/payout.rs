//! Settlement of one seat against the dealer.
//!
//! Equal totals are a loss for the seat: there is no push. A seat that wins
//! has its `win_amount` overwritten with the bet, a seat that loses has the bet
//! subtracted from it.

use crate::hand::BLACKJACK;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Win,
    Lose,
}

/// ```
/// use blackjack_table::payout::{settle, Outcome};
///
/// assert_eq!(settle(20, 19), Outcome::Win);
/// assert_eq!(settle(20, 20), Outcome::Lose);
/// assert_eq!(settle(22, 23), Outcome::Lose);
/// ```
pub fn settle(player_score: u32, dealer_score: u32) -> Outcome {
    if player_score > BLACKJACK {
        Outcome::Lose
    } else if dealer_score > BLACKJACK || player_score > dealer_score {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Settle `player` against `dealer_score` and move chips accordingly.
pub fn apply(player: &mut Player, dealer_score: u32) -> Outcome {
    let outcome = settle(player.score(), dealer_score);
    let bet = i64::try_from(player.bet).unwrap_or(i64::MAX);
    match outcome {
        Outcome::Win => {
            player.chips = player.chips.saturating_add(bet);
            player.win_amount = bet;
        }
        Outcome::Lose => {
            player.chips = player.chips.saturating_sub(bet);
            player.win_amount = player.win_amount.saturating_sub(bet);
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AutomatedStrategy;

    fn seat(hand: &str, bet: u64) -> Player {
        let mut p = Player::new("AI-1", 400, Box::new(AutomatedStrategy::new(50)));
        p.hand = hand.parse().unwrap();
        p.bet = bet;
        p
    }

    #[test]
    fn higher_total_wins_and_overwrites_win_amount() {
        let mut p = seat("10H KS", 50);
        p.win_amount = -100;
        assert_eq!(apply(&mut p, 19), Outcome::Win);
        assert_eq!(p.chips(), 450);
        assert_eq!(p.win_amount(), 50);
    }

    #[test]
    fn tie_falls_into_the_losing_branch() {
        let mut p = seat("10H KS", 50);
        assert_eq!(apply(&mut p, 20), Outcome::Lose);
        assert_eq!(p.chips(), 350);
        assert_eq!(p.win_amount(), -50);
    }

    #[test]
    fn bust_loses_even_when_dealer_busts() {
        let mut p = seat("10H KS 5D", 50);
        assert_eq!(apply(&mut p, 25), Outcome::Lose);
        assert_eq!(p.chips(), 350);
    }

    #[test]
    fn dealer_bust_pays_standing_seat() {
        let mut p = seat("10H 2S", 100);
        assert_eq!(apply(&mut p, 22), Outcome::Win);
        assert_eq!(p.chips(), 500);
        assert_eq!(p.win_amount(), 100);
    }

    #[test]
    fn losses_accumulate_in_win_amount() {
        let mut p = seat("10H 2S", 50);
        apply(&mut p, 20);
        apply(&mut p, 20);
        assert_eq!(p.win_amount(), -100);
        assert_eq!(p.chips(), 300);
    }
}
