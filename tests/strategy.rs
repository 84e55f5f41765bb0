use blackjack_table::agents::{Agent, AutomatedStrategy, DealerRule, DecisionContext};
use blackjack_table::cards::Rank;
use blackjack_table::decision::{Action, Decision};
use blackjack_table::hand::Hand;
use blackjack_table::player::Status;

fn hand(s: &str) -> Hand {
    s.parse().unwrap()
}

fn auto(cards: &str, up: Rank) -> Decision {
    AutomatedStrategy::play(&hand(cards), 50, Some(up))
}

fn dealer(cards: &str) -> Action {
    let h = hand(cards);
    let ctx = DecisionContext { hand: &h, bet: 0, chips: 0, status: Status::Acting, dealer_up_card: None };
    DealerRule::default().decide(&ctx).unwrap().action
}

#[test]
fn hard_sixteen_hits_against_seven() {
    assert_eq!(auto("10H 6S", Rank::Seven), Decision::hit());
}

#[test]
fn soft_eighteen_stands_against_two() {
    assert_eq!(auto("AH 7S", Rank::Two), Decision::stand());
}

#[test]
fn eights_always_hit() {
    for up in Rank::ALL {
        assert_eq!(auto("8H 8S", up).action, Action::Hit, "8,8 vs {up}");
    }
}

#[test]
fn nines_are_caught_by_the_hit_bucket() {
    for up in [Rank::Ace, Rank::Seven, Rank::Ten, Rank::King, Rank::Two] {
        assert_eq!(auto("9H 9D", up).action, Action::Hit, "9,9 vs {up}");
    }
}

#[test]
fn ten_valued_pairs_stand() {
    assert_eq!(auto("QH QS", Rank::Ace).action, Action::Stand);
    assert_eq!(auto("10H 10S", Rank::Six).action, Action::Stand);
}

#[test]
fn double_carries_the_bet_and_others_carry_nothing() {
    let d = AutomatedStrategy::play(&hand("6H 5S"), 100, Some(Rank::Six));
    assert_eq!(d, Decision { action: Action::Double, amount: 100 });
    let h = AutomatedStrategy::play(&hand("10H 6S"), 100, Some(Rank::Nine));
    assert_eq!(h.amount, 0);
}

#[test]
fn dealer_rule_ignores_up_card_and_softness() {
    assert_eq!(dealer("10H 6S"), Action::Hit);
    assert_eq!(dealer("10H 7S"), Action::Stand);
    assert_eq!(dealer("AH 6S"), Action::Stand);
    assert_eq!(dealer("AH 5S"), Action::Hit);
}

#[test]
fn automated_bets_fixed_stake() {
    let h = Hand::default();
    let ctx = DecisionContext { hand: &h, bet: 0, chips: 5, status: Status::Betting, dealer_up_card: None };
    assert_eq!(AutomatedStrategy::new(50).decide(&ctx).unwrap(), Decision::bet(50));
}
