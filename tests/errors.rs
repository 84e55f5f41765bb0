use blackjack_table::agents::{AutomatedStrategy, DealerRule, Role};
use blackjack_table::config::{ConfigError, TableConfig};
use blackjack_table::player::Player;
use blackjack_table::table::{Table, TableError, DEALER_NAME, GAME_TYPE};

#[test]
fn only_blackjack_tables_are_built() {
    let err = Table::new(TableConfig::default(), "poker", "you", Role::Human).unwrap_err();
    assert!(matches!(err, TableError::UnsupportedGame(ref g) if g == "poker"));
    assert_eq!(err.to_string(), "unsupported game type: 'poker'");
}

#[test]
fn unknown_role_names_fail() {
    let err = Table::from_role_str(TableConfig::default(), GAME_TYPE, "you", "spectator").unwrap_err();
    assert!(matches!(err, TableError::UnknownRole(ref r) if r == "spectator"));
    for role in ["ai", "user", "human", "bot"] {
        assert!(Table::from_role_str(TableConfig::default(), GAME_TYPE, "you", role).is_ok(), "{role}");
    }
}

#[test]
fn seat_names_must_be_unique() {
    assert!(matches!(
        Table::new(TableConfig::default(), GAME_TYPE, "AI-3", Role::Automated),
        Err(TableError::DuplicateName(ref n)) if n == "AI-3"
    ));
    let seats = vec![Player::new(DEALER_NAME, 400, Box::new(AutomatedStrategy::new(50)))];
    assert!(matches!(
        Table::with_seats(TableConfig::default(), seats),
        Err(TableError::DuplicateName(_))
    ));
}

#[test]
fn dealer_rule_cannot_take_a_seat() {
    for role in ["house", "dealer"] {
        let err = Table::from_role_str(TableConfig::default(), GAME_TYPE, "you", role).unwrap_err();
        assert!(matches!(err, TableError::DealerSeat(ref n) if n == "you"), "{role}");
    }
    let seats = vec![
        Player::new("AI-1", 400, Box::new(AutomatedStrategy::new(50))),
        Player::new("croupier", 400, Box::new(DealerRule::default())),
    ];
    let err = Table::with_seats(TableConfig::default(), seats).unwrap_err();
    assert_eq!(err.to_string(), "seat 'croupier' cannot be played by the dealer rule");
}

#[test]
fn empty_table_is_rejected() {
    assert!(matches!(
        Table::with_seats(TableConfig::default(), Vec::new()),
        Err(TableError::NoSeats)
    ));
}

#[test]
fn invalid_config_surfaces_through_the_table() {
    let cfg = TableConfig { automated_stake: 0, ..TableConfig::default() };
    let err = Table::new(cfg, GAME_TYPE, "you", Role::Human).unwrap_err();
    assert!(matches!(err, TableError::Config(ConfigError::Invalid(_))));

    let missing = TableConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, ConfigError::Io(_)));
}
