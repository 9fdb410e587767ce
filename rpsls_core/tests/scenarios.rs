use rpsls_core::{Game, Gesture, Player, RULES, Seat};

fn mary_vs_john() -> Game {
    Game::new(Player::new("Mary"), Player::new("John"))
}

#[test]
fn mary_rock_beats_john_scissors() {
    let mut game = mary_vs_john();
    game.player_mut(Seat::One).set_gesture(Gesture::Rock);
    game.player_mut(Seat::Two).set_gesture(Gesture::Scissors);

    let winner = game.play().map(|p| p.name().to_string());
    assert_eq!(winner.as_deref(), Some("Mary"));
    assert_eq!(game.winner().map(Player::name), Some("Mary"));
}

#[test]
fn scissors_against_scissors_has_no_winner() {
    let mut game = mary_vs_john();
    game.player_mut(Seat::One).set_gesture(Gesture::Scissors);
    game.player_mut(Seat::Two).set_gesture(Gesture::Scissors);
    game.play();

    assert!(game.winner().is_none());
    assert!(game.report().is_some_and(|r| r.is_tie()));
}

#[test]
fn every_winning_combo_from_the_table() {
    for rule in RULES.iter() {
        let (beater, beaten) = rule.pair();
        let mut game = mary_vs_john();
        game.player_mut(Seat::One).set_gesture(beater);
        game.player_mut(Seat::Two).set_gesture(beaten);
        game.play();
        assert_eq!(game.winner_name(), Some("Mary"), "{}", rule);
    }
}

#[test]
fn same_instances_across_rounds() {
    let mut game = mary_vs_john();

    game.player_mut(Seat::One).set_gesture(Gesture::Rock);
    game.player_mut(Seat::Two).set_gesture(Gesture::Scissors);
    game.play();
    assert_eq!(game.winner_seat(), Some(Seat::One));

    game.player_mut(Seat::Two).set_gesture(Gesture::Paper);
    game.play();
    assert_eq!(game.winner_seat(), Some(Seat::Two));
    assert_eq!(game.winning_rule().map(ToString::to_string).as_deref(), Some("Paper covers Rock"));

    game.player_mut(Seat::One).set_gesture(Gesture::Paper);
    game.play();
    assert_eq!(game.winner_seat(), None);
}

#[test]
fn report_serializes_to_json() {
    let mut game = mary_vs_john();
    game.player_mut(Seat::One).set_gesture(Gesture::Spock);
    game.player_mut(Seat::Two).set_gesture(Gesture::Lizard);
    game.play();

    let json = serde_json::to_string(&game.report().unwrap()).unwrap();
    assert!(json.contains("\"winner\":\"John\""), "{}", json);
    assert!(json.contains("\"rule\":\"Lizard poisons Spock\""), "{}", json);
}

#[test]
fn players_carry_over_to_the_next_game() {
    let mary = Player::new("Mary");
    let john = Player::new("John");
    let ids = (mary.id(), john.id());

    let mut first = Game::new(mary, john);
    first.player_mut(Seat::One).set_gesture(Gesture::Paper);
    first.player_mut(Seat::Two).set_gesture(Gesture::Spock);
    first.play();
    assert_eq!(first.winner_name(), Some("Mary"));

    let (mary, mut john) = first.into_players();
    assert_eq!((mary.id(), john.id()), ids);

    john.set_gesture(Gesture::Lizard);
    let mut second = Game::new(mary, john);
    second.play();
    assert_eq!(second.winner().map(Player::id), Some(ids.1));
    let rule = second.winning_rule().map(ToString::to_string);
    assert_eq!(rule.as_deref(), Some("Lizard eats Paper"));
}
