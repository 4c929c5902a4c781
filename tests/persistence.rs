//! Save/load integration tests.

use pyramid_game::{
    Card, Game, PersistenceError, PyramidError, SetupError, Suit, from_json, load_game,
    save_game, to_json,
};
use serde_json::{Value, json};

fn played_game() -> Game {
    let mut game = Game::new(["Ann", "Bob", "Cas"], 2024).unwrap();
    game.play_turn(Some(0), Some(1), Some(1), true).unwrap();
    game.play_turn(Some(1), Some(2), Some(3), false).unwrap();
    game.play_turn(None, None, None, true).unwrap();
    game
}

fn assert_same_game(loaded: &Game, original: &Game) {
    assert_eq!(loaded.snapshot(), original.snapshot());
    for (a, b) in loaded.players().iter().zip(original.players()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.hand(), b.hand());
        assert_eq!(a.revealed(), b.revealed());
        assert_eq!(a.drinks_taken(), b.drinks_taken());
    }
}

#[test]
fn json_round_trip_preserves_state() {
    let game = played_game();
    let json = to_json(&game).unwrap();
    let mut loaded = from_json(&json).unwrap();

    assert_same_game(&loaded, &game);
    assert_eq!(loaded.cards_remaining(), game.cards_remaining());

    let mut original = game;
    let expected = original.reveal_next_card().unwrap();
    assert_eq!(loaded.reveal_next_card().unwrap().rank, expected.rank);
}

#[test]
fn fresh_game_round_trip_resumes_at_first_card() {
    let game = Game::new(["A", "B"], 5).unwrap();
    let expected = game.pyramid().rows()[0][0];

    let mut loaded = from_json(&to_json(&game).unwrap()).unwrap();
    assert_eq!(loaded.reveal_next_card(), Some(expected));
    let names: Vec<&str> = loaded.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn finished_game_round_trip_stays_finished() {
    let mut game = Game::new(["A", "B"], 6).unwrap();
    while game.reveal_next_card().is_some() {}

    let mut loaded = from_json(&to_json(&game).unwrap()).unwrap();
    assert!(loaded.is_finished());
    assert!(loaded.reveal_next_card().is_none());
}

#[test]
fn json_uses_saved_game_field_names() {
    let game = played_game();
    let value: Value = serde_json::from_str(&to_json(&game).unwrap()).unwrap();

    let player = &value["players"][1];
    assert_eq!(player["name"], "Bob");
    assert_eq!(player["hand"].as_array().map(Vec::len), Some(4));
    assert_eq!(player["revealed"], json!([3]));
    assert!(player["drinks_taken"].is_u64());

    let first = game.pyramid().rows()[0][0];
    assert_eq!(
        value["pyramid"]["rows"][0][0],
        json!([first.symbol(), first.suit.name()])
    );
    assert_eq!(value["pyramid"]["pos"], json!({"row": 0, "col": 3}));
    assert_eq!(value["rest_stapel"].as_array().map(Vec::len), Some(4));
}

#[test]
fn hand_written_save_loads() {
    let saved = json!({
        "players": [
            {"name": "Ann", "hand": [["A", "hearts"], ["2", "clubs"], ["10", "spades"], ["K", "diamonds"]], "revealed": [2], "drinks_taken": 3},
            {"name": "Bob", "hand": [["3", "hearts"], ["4", "clubs"], ["5", "spades"], ["6", "diamonds"]], "revealed": [], "drinks_taken": 0}
        ],
        "pyramid": {
            "rows": [[["7", "hearts"], ["8", "hearts"]], [["9", "hearts"]]],
            "pos": {"row": 0, "col": 1}
        },
        "rest_stapel": [["Q", "spades"]]
    });

    let mut game = from_json(&saved.to_string()).unwrap();

    assert_eq!(game.players()[0].hand()[2], Card::new(Suit::Spades, 10));
    assert!(game.players()[0].is_revealed(2));
    assert_eq!(game.players()[0].drinks_taken(), 3);
    assert_eq!(game.rest_stack(), [Card::new(Suit::Spades, 12)]);
    assert_eq!(game.cards_remaining(), 2);
    assert_eq!(game.reveal_next_card(), Some(Card::new(Suit::Hearts, 8)));
    assert_eq!(game.reveal_next_card(), Some(Card::new(Suit::Hearts, 9)));
    assert!(game.reveal_next_card().is_none());
}

#[test]
fn load_rejects_bad_saves() {
    let game = Game::new(["A", "B"], 1).unwrap();

    let mut snapshot = game.snapshot();
    snapshot.players.truncate(1);
    assert!(matches!(
        Game::from_snapshot(snapshot),
        Err(PersistenceError::Setup(SetupError::InvalidPlayerCount(1)))
    ));

    let mut snapshot = game.snapshot();
    snapshot.players[0].hand.truncate(1);
    assert!(matches!(
        Game::from_snapshot(snapshot),
        Err(PersistenceError::InvalidHand {
            player: 0,
            found: 1
        })
    ));

    let mut snapshot = game.snapshot();
    let extra = snapshot.rest_stack[0];
    snapshot.players[1].hand.push(extra);
    assert!(matches!(
        Game::from_snapshot(snapshot),
        Err(PersistenceError::InvalidHand {
            player: 1,
            found: 5
        })
    ));

    let mut snapshot = game.snapshot();
    snapshot.players[1].revealed = vec![4];
    assert!(matches!(
        Game::from_snapshot(snapshot),
        Err(PersistenceError::InvalidRevealed {
            player: 1,
            index: 4,
            hand_size: 4
        })
    ));

    let mut snapshot = game.snapshot();
    snapshot.pyramid.rows.pop();
    assert!(matches!(
        Game::from_snapshot(snapshot),
        Err(PersistenceError::Pyramid(PyramidError::InvalidRow { .. }))
    ));

    assert!(matches!(
        from_json(r#"{"players": []}"#),
        Err(PersistenceError::Json(_))
    ));

    let bad_card = to_json(&game).unwrap().replacen("hearts", "stars", 1);
    assert!(matches!(from_json(&bad_card), Err(PersistenceError::Json(_))));
}

#[test]
fn save_and_load_file() {
    let game = played_game();
    let path = std::env::temp_dir().join(format!("pyramid-game-{}.json", std::process::id()));

    save_game(&game, &path).unwrap();
    let loaded = load_game(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_same_game(&loaded, &game);
    assert!(matches!(load_game(&path), Err(PersistenceError::Io(_))));
}
