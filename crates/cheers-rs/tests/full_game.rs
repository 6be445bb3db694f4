//! Plays whole games through the public API, from the home screen to the
//! end of the prompt pool.

use std::collections::HashSet;

use cheers_rs::prelude::*;

fn enter_players(nav: &mut Navigator, names: &[&str]) {
    let Screen::PlayerSetup(roster) = nav.screen_mut() else {
        panic!("expected the setup screen");
    };
    while roster.len() < names.len() {
        roster.add_slot().unwrap();
    }
    for (i, name) in names.iter().enumerate() {
        roster.set_name(i, *name).unwrap();
    }
}

fn session(nav: &mut Navigator) -> &mut GameSession {
    match nav.screen_mut() {
        Screen::Gameplay(session) => session,
        _ => panic!("expected the gameplay screen"),
    }
}

#[test]
fn default_catalog_game_serves_every_prompt_once() {
    let mut nav = Navigator::new(Catalog::default());
    nav.handle(NavEvent::Start).unwrap();
    enter_players(&mut nav, &["Alice", "Bob", "Carol"]);
    nav.handle(NavEvent::Play).unwrap();

    let game = session(&mut nav);
    let total = game.pool().len();
    let mut seen = HashSet::new();
    let mut seats = Vec::new();

    seen.insert(game.current_draw().to_string());
    seats.push(game.current_seat());
    for _ in 1..total {
        let draw = game.advance().clone();
        assert!(!draw.is_finished());
        assert!(seen.insert(draw.to_string()), "repeated prompt {draw}");
        seats.push(game.current_seat());
    }
    assert_eq!(seen.len(), total);
    assert!(game.pool().is_exhausted());

    // Seats follow 0, 1, 2, 0, 1, 2, ...
    for (turn, seat) in seats.iter().enumerate() {
        assert_eq!(*seat, turn % 3);
    }

    for _ in 0..3 {
        assert_eq!(game.advance().text(), "Game Finished!");
    }
    assert_eq!(game.pool().served(), total);
}

#[test]
fn blank_slots_are_skipped_in_turn_order() {
    let mut nav = Navigator::new(Catalog::default());
    nav.handle(NavEvent::Start).unwrap();
    enter_players(&mut nav, &["Alice", "", "Carol", "  "]);
    nav.handle(NavEvent::Play).unwrap();

    let game = session(&mut nav);
    assert_eq!(game.players().names(), vec!["Alice", "Carol"]);
    assert_eq!(game.current_player().name, "Alice");
    game.advance();
    assert_eq!(game.current_player().name, "Carol");
    game.advance();
    assert_eq!(game.current_player().name, "Alice");
}

#[test]
fn custom_catalog_from_config() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"["A", "B"]"#).unwrap();

    let config = GameConfig::default()
        .with_prompts_file(file.path())
        .with_players(["Alice", "Bob"])
        .with_seed(1);
    let catalog = config.load_catalog().unwrap();
    let mut nav = Navigator::from_config(&config, catalog);
    nav.handle(NavEvent::Play).unwrap();

    let game = session(&mut nav);
    let first = game.current_draw().to_string();
    let second = game.advance().to_string();
    let mut both = [first, second];
    both.sort();
    assert_eq!(both, ["A".to_string(), "B".to_string()]);
    assert_eq!(game.advance().to_string(), FINISHED_TEXT);
}
