use std::thread;

use chess_rules::SharedGame;

#[test]
fn threads_take_turns_on_one_game() {
    let game = SharedGame::new();
    let white = game.clone();
    let black = game.clone();

    let handle = thread::spawn(move || {
        white.play("e2e4").unwrap();
    });
    handle.join().unwrap();

    let handle = thread::spawn(move || {
        black.play("e7e5").unwrap();
    });
    handle.join().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.history().len(), 2);
    assert_eq!(game.legal_moves().len(), 29);
}

#[test]
fn concurrent_readers_see_consistent_state() {
    let game = SharedGame::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let game = game.clone();
            thread::spawn(move || game.with_state(|state| state.perft(2)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 400);
    }
    assert!(game.snapshot().history().is_empty());
}

#[test]
fn rejected_move_leaves_game_unchanged() {
    let game = SharedGame::new();
    assert!(game.play("e2e5").is_err());
    assert!(game.undo().is_none());
    assert_eq!(game.legal_moves().len(), 20);
}
