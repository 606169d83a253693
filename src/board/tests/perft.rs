//! Perft (performance test) for move generation correctness.
//!
//! Promotions always produce a queen, so only depths where the published
//! counts contain no under-promotions are checked, or the count is adjusted.

use std::time::Instant;

use super::{position, position_with};
use crate::board::{GameOptions, GameState};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43238)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
        depths: &[(1, 6)],
    },
    TestPosition {
        // 44 with under-promotions: d7xc8 counts once instead of four times.
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
        depths: &[(1, 41)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
        depths: &[(1, 46), (2, 2079)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6",
        depths: &[(1, 31), (2, 707)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -",
        depths: &[(1, 26), (2, 568), (3, 13744)],
    },
];

#[test]
fn test_all_perft_positions() {
    for test in TEST_POSITIONS {
        let mut game = position(test.fen);

        for &(depth, expected) in test.depths {
            let start = Instant::now();
            let nodes = game.perft(depth);
            let duration = start.elapsed();

            println!("  {} depth {}: {} nodes in {:?}", test.name, depth, nodes, duration);

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                test.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_leaves_game_untouched() {
    let mut game = position(TEST_POSITIONS[1].fen);
    let before = game.clone();

    game.perft(2);

    assert_eq!(game.board(), before.board());
    assert_eq!(game.castle_rights(), before.castle_rights());
    assert_eq!(game.en_passant_target(), before.en_passant_target());
    assert!(game.history().is_empty());
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(GameState::new().perft(0), 1);
}

#[test]
fn test_unrestricted_pins_overcount() {
    // Position 3 has a pawn pinned against the white king on the fifth rank.
    let fen = TEST_POSITIONS[2].fen;
    let strict = position(fen).perft(2);
    let loose = position_with(
        fen,
        GameOptions {
            enforce_pins: false,
        },
    )
    .perft(2);
    assert_eq!(strict, 191);
    assert!(loose > strict);
}
