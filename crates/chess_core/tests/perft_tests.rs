use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Color, Position, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 1_000_000;

/// (name, placement, side to move, [(depth, nodes)])
///
/// Positions are chosen so castling rights and under-promotion never come into
/// play within the listed depths.
const CASES: &[(&str, &str, Color, &[(u8, u64)])] = &[
    (
        "start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "rook endgame",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        Color::White,
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
];

#[test]
fn perft_known_counts() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|(name, placement, side, depths)| {
        let case_start = Instant::now();
        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!("Skipping {name} depth {depth} - set {FULL_PERFT_ENV}=1 to run all.");
                continue;
            }
            let mut pos = Position::from_placement(placement, *side).unwrap();
            let before = pos;
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for '{name}' at depth {depth}: expected {expected}, got {got}"
            );
            assert_eq!(pos, before, "perft must leave the position untouched");
        }
        eprintln!("{name}: ok in {:.2?}", case_start.elapsed());
    });
}

#[test]
fn perft_depth_zero_is_one() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 0), 1);
}

#[test]
fn perft_is_symmetric_for_black() {
    // Black to move from the mirrored start has the same tree size
    let mut pos = Position::from_placement(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::Black,
    )
    .unwrap();
    assert_eq!(perft(&mut pos, 3), 8_902);
}

#[test]
fn divide_sums_to_perft() {
    let mut pos = Position::startpos();
    let split = perft_divide(&mut pos, 3);
    assert_eq!(split.len(), 20);
    let total: u64 = split.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&mut pos, 3));
}
