//! Perft benchmark for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [placement] [w|b]
//!
//! Examples:
//!   # Default: depth 4 over the built-in positions
//!   cargo run --release --example perft_bench -p chess_core
//!
//!   # Custom depth and position
//!   cargo run --release --example perft_bench -p chess_core -- 3 "r3k2r/8/8/8/8/8/8/R3K2R" b

use chess_core::{Color, Position, perft};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str, Color)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    if let Some(placement) = args.get(2) {
        let side = args
            .get(3)
            .and_then(|s| s.parse().ok())
            .unwrap_or(Color::White);
        match Position::from_placement(placement, side) {
            Ok(pos) => run_single_position(pos, depth),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(mut pos: Position, depth: u8) {
    println!("Position: {} ({} to move)", pos.placement(), pos.side_to_move);
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&mut pos, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for &(name, placement, side) in TEST_POSITIONS {
        let Ok(mut pos) = Position::from_placement(placement, side) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
