use super::*;
use chess_core::START_PLACEMENT;

fn pos(placement: &str, side: Color) -> Position {
    Position::from_placement(placement, side).unwrap()
}

fn grid(placement: &str) -> Grid {
    placement.parse().unwrap()
}

/// Flips the board top to bottom and swaps piece colours.
fn mirror(placement: &str) -> String {
    placement
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[test]
fn test_start_position_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
    assert_eq!(material(&grid(START_PLACEMENT)), 0);
    assert_eq!(pawn_structure(&grid(START_PLACEMENT)), 0);
    assert_eq!(king_safety(&grid(START_PLACEMENT)), 0);
}

#[test]
fn test_single_pawn_breakdown() {
    let g = grid("4k3/8/8/8/8/8/4P3/4K3");
    // Pawn 100 with a -20 bonus on e2; kings cancel
    assert_eq!(material(&g), 80);
    // White lacks pawns on seven files, Black on all eight
    assert_eq!(pawn_structure(&g), 100);
    // White: d2 empty, e2 guarded, f2 empty. Black: three empty squares
    assert_eq!(king_safety(&g), 40 + 90);
    assert_eq!(static_eval(&g), 80 + (100 + 130) / 10);
    assert_eq!(evaluate(&pos("4k3/8/8/8/8/8/4P3/4K3", Color::White)), 103);
}

#[test]
fn test_colour_mirror_negates_score() {
    for placement in [
        "4k3/8/8/8/8/8/4P3/4K3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R",
        "6k1/5ppp/8/8/8/8/PP3PPP/6K1",
    ] {
        let g = grid(placement);
        let m = grid(&mirror(placement));
        assert_eq!(static_eval(&m), -static_eval(&g), "{placement}");
    }
}

#[test]
fn test_extra_queen_dominates() {
    let up = evaluate(&pos("4k3/8/8/8/8/8/8/3QK3", Color::White));
    let even = evaluate(&pos("4k3/8/8/8/8/8/8/4K3", Color::White));
    assert!(up - even > 800);
}

#[test]
fn test_doubled_pawns_cost_their_owner() {
    let healthy = pawn_structure(&grid("4k3/8/8/8/8/8/3PP3/4K3"));
    let doubled = pawn_structure(&grid("4k3/8/8/8/8/4P3/4P3/4K3"));
    // Doubling costs 100 and leaves the d-file empty for another 100
    assert_eq!(healthy - doubled, 200);

    let black_doubled = pawn_structure(&grid("4k3/4p3/4p3/8/8/8/8/4K3"));
    let black_healthy = pawn_structure(&grid("4k3/3pp3/8/8/8/8/8/4K3"));
    assert_eq!(black_doubled - black_healthy, 200);
}

#[test]
fn test_king_shelter() {
    let sheltered = king_safety(&grid("4k3/8/8/8/8/8/3PPP2/4K3"));
    let exposed = king_safety(&grid("4k3/8/8/8/8/8/8/4K3"));
    assert_eq!(sheltered - exposed, 3 * (100 + 30));
    // Enemy pieces in front neither help nor hurt
    let blocked = king_safety(&grid("4k3/8/8/8/8/8/3ppp2/4K3"));
    assert_eq!(blocked - exposed, 3 * 30);
}

#[test]
fn test_terminal_scores_bypass_heuristics() {
    let fools_mate = pos(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR",
        Color::White,
    );
    assert_eq!(evaluate(&fools_mate), -CHECKMATE);

    let back_rank = pos("R5k1/5ppp/8/8/8/8/8/6K1", Color::Black);
    assert_eq!(evaluate(&back_rank), CHECKMATE);

    // Queen up but stalemated: still exactly zero
    let stalemate = pos("k7/8/1Q6/8/8/8/8/1K6", Color::Black);
    assert_eq!(evaluate(&stalemate), STALEMATE);
}
