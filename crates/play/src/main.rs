//! `chess`: play, review, perft and best-move queries from the terminal.

mod browse;
mod config;
mod render;
mod session;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chess_core::{Board, Color, Engine, GameRecord, Position, move_to_coord, perft, perft_divide};
use clap::{Parser, Subcommand};
use classical_engine::ClassicalEngine;
use log::info;

use crate::config::{PlayConfig, PlayerKind};
use crate::session::{Outcome, Seat, Session};

#[derive(Parser, Debug)]
#[command(name = "chess", about = "Mailbox chess engine with a text front end")]
struct Cli {
    /// TOML config file; command-line flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search and board activity at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Position and search flags shared by several subcommands.
#[derive(clap::Args, Debug)]
struct PositionArgs {
    /// Starting placement (first FEN field; the rest of a FEN is ignored)
    #[arg(long)]
    start: Option<String>,
    /// Side to move at the start: white or black
    #[arg(long)]
    side: Option<Color>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game between humans and/or engines
    Play {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long)]
        white: Option<PlayerKind>,
        #[arg(long)]
        black: Option<PlayerKind>,
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long)]
        move_time_ms: Option<u64>,
        /// Write the finished game to this JSON file
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Step through a recorded game (JSON record or one placement per line)
    Review {
        file: PathBuf,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
    /// Print the classical engine's choice for one position
    Bestmove {
        #[command(flatten)]
        position: PositionArgs,
        #[arg(long)]
        depth: Option<u8>,
        #[arg(long)]
        move_time_ms: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn apply_position(config: &mut PlayConfig, position: PositionArgs) {
    if let Some(start) = position.start {
        config.start = start;
    }
    if let Some(side) = position.side {
        config.side_to_move = side;
    }
}

fn start_board(config: &PlayConfig) -> Result<Board> {
    Board::new(&config.start, config.side_to_move).context("invalid starting position")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = PlayConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            position,
            white,
            black,
            depth,
            move_time_ms,
            record,
        } => {
            apply_position(&mut config, position);
            config.white = white.unwrap_or(config.white);
            config.black = black.unwrap_or(config.black);
            config.depth = depth.unwrap_or(config.depth);
            config.move_time_ms = move_time_ms.or(config.move_time_ms);
            config.record = record.or(config.record);
            config.validate()?;
            let board = start_board(&config)?;
            play(board, config)
        }
        Command::Review { file } => review(&file, config),
        Command::Perft {
            position,
            depth,
            divide,
        } => {
            apply_position(&mut config, position);
            config.validate()?;
            let board = start_board(&config)?;
            run_perft(*board.position(), depth, divide);
            Ok(())
        }
        Command::Bestmove {
            position,
            depth,
            move_time_ms,
        } => {
            apply_position(&mut config, position);
            config.depth = depth.unwrap_or(config.depth);
            config.move_time_ms = move_time_ms.or(config.move_time_ms);
            config.validate()?;
            let board = start_board(&config)?;
            bestmove(&board, &config)
        }
    }
}

fn play(board: Board, config: PlayConfig) -> Result<()> {
    let white = Seat::from_kind(config.white);
    let black = Seat::from_kind(config.black);
    let record_path = config.record.clone();

    let stdin = io::stdin();
    let mut session = Session::new(board, config, white, black, stdin.lock(), io::stdout());
    let outcome = session.run()?;
    info!("session ended: {outcome:?}");

    if let Some(path) = record_path {
        write_record(&path, session.board())?;
        println!("game written to {}", path.display());
    }
    if outcome == Outcome::Quit {
        println!("bye");
    }
    Ok(())
}

fn write_record(path: &Path, board: &Board) -> Result<()> {
    let json = GameRecord::from_board(board)
        .to_json()
        .context("failed to serialize game record")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn review(file: &Path, config: PlayConfig) -> Result<()> {
    let mut history = browse::load_history(file)?;
    let stdin = io::stdin();
    let chosen = browse::browse(&mut history, stdin.lock(), io::stdout())?;
    if let Some(board) = chosen {
        play(board, config)?;
    }
    Ok(())
}

fn run_perft(mut pos: Position, depth: u8, divide: bool) {
    let start = Instant::now();
    let nodes = if divide {
        let split = perft_divide(&mut pos, depth);
        for (mv, count) in &split {
            println!("{}: {count}", move_to_coord(*mv));
        }
        split.iter().map(|(_, n)| n).sum()
    } else {
        perft(&mut pos, depth)
    };
    println!("perft({depth}) = {nodes} in {:.3?}", start.elapsed());
}

fn bestmove(board: &Board, config: &PlayConfig) -> Result<()> {
    if board.status().is_over() {
        bail!("no move to find: {}", session::describe(board.status()));
    }
    let mut engine = ClassicalEngine::new();
    let result = engine.search(board, config.search_limits())?;
    println!(
        "bestmove {} score {} nodes {}{}",
        move_to_coord(result.best_move),
        result.score,
        result.nodes,
        if result.stopped { " (stopped)" } else { "" }
    );
    Ok(())
}
