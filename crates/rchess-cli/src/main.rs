//! rchess-cli: play or replay chess games from the command line
//!
//! # 使用例
//!
//! ```bash
//! # 標準入力から 1 行 1 手（SAN）
//! printf 'e4\ne5\nNf3\n' | rchess-cli play
//!
//! # コマンドラインの手順を再生し、JSON に保存
//! rchess-cli --record game.json replay e4 e5 Nf3 Nc6 Bb5
//!
//! # 連結した UCI 文字列を再生
//! rchess-cli replay --uci e2e4e7e5g1f3
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use rchess_core::notation::split_long_uci;
use rchess_core::{Game, GameRecord, GameStatus, PlayedMove};

#[derive(Parser, Debug)]
#[command(name = "rchess-cli", version, about = "Chess rules engine front end (SAN / UCI)")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Replay a saved JSON game record before continuing
    #[arg(long, global = true)]
    load: Option<PathBuf>,

    /// Write the played moves as a JSON game record
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Read one move per line from stdin
    Play {
        /// Moves are UCI (e2e4) instead of SAN
        #[arg(long)]
        uci: bool,
    },
    /// Apply the moves given on the command line
    Replay {
        /// Moves are UCI; a single concatenated string is split
        #[arg(long)]
        uci: bool,
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(cli) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut game = match &cli.load {
        Some(path) => load_record(path)?,
        None => Game::new(),
    };

    let outcome = match cli.cmd {
        Cmd::Play { uci } => play(&mut game, uci),
        Cmd::Replay { uci, moves } => replay(&mut game, uci, &moves),
    };

    // the moves played before a failure are still worth keeping
    if let Some(path) = &cli.record {
        save_record(&game, path)?;
    }
    outcome?;

    println!("{}", game.board_string());
    println!("{}", game.status());
    Ok(())
}

fn apply(game: &mut Game, text: &str, uci: bool) -> rchess_core::Result<PlayedMove> {
    if uci { game.make_move_from_uci(text) } else { game.make_move_from_algebraic(text) }
}

fn play(game: &mut Game, uci: bool) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match apply(game, text, uci) {
            Ok(played) => {
                println!("{}. {}", game.engine().ply(), played.algebraic());
                println!("{}", game.board_string());
            }
            Err(e) => {
                warn!("Rejected {text}: {e}");
                continue;
            }
        }

        let status = game.status();
        if status != GameStatus::Ongoing {
            println!("{status}");
        }
        if status.is_over() {
            break;
        }
    }
    Ok(())
}

fn replay(game: &mut Game, uci: bool, moves: &[String]) -> Result<()> {
    let moves = if uci {
        let mut split = Vec::with_capacity(moves.len());
        for chunk in moves {
            split.extend(split_long_uci(chunk).with_context(|| format!("split UCI string {chunk:?}"))?);
        }
        split
    } else {
        moves.to_vec()
    };

    for (i, text) in moves.iter().enumerate() {
        if game.status().is_over() {
            bail!("game is already over ({}) before move {}: {text}", game.status(), i + 1);
        }
        let played = apply(game, text, uci).with_context(|| format!("move {}: {text}", i + 1))?;
        debug!("{} -> {}", text, played.algebraic());
    }
    info!("Replayed {} moves", moves.len());
    Ok(())
}

fn load_record(path: &Path) -> Result<Game> {
    let text = fs::read_to_string(path).with_context(|| format!("read record: {}", path.display()))?;
    let record: GameRecord =
        serde_json::from_str(&text).with_context(|| format!("parse record: {}", path.display()))?;
    let game = Game::from_record(&record).with_context(|| format!("replay record: {}", path.display()))?;
    info!("Loaded {} moves from {}", record.uci.len(), path.display());
    Ok(game)
}

fn save_record(game: &Game, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&game.record())?;
    fs::write(path, json).with_context(|| format!("write record: {}", path.display()))?;
    info!("Wrote {} moves to {}", game.engine().ply(), path.display());
    Ok(())
}
