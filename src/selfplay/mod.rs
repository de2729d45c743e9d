use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::{GameStatus, Player};
use crate::game::Game;
use crate::search::{select_move, Difficulty};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub x: Difficulty,
    pub o: Difficulty,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self { Self { games: 1, x: Difficulty::Impossible, o: Difficulty::Impossible, seed: 42 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    X,
    O,
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub result: Outcome,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x: usize,
    pub o: usize,
    pub draws: usize,
}

impl Tally {
    pub fn of(records: &[GameRecord]) -> Self {
        let mut t = Tally::default();
        for r in records {
            match r.result { Outcome::X => t.x += 1, Outcome::O => t.o += 1, Outcome::Draw => t.draws += 1 }
        }
        t
    }
}

/// Play game number `index` of a run. Each game has its own RNG derived from
/// the run seed, so results do not depend on scheduling.
pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (index as u64).rotate_left(17));
    let mut game = Game::default();
    let mut moves = Vec::with_capacity(9);
    while !game.is_over() {
        let side = game.to_move();
        let level = if side == Player::X { params.x } else { params.o };
        let Ok(m) = select_move(game.board(), side, level, &mut rng) else { break };
        if game.apply_move(m, side).is_err() { break; }
        moves.push(m);
    }
    let result = match game.status() {
        GameStatus::Won { player: Player::X, .. } => Outcome::X,
        GameStatus::Won { player: Player::O, .. } => Outcome::O,
        _ => Outcome::Draw,
    };
    GameRecord { moves, result }
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    (0..params.games).into_par_iter().map(|gi| play_game(params, gi)).collect()
}

/// Write one JSON record per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
