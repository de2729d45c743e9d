use rand::Rng;

use crate::board::{Board, CORNERS};

/// Choose uniformly from `pool`. `None` when the pool is empty.
pub fn choose_uniform<R: Rng>(pool: &[usize], rng: &mut R) -> Option<usize> {
    if pool.is_empty() { return None; }
    let idx = rng.gen_range(0..pool.len());
    Some(pool[idx])
}

/// Uniformly random empty cell.
pub fn random_empty<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    choose_uniform(&board.empty_cells(), rng)
}

/// Uniformly random empty corner.
pub fn random_corner<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let corners: Vec<usize> = CORNERS.iter().copied().filter(|&i| board.is_empty_at(i)).collect();
    choose_uniform(&corners, rng)
}
