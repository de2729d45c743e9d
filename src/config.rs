use std::time::Duration;

use crate::game::GameMode;
use crate::search::Difficulty;

pub const DEFAULT_AI_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause between a human move and the AI reply.
    pub ai_delay_ms: u64,
    /// Seed for Easy/Medium randomness; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Mode the session starts in. Not part of the persisted snapshot.
    pub mode: GameMode,
    /// Difficulty used when nothing was persisted.
    pub difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            seed: None,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl SessionConfig {
    pub fn ai_delay(&self) -> Duration { Duration::from_millis(self.ai_delay_ms) }

    pub fn with_seed(mut self, seed: u64) -> Self { self.seed = Some(seed); self }

    pub fn with_ai_delay_ms(mut self, ms: u64) -> Self { self.ai_delay_ms = ms; self }

    pub fn with_mode(mut self, mode: GameMode) -> Self { self.mode = mode; self }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self { self.difficulty = difficulty; self }
}
