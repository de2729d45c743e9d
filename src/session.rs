use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, GameStatus, Player};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::game::{Game, GameMode, Scores};
use crate::history::{HistoryEntry, Timeline};
use crate::persist::{Snapshot, Store};
use crate::search::{select_move, Difficulty};

/// Core transitions, published to subscribers after they happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { index: usize, player: Player },
    GameWon { player: Player, line: [usize; 3] },
    GameDrawn,
    GameReset,
    ScoresReset,
    ModeChanged(GameMode),
    DifficultyChanged(Difficulty),
    Jumped { step: usize },
    AiScheduled { due: Instant },
}

pub type Observer = Box<dyn FnMut(&GameEvent)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineItem {
    pub step: usize,
    pub label: String,
    pub entry: HistoryEntry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineView {
    pub items: Vec<TimelineItem>,
    pub cursor: usize,
}

/// The only mutation path into the core: game, timeline, the deferred AI
/// reply, observers and persistence.
///
/// Single-threaded. The host drives the AI by calling [`Session::tick`] from
/// its event loop; a pending reply is dropped whenever the position it was
/// scheduled for goes away.
pub struct Session {
    game: Game,
    timeline: Timeline,
    config: SessionConfig,
    rng: SmallRng,
    pending_ai: Option<Instant>,
    observers: Vec<Observer>,
    store: Option<Box<dyn Store>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        Self {
            game: Game::new(config.mode, config.difficulty),
            timeline: Timeline::new(),
            config,
            rng,
            pending_ai: None,
            observers: Vec::new(),
            store: None,
        }
    }

    /// Build a session and resume from `store`. Missing, unreadable or
    /// inconsistent data falls back to a fresh game.
    pub fn with_store(config: SessionConfig, store: Box<dyn Store>) -> Self {
        let mut s = Self::new(config);
        match store.load() {
            Ok(Some(snap)) => match snap.validate() {
                Ok(()) => s.apply_snapshot(snap),
                Err(e) => warn!("discarding persisted state: {}", e),
            },
            Ok(None) => debug!("no persisted state"),
            Err(e) => warn!("could not load persisted state: {}", e),
        }
        s.store = Some(store);
        s.sync_ai();
        s
    }

    fn apply_snapshot(&mut self, snap: Snapshot) {
        let Some(timeline) = Timeline::from_parts(snap.timeline, snap.cursor) else { return };
        let mut game = Game::new(self.config.mode, snap.difficulty);
        game.set_scores(snap.scores);
        game.restore(*timeline.current());
        info!("resumed at step {} of {}", timeline.cursor(), timeline.len() - 1);
        self.game = game;
        self.timeline = timeline;
    }

    pub fn subscribe(&mut self, observer: Observer) { self.observers.push(observer); }

    // Queries

    pub fn current_board(&self) -> &Board { self.game.board() }
    pub fn status(&self) -> GameStatus { self.game.status() }
    pub fn scores(&self) -> Scores { self.game.scores() }
    pub fn to_move(&self) -> Player { self.game.to_move() }
    pub fn mode(&self) -> GameMode { self.game.mode() }
    pub fn difficulty(&self) -> Difficulty { self.game.difficulty() }
    pub fn game(&self) -> &Game { &self.game }
    pub fn timeline(&self) -> &Timeline { &self.timeline }
    pub fn config(&self) -> &SessionConfig { &self.config }
    pub fn store(&self) -> Option<&dyn Store> { self.store.as_deref() }

    /// When the scheduled AI reply is due, if one is pending.
    pub fn pending_ai(&self) -> Option<Instant> { self.pending_ai }

    pub fn timeline_view(&self) -> TimelineView {
        let items = self.timeline.entries().iter().enumerate().map(|(step, entry)| TimelineItem {
            step,
            label: if step == 0 { "Go to game start".to_string() } else { format!("Go to move #{}", step) },
            entry: *entry,
        }).collect();
        TimelineView { items, cursor: self.timeline.cursor() }
    }

    pub fn status_message(&self) -> String {
        match self.game.status() {
            GameStatus::Won { player, .. } => format!("Player {} Wins!", player),
            GameStatus::Draw => "It's a Draw!".to_string(),
            GameStatus::InProgress => match self.game.mode() {
                GameMode::VsAi if self.game.is_ai_turn() => "AI Thinking...".to_string(),
                GameMode::VsAi => "Your Turn".to_string(),
                GameMode::TwoPlayer => format!("Player {}'s Turn", self.game.to_move()),
            },
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.game.board(),
            x_is_next: self.game.to_move() == Player::X,
            scores: self.game.scores(),
            timeline: self.timeline.entries().to_vec(),
            cursor: self.timeline.cursor(),
            difficulty: self.game.difficulty(),
        }
    }

    // Commands

    /// Play `index` for the human. In VsAI mode the human is X and cannot
    /// move while the AI is due.
    pub fn apply_human_move(&mut self, index: usize) -> Result<GameStatus> {
        let player = match self.game.mode() {
            GameMode::VsAi => Player::X,
            GameMode::TwoPlayer => self.game.to_move(),
        };
        self.play(index, player)
    }

    /// Fire the pending AI reply if it is due at `now`. Returns the cell played.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let due = self.pending_ai?;
        if now < due { return None; }
        self.pending_ai = None;
        let ai = self.game.ai_player()?;
        if !self.game.is_ai_turn() { return None; }
        let index = match select_move(self.game.board(), ai, self.game.difficulty(), &mut self.rng) {
            Ok(i) => i,
            Err(e) => { debug!("ai has no move: {}", e); return None; }
        };
        match self.play(index, ai) {
            Ok(_) => Some(index),
            Err(e) => { warn!("ai move {} rejected: {}", index, e); None }
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.timeline.reset();
        self.pending_ai = None;
        info!("new game");
        self.emit(GameEvent::GameReset);
        self.sync_ai();
        self.save();
    }

    /// Zero both counters. Board and timeline are untouched.
    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
        self.emit(GameEvent::ScoresReset);
        self.save();
    }

    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if !self.game.set_mode(mode) { return false; }
        self.timeline.reset();
        self.pending_ai = None;
        info!("mode -> {}", mode);
        self.emit(GameEvent::ModeChanged(mode));
        self.emit(GameEvent::GameReset);
        self.save();
        true
    }

    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.game.mode().toggled();
        self.set_mode(mode);
        mode
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if !self.game.set_difficulty(difficulty) { return false; }
        self.timeline.reset();
        self.pending_ai = None;
        info!("difficulty -> {}", difficulty);
        self.emit(GameEvent::DifficultyChanged(difficulty));
        self.emit(GameEvent::GameReset);
        self.save();
        true
    }

    /// Show history step `index`. A later move from here discards the steps
    /// after it.
    pub fn jump_to(&mut self, index: usize) -> Result<HistoryEntry> {
        let entry = self.timeline.jump(index)?;
        self.game.restore(entry);
        self.pending_ai = None;
        debug!("jumped to step {}", index);
        self.emit(GameEvent::Jumped { step: index });
        self.sync_ai();
        self.save();
        Ok(entry)
    }

    fn play(&mut self, index: usize, player: Player) -> Result<GameStatus> {
        let status = self.game.apply_move(index, player)?;
        self.timeline.record(self.game.entry());
        self.emit(GameEvent::MoveApplied { index, player });
        match status {
            GameStatus::Won { player, line } => self.emit(GameEvent::GameWon { player, line }),
            GameStatus::Draw => self.emit(GameEvent::GameDrawn),
            GameStatus::InProgress => {}
        }
        self.sync_ai();
        self.save();
        Ok(status)
    }

    /// Schedule the AI if it is due to move, otherwise drop any pending reply.
    fn sync_ai(&mut self) {
        if !self.game.is_ai_turn() {
            self.pending_ai = None;
            return;
        }
        if self.pending_ai.is_none() {
            let due = Instant::now() + self.config.ai_delay();
            self.pending_ai = Some(due);
            self.emit(GameEvent::AiScheduled { due });
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for o in self.observers.iter_mut() { o(&event); }
    }

    fn save(&mut self) {
        let snap = self.snapshot();
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.save(&snap) { warn!("could not save state: {}", e); }
        }
    }
}
