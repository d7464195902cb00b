//! Game state and session events

use serde::{Deserialize, Serialize};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No hand seen yet; nothing moves
    #[default]
    WaitingForInput,
    /// Active gameplay
    Playing,
    /// Collision happened. Terminal for the session.
    GameOver,
}

/// Emitted by a tick for the HUD and audio/visual layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// First hand detected, play begins
    Started,
    /// An obstacle was passed and recycled
    ScoreChanged { score: u64 },
    /// The player hit an obstacle
    GameOver { final_score: u64 },
}

/// Score, pace and phase for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u64,
    /// Obstacle travel per tick; never decreases while playing
    pub speed: f32,
    pub phase: GamePhase,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
    /// Obstacles passed this session
    pub recycled_count: u64,
}

impl GameState {
    pub fn new(seed: u64, initial_speed: f32) -> Self {
        Self {
            seed,
            score: 0,
            speed: initial_speed,
            phase: GamePhase::WaitingForInput,
            time_ticks: 0,
            recycled_count: 0,
        }
    }

    /// True once play has started, including after game over
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase != GamePhase::WaitingForInput
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Credit one passed obstacle
    pub fn record_recycle(&mut self, score_per_recycle: u64, speed_increment: f32) {
        self.score += score_per_recycle;
        self.speed += speed_increment;
        self.recycled_count += 1;
    }
}
