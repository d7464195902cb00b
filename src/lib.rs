//! Gesture Runner - A three-lane runner steered by hand tracking
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, obstacle pool, collisions, game loop)
//! - `platform`: Browser/native seams (hand input, HUD, wasm bindings)
//! - `tuning`: Data-driven game balance
//! - `settings`: Integration preferences (camera, mirroring)

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::RunnerError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Reference balance constants (defaults for [`Tuning`])
pub mod consts {
    /// Lateral distance between lane centres
    pub const LANE_WIDTH: f32 = 4.0;
    /// Hand positions below this map to the left lane
    pub const LEFT_THRESHOLD: f32 = 0.4;
    /// Hand positions above this map to the right lane
    pub const RIGHT_THRESHOLD: f32 = 0.6;
    /// Fraction of the remaining lateral gap closed per tick
    pub const SMOOTHING: f32 = 0.25;

    /// Obstacle travel per tick at the start of a run
    pub const INITIAL_SPEED: f32 = 0.5;
    /// Speed gained per recycled obstacle
    pub const SPEED_INCREMENT: f32 = 0.005;
    /// Score gained per recycled obstacle
    pub const SCORE_PER_RECYCLE: u64 = 10;

    /// Obstacle pool size
    pub const POOL_CAPACITY: usize = 15;
    /// Depth gap between consecutive obstacles at spawn
    pub const SPACING: f32 = 30.0;
    /// Depth in front of the player where the first obstacle spawns
    pub const SPAWN_OFFSET: f32 = 20.0;
    /// Obstacles deeper than this have passed the player
    pub const PLAYER_DEPTH_THRESHOLD: f32 = 10.0;

    /// Half of the 2x2x2 box shared by player and obstacles
    pub const HALF_EXTENT: f32 = 1.0;
    /// Amount the player box shrinks on every axis before testing
    pub const COLLISION_MARGIN: f32 = 0.2;
    /// Height of every entity centre above the ground
    pub const ENTITY_HEIGHT: f32 = 1.0;

    /// Player depth on the travel axis (obstacles come to it)
    pub const PLAYER_DEPTH: f32 = 0.0;
    /// Hand landmark used as the palm centre (middle finger MCP)
    pub const PALM_LANDMARK: usize = 9;
}
