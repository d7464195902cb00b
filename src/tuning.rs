//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-balanced from JSON
//! without recompiling. Missing fields fall back to the reference values in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::RunnerError;

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Lanes ===
    pub lane_width: f32,
    pub left_threshold: f32,
    pub right_threshold: f32,
    /// Exponential easing factor for the player, in (0, 1]
    pub smoothing: f32,

    // === Pace ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub score_per_recycle: u64,

    // === Pool ===
    pub pool_capacity: usize,
    pub spacing: f32,
    pub spawn_offset: f32,
    pub player_depth_threshold: f32,

    // === Bounding volumes ===
    pub half_extent: f32,
    pub collision_margin: f32,
    pub entity_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_width: LANE_WIDTH,
            left_threshold: LEFT_THRESHOLD,
            right_threshold: RIGHT_THRESHOLD,
            smoothing: SMOOTHING,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            score_per_recycle: SCORE_PER_RECYCLE,

            pool_capacity: POOL_CAPACITY,
            spacing: SPACING,
            spawn_offset: SPAWN_OFFSET,
            player_depth_threshold: PLAYER_DEPTH_THRESHOLD,

            half_extent: HALF_EXTENT,
            collision_margin: COLLISION_MARGIN,
            entity_height: ENTITY_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, RunnerError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Depth every passed obstacle is sent back to.
    ///
    /// Fixed at the back of the initial layout rather than tracking the
    /// furthest live obstacle, so spacing drift is never corrected.
    pub fn recycle_depth(&self) -> f32 {
        -(self.pool_capacity as f32 * self.spacing)
    }

    /// Check every value against its valid range
    pub fn validate(&self) -> Result<(), RunnerError> {
        let invalid = |field, reason| Err(RunnerError::InvalidTuning { field, reason });

        let floats = [
            ("lane_width", self.lane_width),
            ("left_threshold", self.left_threshold),
            ("right_threshold", self.right_threshold),
            ("smoothing", self.smoothing),
            ("initial_speed", self.initial_speed),
            ("speed_increment", self.speed_increment),
            ("spacing", self.spacing),
            ("spawn_offset", self.spawn_offset),
            ("player_depth_threshold", self.player_depth_threshold),
            ("half_extent", self.half_extent),
            ("collision_margin", self.collision_margin),
            ("entity_height", self.entity_height),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return invalid(*field, "must be finite");
        }

        if !(self.lane_width > 0.0) {
            return invalid("lane_width", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.left_threshold)
            || !(0.0..=1.0).contains(&self.right_threshold)
            || self.left_threshold >= self.right_threshold
        {
            return invalid(
                "left_threshold",
                "thresholds must satisfy 0 <= left < right <= 1",
            );
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return invalid("smoothing", "must be in (0, 1]");
        }
        if !(self.initial_speed > 0.0) {
            return invalid("initial_speed", "must be positive");
        }
        if !(self.speed_increment >= 0.0) {
            return invalid("speed_increment", "must not be negative");
        }
        if self.pool_capacity == 0 {
            return invalid("pool_capacity", "must hold at least one obstacle");
        }
        if !(self.spacing > 0.0) {
            return invalid("spacing", "must be positive");
        }
        if !(self.half_extent > 0.0) {
            return invalid("half_extent", "must be positive");
        }
        if !(self.collision_margin >= 0.0 && self.collision_margin < self.half_extent) {
            return invalid("collision_margin", "must be in [0, half_extent)");
        }
        // Otherwise every obstacle is sent back on every tick
        if self.recycle_depth() >= self.player_depth_threshold {
            return invalid(
                "player_depth_threshold",
                "must lie past the recycle depth",
            );
        }
        if -self.spawn_offset > self.player_depth_threshold {
            return invalid(
                "spawn_offset",
                "first obstacle must spawn before the depth threshold",
            );
        }
        Ok(())
    }
}
