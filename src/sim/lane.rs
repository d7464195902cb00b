//! Lane mapping and player movement
//!
//! The hand position is a normalized scalar in [0, 1]. It is snapped to one of
//! three lanes with a dead zone around the middle; the player then eases
//! toward that lane's offset every tick.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One of the three lateral positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// Signed lane index (-1, 0, 1)
    #[inline]
    pub fn index(self) -> i32 {
        match self {
            Lane::Left => -1,
            Lane::Center => 0,
            Lane::Right => 1,
        }
    }

    /// Lateral offset of the lane centre
    #[inline]
    pub fn offset(self, lane_width: f32) -> f32 {
        self.index() as f32 * lane_width
    }

    /// Sample a lane uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Discretize a hand position. No hysteresis: the same input always
    /// gives the same lane.
    pub fn from_hand_position(x: f32, left_threshold: f32, right_threshold: f32) -> Self {
        if x < left_threshold {
            Lane::Left
        } else if x > right_threshold {
            Lane::Right
        } else {
            Lane::Center
        }
    }
}

/// Map a normalized hand position to the player's target lateral position
#[inline]
pub fn map_hand_position_to_lane(x: f32, tuning: &Tuning) -> f32 {
    Lane::from_hand_position(x, tuning.left_threshold, tuning.right_threshold)
        .offset(tuning.lane_width)
}

/// The player avatar. Fixed on the travel axis; only moves sideways.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    /// Smoothed lateral position (what gets drawn and collided)
    pub current_x: f32,
    /// Lane offset the player is easing toward
    pub target_x: f32,
}

impl Player {
    /// Set a new target and ease toward it.
    ///
    /// Exponential easing never overshoots and never quite reaches the target.
    pub fn move_toward(&mut self, target_x: f32, smoothing: f32) {
        self.target_x = target_x;
        self.current_x += (self.target_x - self.current_x) * smoothing;
    }

    /// World-space centre of the player box
    #[inline]
    pub fn position(&self, height: f32, depth: f32) -> Vec3 {
        Vec3::new(self.current_x, height, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_boundary_values() {
        let tuning = Tuning::default();
        let w = tuning.lane_width;
        let cases = [
            (0.0, -w),
            (0.399, -w),
            (0.4, 0.0),
            (0.5, 0.0),
            (0.6, 0.0),
            (0.601, w),
            (1.0, w),
        ];
        for (x, expected) in cases {
            assert_eq!(map_hand_position_to_lane(x, &tuning), expected, "x = {x}");
        }
    }

    #[test]
    fn test_player_eases_without_overshoot() {
        let mut player = Player::default();
        let mut last = player.current_x;
        for _ in 0..30 {
            player.move_toward(4.0, 0.25);
            assert!(player.current_x > last);
            assert!(player.current_x < 4.0);
            last = player.current_x;
        }
        assert!((player.current_x - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_full_smoothing_snaps() {
        let mut player = Player::default();
        player.move_toward(-4.0, 1.0);
        assert_eq!(player.current_x, -4.0);
    }

    #[test]
    fn test_random_lane_covers_all() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[(Lane::random(&mut rng).index() + 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    proptest! {
        #[test]
        fn prop_mapping_is_pure_and_three_way(x in 0.0f32..=1.0) {
            let tuning = Tuning::default();
            let first = map_hand_position_to_lane(x, &tuning);
            prop_assert_eq!(first, map_hand_position_to_lane(x, &tuning));
            let expected = if x < 0.4 { -4.0 } else if x > 0.6 { 4.0 } else { 0.0 };
            prop_assert_eq!(first, expected);
        }
    }
}
