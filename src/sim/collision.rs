//! Axis-aligned box collision between the player and the obstacle pool
//!
//! Player and obstacles share one box size. The player's box is shrunk by a
//! fixed margin before testing, so a hit needs real overlap rather than a
//! grazed edge. The two boxes used for testing are owned by the detector and
//! rewritten in place for every obstacle.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::pool::ObstaclePool;
use crate::tuning::Tuning;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extent: f32) -> Self {
        let half = Vec3::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overwrite this box in place
    #[inline]
    pub fn set_from_center(&mut self, center: Vec3, half_extent: f32) {
        let half = Vec3::splat(half_extent);
        self.min = center - half;
        self.max = center + half;
    }

    /// Grow (positive) or shrink (negative) by `amount` on every side
    #[inline]
    pub fn expand(&mut self, amount: f32) {
        let delta = Vec3::splat(amount);
        self.min -= delta;
        self.max += delta;
    }

    /// Strict overlap on all three axes. Touching faces do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && other.min.cmplt(self.max).all()
    }
}

/// True if the player box, shrunk by `margin`, overlaps any obstacle box
pub fn check_collisions(player: &Aabb, obstacles: &[Aabb], margin: f32) -> bool {
    let mut shrunk = *player;
    shrunk.expand(-margin);
    obstacles.iter().any(|obstacle| shrunk.intersects(obstacle))
}

/// Reusable detector that tests the player against every pooled obstacle
#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    player_box: Aabb,
    obstacle_box: Aabb,
}

impl CollisionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot of the first obstacle hit, if any.
    ///
    /// Stops at the first hit; later slots are not tested.
    pub fn check(
        &mut self,
        player_center: Vec3,
        pool: &ObstaclePool,
        tuning: &Tuning,
    ) -> Option<usize> {
        self.player_box
            .set_from_center(player_center, tuning.half_extent);
        self.player_box.expand(-tuning.collision_margin);

        for (slot, obstacle) in pool.iter().enumerate() {
            let center = obstacle.position(tuning.lane_width, tuning.entity_height);
            self.obstacle_box.set_from_center(center, tuning.half_extent);
            if self.player_box.intersects(&self.obstacle_box) {
                return Some(slot);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lane::Lane;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_full_overlap_hits() {
        let player = Aabb::from_center(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let obstacle = Aabb::from_center(Vec3::new(0.0, 1.0, 0.0), 1.0);
        assert!(check_collisions(&player, &[obstacle], 0.2));
    }

    #[test]
    fn test_adjacent_lane_misses() {
        let player = Aabb::from_center(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let obstacle = Aabb::from_center(Vec3::new(4.0, 1.0, 0.0), 1.0);
        assert!(!check_collisions(&player, &[obstacle], 0.2));
    }

    #[test]
    fn test_margin_forgives_shallow_overlap() {
        let player = Aabb::from_center(Vec3::new(0.0, 1.0, 0.0), 1.0);
        // Visual boxes overlap by 0.1 along depth
        let obstacle = Aabb::from_center(Vec3::new(0.0, 1.0, -1.9), 1.0);
        assert!(player.intersects(&obstacle));
        assert!(!check_collisions(&player, &[obstacle], 0.2));
        assert!(check_collisions(&player, &[obstacle], 0.0));
    }

    #[test]
    fn test_touching_is_not_intersecting() {
        let a = Aabb::from_center(Vec3::ZERO, 1.0);
        let b = Aabb::from_center(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_empty_obstacle_list() {
        let player = Aabb::from_center(Vec3::ZERO, 1.0);
        assert!(!check_collisions(&player, &[], 0.2));
    }

    #[test]
    fn test_detector_reports_slot() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pool = ObstaclePool::new(3, 30.0, 20.0, &mut rng);
        for slot in 0..3 {
            if let Some(obstacle) = pool.get_mut(slot) {
                obstacle.lane = Lane::Right;
            }
        }
        if let Some(obstacle) = pool.get_mut(1) {
            obstacle.depth = 0.5;
        }

        let mut detector = CollisionDetector::new();
        let in_right_lane = Vec3::new(4.0, 1.0, 0.0);
        let in_center_lane = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(detector.check(in_right_lane, &pool, &tuning), Some(1));
        assert_eq!(detector.check(in_center_lane, &pool, &tuning), None);
    }

    #[test]
    fn test_detector_mid_lane_change_hits() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let mut pool = ObstaclePool::new(1, 30.0, 20.0, &mut rng);
        if let Some(obstacle) = pool.get_mut(0) {
            obstacle.lane = Lane::Right;
            obstacle.depth = 0.0;
        }

        let mut detector = CollisionDetector::new();
        // Obstacle's near face is at x = 3.0; shrunk player half-width is 0.8
        assert_eq!(detector.check(Vec3::new(2.0, 1.0, 0.0), &pool, &tuning), None);
        assert_eq!(detector.check(Vec3::new(2.5, 1.0, 0.0), &pool, &tuning), Some(0));
    }
}
