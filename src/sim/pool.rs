//! Fixed-capacity obstacle pool
//!
//! Obstacles are created once and recycled forever. A passed obstacle is sent
//! back to the far end of the path in a fresh lane instead of being freed, so
//! the per-tick path never touches the allocator.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lane::Lane;

/// A single pooled obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub lane: Lane,
    /// Position on the travel axis; grows toward the player
    pub depth: f32,
}

impl Obstacle {
    /// World-space centre of the obstacle box
    #[inline]
    pub fn position(&self, lane_width: f32, height: f32) -> Vec3 {
        Vec3::new(self.lane.offset(lane_width), height, self.depth)
    }
}

/// Emitted when an obstacle passes the player and is sent back
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecycleEvent {
    /// Pool slot of the recycled obstacle
    pub slot: usize,
    /// Lane the obstacle was in when it passed
    pub previous_lane: Lane,
    /// Lane it was reassigned to
    pub lane: Lane,
}

/// Array-backed pool indexed by slot
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    obstacles: Box<[Obstacle]>,
    /// Reused every tick; capacity equals pool size so pushes never grow it
    recycled: Vec<RecycleEvent>,
}

impl ObstaclePool {
    /// Create `capacity` obstacles at `-spawn_offset - i * spacing`, each in a
    /// random lane
    pub fn new<R: Rng + ?Sized>(
        capacity: usize,
        spacing: f32,
        spawn_offset: f32,
        rng: &mut R,
    ) -> Self {
        let obstacles = (0..capacity)
            .map(|i| Obstacle {
                lane: Lane::random(rng),
                depth: -spawn_offset - i as f32 * spacing,
            })
            .collect();

        Self {
            obstacles,
            recycled: Vec::with_capacity(capacity),
        }
    }

    /// Put every obstacle back at its initial depth with a fresh lane.
    ///
    /// Reuses the existing storage.
    pub fn reset<R: Rng + ?Sized>(&mut self, spacing: f32, spawn_offset: f32, rng: &mut R) {
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.lane = Lane::random(rng);
            obstacle.depth = -spawn_offset - i as f32 * spacing;
        }
        self.recycled.clear();
    }

    /// Advance every obstacle by `speed` and recycle those past `threshold`.
    ///
    /// Iterates in slot order. Each obstacle either moves by exactly `speed`
    /// or lands on `recycle_depth` with a newly sampled lane, never both.
    pub fn advance_and_recycle<R: Rng + ?Sized>(
        &mut self,
        speed: f32,
        threshold: f32,
        recycle_depth: f32,
        rng: &mut R,
    ) -> &[RecycleEvent] {
        self.recycled.clear();

        for (slot, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.depth += speed;

            if obstacle.depth > threshold {
                let previous_lane = obstacle.lane;
                obstacle.lane = Lane::random(rng);
                obstacle.depth = recycle_depth;
                self.recycled.push(RecycleEvent {
                    slot,
                    previous_lane,
                    lane: obstacle.lane,
                });
            }
        }

        &self.recycled
    }

    /// Number of pooled obstacles (constant for the pool's lifetime)
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Obstacle> {
        self.obstacles.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Recycle events from the most recent advance
    pub fn last_recycled(&self) -> &[RecycleEvent] {
        &self.recycled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn depths(pool: &ObstaclePool) -> Vec<f32> {
        pool.iter().map(|o| o.depth).collect()
    }

    #[test]
    fn test_initial_layout() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pool = ObstaclePool::new(3, 30.0, 20.0, &mut rng);
        assert_eq!(pool.len(), 3);
        assert_eq!(depths(&pool), vec![-20.0, -50.0, -80.0]);
    }

    #[test]
    fn test_recycle_after_crossing_threshold() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut pool = ObstaclePool::new(3, 30.0, 20.0, &mut rng);

        assert!(pool.advance_and_recycle(15.0, 10.0, -90.0, &mut rng).is_empty());
        assert_eq!(depths(&pool), vec![-5.0, -35.0, -65.0]);

        // Exactly at the threshold is not past it
        assert!(pool.advance_and_recycle(15.0, 10.0, -90.0, &mut rng).is_empty());
        assert_eq!(depths(&pool), vec![10.0, -20.0, -50.0]);

        let events = pool.advance_and_recycle(15.0, 10.0, -90.0, &mut rng);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].slot, 0);
        assert_eq!(depths(&pool), vec![-90.0, -5.0, -35.0]);
        assert_eq!(pool.get(0).map(|o| o.lane), Some(pool.last_recycled()[0].lane));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = ObstaclePool::new(4, 30.0, 20.0, &mut rng);
        for _ in 0..20 {
            pool.advance_and_recycle(7.0, 10.0, -120.0, &mut rng);
        }
        pool.reset(30.0, 20.0, &mut rng);
        assert_eq!(depths(&pool), vec![-20.0, -50.0, -80.0, -110.0]);
        assert!(pool.last_recycled().is_empty());
    }

    #[test]
    fn test_recycle_buffer_never_grows() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pool = ObstaclePool::new(15, 30.0, 20.0, &mut rng);
        let capacity = pool.recycled.capacity();
        // Large speed recycles the whole pool in one tick
        let events = pool.advance_and_recycle(1000.0, 10.0, -450.0, &mut rng).len();
        assert_eq!(events, 15);
        assert_eq!(pool.recycled.capacity(), capacity);
    }

    proptest! {
        #[test]
        fn prop_size_invariant_and_move_or_recycle(
            seed in any::<u64>(),
            capacity in 1usize..20,
            speeds in proptest::collection::vec(0.1f32..40.0, 1..60),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let recycle_depth = -(capacity as f32 * 30.0);
            let mut pool = ObstaclePool::new(capacity, 30.0, 20.0, &mut rng);

            for speed in speeds {
                let before = depths(&pool);
                let events: Vec<usize> = pool
                    .advance_and_recycle(speed, 10.0, recycle_depth, &mut rng)
                    .iter()
                    .map(|e| e.slot)
                    .collect();

                prop_assert_eq!(pool.len(), capacity);
                for (slot, obstacle) in pool.iter().enumerate() {
                    if events.contains(&slot) {
                        prop_assert_eq!(obstacle.depth, recycle_depth);
                        prop_assert!(before[slot] + speed > 10.0);
                    } else {
                        prop_assert_eq!(obstacle.depth, before[slot] + speed);
                        prop_assert!(obstacle.depth <= 10.0);
                    }
                }
            }
        }
    }
}
