//! Per-frame simulation tick
//!
//! One call per display refresh. Order within a playing tick:
//! lane mapping, player easing, obstacle advance and recycle, score/speed
//! update, collision check.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::CollisionDetector;
use super::lane::{Player, map_hand_position_to_lane};
use super::pool::ObstaclePool;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::PLAYER_DEPTH;
use crate::error::RunnerError;
use crate::tuning::Tuning;

/// Hand input sampled at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Most recent normalized hand position (already mirrored)
    pub hand_x: f32,
    /// Whether the tracker has reported a hand at least once
    pub hand_detected: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            hand_x: 0.5,
            hand_detected: false,
        }
    }
}

/// Everything the loop owns for one session
#[derive(Debug, Clone)]
pub struct World {
    pub state: GameState,
    pub player: Player,
    pub pool: ObstaclePool,
    tuning: Tuning,
    detector: CollisionDetector,
    rng: Pcg32,
    /// Reused every tick; sized for the worst case so it never grows
    events: Vec<GameEvent>,
}

impl World {
    /// Build a session with validated tuning and a seeded RNG
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, RunnerError> {
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let pool = ObstaclePool::new(
            tuning.pool_capacity,
            tuning.spacing,
            tuning.spawn_offset,
            &mut rng,
        );

        Ok(Self {
            state: GameState::new(seed, tuning.initial_speed),
            player: Player::default(),
            pool,
            detector: CollisionDetector::new(),
            rng,
            events: Vec::with_capacity(tuning.pool_capacity + 2),
            tuning,
        })
    }

    /// Start a fresh session in place, reusing the pool storage
    pub fn restart(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
        self.state = GameState::new(seed, self.tuning.initial_speed);
        self.player = Player::default();
        self.pool
            .reset(self.tuning.spacing, self.tuning.spawn_offset, &mut self.rng);
        self.events.clear();
        log::info!("Session restarted with seed {seed}");
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// World-space centre of the player box
    pub fn player_position(&self) -> Vec3 {
        self.player
            .position(self.tuning.entity_height, PLAYER_DEPTH)
    }

    /// World-space centre of the obstacle in `slot`
    pub fn obstacle_position(&self, slot: usize) -> Option<Vec3> {
        self.pool
            .get(slot)
            .map(|o| o.position(self.tuning.lane_width, self.tuning.entity_height))
    }
}

/// Advance the world by one tick and return the events it produced
pub fn tick<'a>(world: &'a mut World, input: &TickInput) -> &'a [GameEvent] {
    world.events.clear();

    match world.state.phase {
        GamePhase::GameOver => return &world.events,
        GamePhase::WaitingForInput => {
            if !input.hand_detected {
                return &world.events;
            }
            world.state.phase = GamePhase::Playing;
            world.events.push(GameEvent::Started);
            log::info!("Hand detected, starting run (seed {})", world.state.seed);
        }
        GamePhase::Playing => {}
    }

    let tuning = &world.tuning;
    world.state.time_ticks += 1;

    // Lane mapping and easing
    let target_x = map_hand_position_to_lane(input.hand_x, tuning);
    world.player.move_toward(target_x, tuning.smoothing);

    // Move obstacles, credit the ones that passed
    let recycled = world.pool.advance_and_recycle(
        world.state.speed,
        tuning.player_depth_threshold,
        tuning.recycle_depth(),
        &mut world.rng,
    );
    for event in recycled {
        world
            .state
            .record_recycle(tuning.score_per_recycle, tuning.speed_increment);
        world.events.push(GameEvent::ScoreChanged {
            score: world.state.score,
        });
        log::debug!(
            "Obstacle {} recycled {:?} -> {:?}, score {}, speed {:.3}",
            event.slot,
            event.previous_lane,
            event.lane,
            world.state.score,
            world.state.speed
        );
    }

    // Collision
    let player_center = world.player.position(tuning.entity_height, PLAYER_DEPTH);
    if let Some(slot) = world.detector.check(player_center, &world.pool, tuning) {
        world.state.phase = GamePhase::GameOver;
        world.events.push(GameEvent::GameOver {
            final_score: world.state.score,
        });
        log::info!(
            "Hit obstacle {slot} after {} ticks, final score {}",
            world.state.time_ticks,
            world.state.score
        );
    }

    &world.events
}
