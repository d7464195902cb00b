//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-tick increments
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies
//! - No heap allocation inside a tick

pub mod collision;
pub mod lane;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionDetector, check_collisions};
pub use lane::{Lane, Player, map_hand_position_to_lane};
pub use pool::{Obstacle, ObstaclePool, RecycleEvent};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, World, tick};
