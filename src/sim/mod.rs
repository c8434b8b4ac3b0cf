//! Simulation module
//!
//! All gameplay logic lives here:
//! - Explicit state passed by reference, no ambient globals
//! - Injected RNG only (seeded in production, deterministic in tests)
//! - Stable iteration order (spawn order, newest first when removing)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod slice;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{
    closest_point_on_segment, segment_intersects_circle, squared_distance_point_to_segment,
};
pub use slice::{SliceOutcome, emit_burst, slice_segment};
pub use spawn::{bomb_chance, spawn_delay_bounds, spawn_fruit, update_spawner};
pub use state::{
    BOMB_BURST_COLOR, Fruit, FruitKind, GameEvent, GamePhase, HudSnapshot, Particle,
    SimulationState, Slash, SpawnState,
};
pub use tick::{FrameContext, advance, frame_dt};
