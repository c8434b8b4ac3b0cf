//! Per-frame simulation update
//!
//! Advances the game by one variable-length frame. Rendering happens
//! elsewhere; this only mutates `SimulationState`.

use glam::Vec2;
use rand::Rng;

use super::physics::{age_slashes, integrate_fruits, integrate_particles};
use super::spawn::update_spawner;
use super::state::SimulationState;
use crate::consts::MAX_FRAME_DT;

/// Timing and geometry for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Current timestamp (ms, monotonic)
    pub now: f64,
    /// Frame step (seconds), already clamped
    pub dt: f32,
    /// Play field width/height
    pub field: Vec2,
}

/// Frame step in seconds between two millisecond timestamps
///
/// Clamped to `MAX_FRAME_DT`. Backwards, zero or non-finite deltas become a
/// zero-length step.
pub fn frame_dt(last: f64, now: f64) -> f32 {
    let dt = ((now - last) / 1000.0) as f32;
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(MAX_FRAME_DT)
}

/// Advance the simulation by one frame
///
/// Spawning and fruit physics only run while the game is running. Particles
/// and the swipe trail keep aging in every phase.
pub fn advance<R: Rng + ?Sized>(state: &mut SimulationState, ctx: &FrameContext, rng: &mut R) {
    if state.running() {
        update_spawner(state, ctx.now, ctx.dt as f64 * 1000.0, ctx.field, rng);
        integrate_fruits(state, ctx.field, ctx.dt);
    }

    integrate_particles(state, ctx.dt);
    age_slashes(state, ctx.now);
}
