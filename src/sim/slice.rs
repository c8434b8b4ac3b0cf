//! Swipe slicing
//!
//! One swipe segment is tested against every live fruit. Slicing fruit scores
//! a single point per segment no matter how many fruits it cuts; touching a
//! bomb ends the run on the spot.

use glam::Vec2;
use rand::Rng;

use super::collision::segment_intersects_circle;
use super::state::{BOMB_BURST_COLOR, GameEvent, Particle, SimulationState};
use crate::consts::{BOMB_BURST, FRUIT_BURST, PARTICLE_MAX_LIFE_MS, PARTICLE_MIN_LIFE_MS};
use crate::random_between;

/// What a single swipe segment did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceOutcome {
    /// Touched nothing
    Miss,
    /// Cut one or more fruits
    Sliced { count: u32 },
    /// Touched a bomb; the game is over
    BombHit,
}

/// Emit a burst of `amount` particles at `pos`
pub fn emit_burst<R: Rng + ?Sized>(
    state: &mut SimulationState,
    pos: Vec2,
    color: u32,
    amount: usize,
    rng: &mut R,
) {
    for _ in 0..amount {
        let vel = Vec2::new(
            random_between(rng, -220.0, 220.0),
            random_between(rng, -240.0, 120.0),
        );
        let size = random_between(rng, 2.0, 5.0);
        let life = random_between(rng, PARTICLE_MIN_LIFE_MS, PARTICLE_MAX_LIFE_MS);
        state.push_particle(Particle {
            pos,
            vel,
            size,
            color,
            life,
        });
    }
}

/// Apply one swipe segment `a -> b` to the live fruits
///
/// Fruits are visited newest first. Does nothing unless the game is running.
pub fn slice_segment<R: Rng + ?Sized>(
    state: &mut SimulationState,
    a: Vec2,
    b: Vec2,
    rng: &mut R,
) -> SliceOutcome {
    if !state.running() {
        return SliceOutcome::Miss;
    }

    let mut count = 0u32;
    let mut i = state.fruits.len();
    while i > 0 {
        i -= 1;
        let fruit = &state.fruits[i];
        if !segment_intersects_circle(a, b, fruit.pos, fruit.radius) {
            continue;
        }

        let fruit = state.fruits.remove(i);
        if fruit.is_bomb {
            emit_burst(state, fruit.pos, BOMB_BURST_COLOR, BOMB_BURST, rng);
            state.events.push(GameEvent::BombHit { id: fruit.id });
            log::debug!("Bomb #{} sliced", fruit.id);
            state.end_game();
            return SliceOutcome::BombHit;
        }

        emit_burst(state, fruit.pos, fruit.kind.color(), FRUIT_BURST, rng);
        count += 1;
    }

    if count == 0 {
        return SliceOutcome::Miss;
    }

    // One point per segment, however many fruits it cut
    state.add_score(1);
    state.events.push(GameEvent::Sliced { count });
    log::debug!("Sliced {} fruit(s), score {}", count, state.score);
    SliceOutcome::Sliced { count }
}
